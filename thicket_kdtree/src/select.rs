// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection (partial sort) over the permutation array.

use crate::coord::Coord;

/// Largest range finished by insertion sort instead of another partition round.
const SORT_CUTOFF: usize = 7;

/// Reorder `order[begin..end]` so that
///
/// - `val(i) <= val(middle)` for `i` in `[begin, middle)`,
/// - `val(j) >= val(middle)` for `j` in `(middle, end)`,
///
/// where `val(i) = points[order[i]][dim]`.
///
/// This is a single-target quickselect: expected linear time, with no
/// worst-case guard beyond the median-of-three pivot.
pub(crate) fn select<T: Coord, const D: usize>(
    points: &[[T; D]],
    order: &mut [usize],
    mut begin: usize,
    middle: usize,
    mut end: usize,
    dim: usize,
) {
    debug_assert!(
        begin <= middle && middle < end && end <= order.len(),
        "selection target out of range"
    );
    loop {
        if end - begin <= SORT_CUTOFF {
            insertion_sort(points, order, begin, end, dim);
            return;
        }
        // Median of three: move the range midpoint next to `begin`, then put
        // the elements at begin, begin + 1, end - 1 in relative order. The
        // middle one of the three becomes the pivot, and the outer two double
        // as scan sentinels.
        order.swap(begin + 1, begin + (end - begin) / 2);
        if points[order[begin]][dim] > points[order[begin + 1]][dim] {
            order.swap(begin, begin + 1);
        }
        if points[order[begin]][dim] > points[order[end - 1]][dim] {
            order.swap(begin, end - 1);
        }
        if points[order[begin + 1]][dim] > points[order[end - 1]][dim] {
            order.swap(begin + 1, end - 1);
        }
        let pivot = points[order[begin + 1]][dim];
        // Scan forwards and backwards for out-of-place pairs and swap them
        // until the pointers cross.
        let mut i = begin + 1;
        let mut j = end - 1;
        loop {
            loop {
                i += 1;
                if points[order[i]][dim] >= pivot {
                    break;
                }
            }
            loop {
                j -= 1;
                if points[order[j]][dim] <= pivot {
                    break;
                }
            }
            if i > j {
                break;
            }
            order.swap(i, j);
        }
        order.swap(begin + 1, j);
        // Now partitioned about [j, i); if `middle` landed inside we are
        // done, otherwise keep selecting in the half that contains it.
        if middle < j {
            end = j;
        } else if middle >= i {
            begin = i;
        } else {
            return;
        }
    }
}

fn insertion_sort<T: Coord, const D: usize>(
    points: &[[T; D]],
    order: &mut [usize],
    begin: usize,
    end: usize,
    dim: usize,
) {
    for i in begin + 1..end {
        // The range [begin, i) is sorted; sink element i into place.
        let item = order[i];
        let mut j = i;
        while j != begin && points[item][dim] < points[order[j - 1]][dim] {
            order[j] = order[j - 1];
            j -= 1;
        }
        order[j] = item;
    }
}
