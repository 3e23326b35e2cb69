// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radius picking over a static point set.

use alloc::vec::Vec;

use kurbo::Point;
use thicket_kdtree::{BuildError, KdTree, QueryError};

/// Pointer-driven selection over a fixed set of 2D points.
///
/// Owns the point store, the kd-tree built over it, and a reusable
/// selection buffer. The tree reports leaf-level candidates (a superset of
/// the true radius result); [`pick`](Picker::pick) confirms each candidate
/// with an exact Euclidean distance test, so callers never see the tree's
/// false positives.
pub struct Picker {
    points: Vec<Point>,
    tree: KdTree<f64, 2>,
    selection: Vec<usize>,
}

impl Picker {
    /// Build a picker over `points`. The index is constructed eagerly; an
    /// empty point set is rejected.
    pub fn new(points: Vec<Point>) -> Result<Self, BuildError> {
        let coords: Vec<[f64; 2]> = points.iter().map(|p| [p.x, p.y]).collect();
        let tree = KdTree::build(&coords)?;
        Ok(Self {
            points,
            tree,
            selection: Vec::new(),
        })
    }

    /// The stored points. Identifiers returned by [`pick`](Self::pick)
    /// index into this slice.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The underlying spatial index.
    pub fn tree(&self) -> &KdTree<f64, 2> {
        &self.tree
    }

    /// Identifiers of every point within exact Euclidean distance `radius`
    /// of `center`, in visitation order.
    ///
    /// The returned slice borrows an internal buffer that the next call
    /// reuses; clone it to keep a selection across picks.
    pub fn pick(&mut self, center: Point, radius: f64) -> Result<&[usize], QueryError> {
        let points = &self.points;
        let selection = &mut self.selection;
        selection.clear();
        self.tree.search_radius([center.x, center.y], radius, |id| {
            if points[id].distance(center) < radius {
                selection.push(id);
            }
        })?;
        Ok(&self.selection)
    }
}

impl core::fmt::Debug for Picker {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Picker")
            .field("points", &self.points.len())
            .field("tree", &self.tree)
            .field("selected", &self.selection.len())
            .finish_non_exhaustive()
    }
}
