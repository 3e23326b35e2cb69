// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inspect how construction lays points out across tree leaves.
//!
//! Run:
//! - `cargo run -p thicket_demos --example leaf_layout`

use thicket_kdtree::KdTree;

fn main() {
    // A point count that is not a power of two, to show remainder spreading.
    let n = 1000usize;
    let points: Vec<[f64; 2]> = (0..n)
        .map(|i| {
            let a = i as f64 * 0.618_033_988_749_895;
            let r = (i as f64 / n as f64).sqrt() * 0.5;
            [r * a.cos(), r * a.sin()]
        })
        .collect();

    let tree = KdTree::build(&points).unwrap();
    println!(
        "{n} points -> depth {}, {} leaves, {} splits",
        tree.depth(),
        tree.leaf_count(),
        tree.splits().len()
    );

    let (mut smallest, mut largest) = (usize::MAX, 0usize);
    let mut covered = 0usize;
    for leaf in 0..tree.leaf_count() {
        let range = tree.leaf_range(leaf);
        assert_eq!(range.start, covered, "leaf ranges tile the permutation");
        covered = range.end;
        smallest = smallest.min(range.len());
        largest = largest.max(range.len());
    }
    assert_eq!(covered, n);
    println!("leaf occupancy: {smallest}..={largest} points per leaf");

    // The permutation stays a bijection on 0..n.
    let mut seen = vec![false; n];
    for &id in tree.order() {
        assert!(!seen[id]);
        seen[id] = true;
    }
    println!("permutation covers all {n} identifiers exactly once");
}
