// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket kd-tree: a static spatial index over D-dimensional points.
//!
//! The tree is built once over an externally owned slice of points and then
//! answers any number of radius queries against it.
//!
//! - Balanced construction: points are laid out in an implicit, array-backed
//!   binary tree (heap-style `2k + 1` / `2k + 2` indexing) by repeated
//!   median selection, cycling dimensions per level.
//! - Compact storage: one permutation of point identifiers plus one split
//!   value per internal node; no per-node allocation, no stored dimensions.
//! - Push-style queries: [`KdTree::search_radius`] invokes a callback per
//!   candidate identifier instead of collecting results.
//!
//! The index prunes by per-axis split comparisons, not exact sphere
//! geometry, so the visited set is a superset of the true radius result.
//! Callers confirm exact containment themselves — see the example below and
//! the `thicket_picker` crate for the intended pattern.
//!
//! It is generic over the scalar type (via [`Coord`]) and the compile-time
//! dimension count, and does not depend on any geometry crate.
//!
//! # Example
//!
//! ```rust
//! use thicket_kdtree::KdTree;
//!
//! let points = [[0.0_f64, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
//! let tree = KdTree::build(&points).unwrap();
//!
//! // Candidates are a superset of the true result; confirm exactly.
//! let (center, radius) = ([0.0, 0.0], 1.2);
//! let mut hits = Vec::new();
//! tree.search_radius(center, radius, |id| {
//!     let [dx, dy] = [points[id][0] - center[0], points[id][1] - center[1]];
//!     if dx * dx + dy * dy < radius * radius {
//!         hits.push(id);
//!     }
//! })
//! .unwrap();
//!
//! hits.sort_unstable();
//! assert_eq!(hits, vec![0, 1, 2]);
//! ```
//!
//! ## Immutability and sharing
//!
//! A built tree is never mutated. Queries take `&self` and allocate only a
//! local traversal stack, so a completed tree can be queried concurrently
//! from multiple threads without synchronization.
//!
//! ## Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates and radii.
//! Debug builds may assert.

#![no_std]

extern crate alloc;

// Tests use std float math for brute-force distance checks.
#[cfg(test)]
extern crate std;

pub mod coord;
pub mod error;
mod select;
pub mod tree;

pub use coord::Coord;
pub use error::{BuildError, QueryError};
pub use tree::KdTree;
