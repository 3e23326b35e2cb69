// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for construction and queries.

use thiserror::Error;

/// Errors rejected when building a [`KdTree`](crate::KdTree).
///
/// Construction is atomic: on error, no partially built tree is observable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The point set is empty; the tree requires at least one point.
    #[error("point set is empty")]
    Empty,

    /// The dimension count is zero; points need at least one coordinate.
    #[error("dimension count must be at least 1")]
    ZeroDimension,
}

/// Errors rejected at query entry, before any visitation occurs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The search radius is negative.
    #[error("search radius is negative")]
    NegativeRadius,
}
