// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Picker: Kurbo-native pointer picking over a static point cloud.
//!
//! Thicket Picker is the interaction layer around [`thicket_kdtree`]: it
//! turns pointer positions into selections of nearby points and tells a
//! render loop how much of the scene needs repainting.
//!
//! - [`Viewport`] maps between client (pointer) coordinates, the unit
//!   drawing domain, and device pixels.
//! - [`FrameState`] coalesces invalidation requests into single frames and
//!   classifies each frame's [`FrameDamage`] (full repaint after a resize
//!   or rescale, selection-only otherwise).
//! - [`Picker`] owns the point store and its kd-tree and answers
//!   exact-radius picks, filtering the tree's axis-aligned candidates with
//!   a true Euclidean distance test.
//!
//! Point generation, canvas drawing, and event plumbing stay outside this
//! crate; it only owns the state those layers would otherwise smear across
//! module globals.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use thicket_picker::{FrameDamage, FrameState, Picker, Viewport};
//!
//! let points = vec![
//!     Point::new(-0.25, 0.0),
//!     Point::new(0.25, 0.0),
//!     Point::new(0.0, 0.4),
//! ];
//! let mut picker = Picker::new(points).unwrap();
//! let mut frames = FrameState::new();
//!
//! // A pointer event arrives: request a frame (further requests coalesce).
//! assert!(frames.invalidate());
//! assert!(!frames.invalidate());
//!
//! // The frame runs: first paint is always a full repaint.
//! let viewport = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0), 1.0);
//! let damage = frames.begin_frame(&viewport);
//! assert!(damage.contains(FrameDamage::ALL));
//!
//! // Pick around the domain position under the pointer. The cursor maps
//! // to (-0.125, 0.0), within 0.15 of the first point only.
//! let cursor = viewport.domain_from_client(Point::new(300.0, 300.0));
//! let hits = picker.pick(cursor, 0.15).unwrap();
//! assert_eq!(hits, [0]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`; enable the `libm` feature
//! instead of the default `std` for no_std builds.

#![no_std]

extern crate alloc;

pub mod frame;
pub mod picker;
pub mod viewport;

pub use frame::{FrameDamage, FrameState};
pub use picker::Picker;
pub use viewport::Viewport;
