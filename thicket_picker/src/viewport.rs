// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport geometry: client rectangle, device scale, and coordinate mapping.

use kurbo::{Affine, Point, Rect};

/// Cached viewport geometry for a square-domain view.
///
/// The drawing domain is the unit square centered on the origin (`-0.5` to
/// `0.5` per axis). A `Viewport` places that square inside a client
/// rectangle: uniform scale by the rectangle's shorter side times the device
/// scale factor, centered in the rectangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Client rectangle in logical coordinates.
    pub bounds: Rect,
    /// Device pixels per logical unit.
    pub scale: f64,
}

impl Viewport {
    /// Create a viewport from a client rectangle and device scale factor.
    pub fn new(bounds: Rect, scale: f64) -> Self {
        Self { bounds, scale }
    }

    /// Side length of the domain square in device pixels.
    pub fn size(&self) -> f64 {
        self.bounds.width().min(self.bounds.height()) * self.scale
    }

    /// Transform from domain coordinates to device coordinates: uniform
    /// scale by [`size`](Self::size), then translation to the rectangle
    /// center.
    pub fn view_transform(&self) -> Affine {
        let size = self.size();
        Affine::new([
            size,
            0.0,
            0.0,
            size,
            0.5 * self.bounds.width(),
            0.5 * self.bounds.height(),
        ])
    }

    /// Map a pointer position in client coordinates into the unit domain.
    ///
    /// The rectangle center maps to the domain origin and the rectangle
    /// edges to `±0.5` on each axis. Positions outside the rectangle map
    /// outside that range; callers that care should clamp or ignore them.
    pub fn domain_from_client(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.bounds.x0) / self.bounds.width() - 0.5,
            (p.y - self.bounds.y0) / self.bounds.height() - 0.5,
        )
    }
}
