// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-driven picking over a random point cloud.
//!
//! This example plays the role of the surrounding application: it generates
//! points, owns the frame loop state, and feeds pointer positions through
//! the viewport into the picker.
//!
//! Run:
//! - `cargo run -p thicket_demos --example pointer_picking`

use kurbo::{Point, Rect};
use thicket_picker::{FrameDamage, FrameState, Picker, Viewport};

struct Rng(u64);

impl Rng {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn generate_points(count: usize) -> Vec<Point> {
    let mut rng = Rng(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_f64() - 0.5, rng.next_f64() - 0.5))
        .collect()
}

fn main() {
    let points = generate_points(100_000);
    let mut picker = Picker::new(points.clone()).unwrap();
    let mut frames = FrameState::new();

    let viewport = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0), 2.0);
    let radius = 0.01;

    // A stream of pointer positions, as a pointer-move handler would see them.
    let pointer_path = [
        Point::new(400.0, 300.0),
        Point::new(410.0, 296.0),
        Point::new(520.0, 180.0),
        Point::new(799.0, 1.0),
    ];

    for (frame, cursor_client) in pointer_path.into_iter().enumerate() {
        // Coalesce event-driven invalidations into one frame.
        if !frames.invalidate() {
            continue;
        }
        let damage = frames.begin_frame(&viewport);
        let cursor = viewport.domain_from_client(cursor_client);
        let hits = picker.pick(cursor, radius).unwrap();
        println!(
            "frame {frame}: damage {:?}, cursor ({:+.3}, {:+.3}), {} point(s) within {radius}",
            damage,
            cursor.x,
            cursor.y,
            hits.len()
        );

        // The picker must agree with a brute-force scan.
        let expected = points
            .iter()
            .filter(|p| p.distance(cursor) < radius)
            .count();
        assert_eq!(hits.len(), expected);

        if frame == 0 {
            assert!(damage.contains(FrameDamage::ALL), "first frame paints all");
        } else {
            assert_eq!(damage, FrameDamage::SELECTION);
        }
    }

    println!("tree: {:?}", picker.tree());
}
