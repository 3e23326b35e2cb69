// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame scheduling: invalidation coalescing and per-frame damage.

use crate::viewport::Viewport;

bitflags::bitflags! {
    /// What a frame must repaint.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct FrameDamage: u8 {
        /// Repaint the whole scene; viewport geometry changed.
        const ALL       = 0b0000_0001;
        /// Repaint the selection overlay. Set on every frame.
        const SELECTION = 0b0000_0010;
    }
}

/// Coalesces invalidation requests and classifies each frame's damage.
///
/// This replaces the usual tangle of module globals around an
/// animation-frame loop (a pending flag plus cached viewport metrics) with
/// one owned state value. Any number of [`invalidate`](FrameState::invalidate)
/// calls between frames schedule exactly one frame;
/// [`begin_frame`](FrameState::begin_frame) then reports whether the
/// viewport changed since the previous frame, in which case everything must
/// be repainted rather than just the selection overlay.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameState {
    pending: bool,
    last: Option<Viewport>,
}

impl FrameState {
    /// Create a state with no pending frame and no remembered viewport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a frame. Returns true exactly when the caller should
    /// schedule one: the first request since the last
    /// [`begin_frame`](Self::begin_frame).
    pub fn invalidate(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Whether a frame request is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Start a frame: clear the pending flag and report what to repaint.
    ///
    /// [`FrameDamage::ALL`] is included when the viewport's width, height,
    /// or scale factor differs from the previous frame (a pure position
    /// change does not invalidate painted content).
    pub fn begin_frame(&mut self, viewport: &Viewport) -> FrameDamage {
        self.pending = false;
        let changed = match &self.last {
            Some(prev) => {
                prev.bounds.width() != viewport.bounds.width()
                    || prev.bounds.height() != viewport.bounds.height()
                    || prev.scale != viewport.scale
            }
            None => true,
        };
        self.last = Some(*viewport);
        if changed {
            FrameDamage::ALL | FrameDamage::SELECTION
        } else {
            FrameDamage::SELECTION
        }
    }
}
