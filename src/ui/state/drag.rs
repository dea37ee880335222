// SPDX-License-Identifier: MPL-2.0
//! Grab-to-pan bookkeeping.

use iced::{Point, Vector};

/// Where a drag was grabbed and what the viewport offset was at that moment.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Grab {
    pointer: Point,
    offset: Vector,
}

/// Pan gesture in progress, if any.
///
/// Offsets are derived from the grab point rather than accumulated per move,
/// so dropped or coalesced move events cannot make the image drift.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    pub is_dragging: bool,
    grab: Option<Grab>,
}

impl DragState {
    pub fn start(&mut self, pointer: Point, offset: Vector) {
        self.grab = Some(Grab { pointer, offset });
        self.is_dragging = true;
    }

    pub fn stop(&mut self) {
        self.grab = None;
        self.is_dragging = false;
    }

    /// Unclamped offset that keeps the grabbed image point under `pointer`.
    ///
    /// Content follows the pointer, so moving right lowers the offset.
    #[must_use]
    pub fn calculate_offset(&self, pointer: Point) -> Option<Vector> {
        self.grab.map(|grab| grab.offset - (pointer - grab.pointer))
    }
}
