// SPDX-License-Identifier: MPL-2.0
//! Two-finger pinch tracking for touch screens.
//!
//! The tracker follows at most two fingers. Once both are down, every move
//! yields the scale factor since the previous move and the midpoint of the
//! fingers, which serves as the zoom anchor.

use iced::touch::Finger;
use iced::Point;

/// Incremental pinch update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchStep {
    pub factor: f32,
    pub anchor: Point,
}

/// Tracks the fingers taking part in a pinch gesture.
#[derive(Debug, Clone, Default)]
pub struct PinchTracker {
    fingers: Vec<(Finger, Point)>,
    last_distance: Option<f32>,
}

impl PinchTracker {
    /// Registers a finger touching down. A third finger is ignored.
    pub fn press(&mut self, finger: Finger, position: Point) {
        if self.fingers.len() < 2 && !self.fingers.iter().any(|(id, _)| *id == finger) {
            self.fingers.push((finger, position));
            self.last_distance = self.distance();
        }
    }

    /// Registers a finger moving, returning the pinch step if two fingers are down.
    pub fn moved(&mut self, finger: Finger, position: Point) -> Option<PinchStep> {
        let slot = self.fingers.iter_mut().find(|(id, _)| *id == finger)?;
        slot.1 = position;

        let distance = self.distance()?;
        let previous = self.last_distance.replace(distance)?;
        if previous <= f32::EPSILON {
            return None;
        }

        Some(PinchStep {
            factor: distance / previous,
            anchor: self.midpoint()?,
        })
    }

    /// Registers a finger lifting or being lost.
    pub fn lift(&mut self, finger: Finger) {
        self.fingers.retain(|(id, _)| *id != finger);
        self.last_distance = self.distance();
    }

    /// Returns whether two fingers are down.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.fingers.len() == 2
    }

    /// Number of fingers currently down.
    #[must_use]
    pub fn finger_count(&self) -> usize {
        self.fingers.len()
    }

    fn distance(&self) -> Option<f32> {
        match self.fingers.as_slice() {
            [(_, a), (_, b)] => Some(a.distance(*b)),
            _ => None,
        }
    }

    fn midpoint(&self) -> Option<Point> {
        match self.fingers.as_slice() {
            [(_, a), (_, b)] => Some(Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)),
            _ => None,
        }
    }
}
