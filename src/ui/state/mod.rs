// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Gesture and viewport logic kept apart from the widgets so it can be tested
//! without a renderer.

pub mod drag;
pub mod pinch;
pub mod viewport;
pub mod zoom;

// Re-export commonly used types for convenience
pub use drag::DragState;
pub use pinch::{PinchStep, PinchTracker};
pub use viewport::ViewportState;
pub use zoom::{ZoomMultiple, ZoomRange};
