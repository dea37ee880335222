// SPDX-License-Identifier: MPL-2.0
//! Zoom bounds management
//!
//! This module handles the allowed scale range of the viewer:
//! - Maximum zoom as a validated multiple of native resolution
//! - Fit-to-bounds scale computation
//! - The `[min, max]` range derived from both

pub use crate::config::{DEFAULT_MAX_ZOOM, MAX_MAX_ZOOM, MIN_MAX_ZOOM};
use iced::Size;

/// Maximum zoom as a multiple of native resolution, guaranteed to be within
/// the valid range (1×–8×).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomMultiple(f32);

impl ZoomMultiple {
    /// Creates a new multiple, clamping the value to the valid range.
    ///
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(multiple: f32) -> Self {
        if multiple.is_finite() {
            Self(multiple.clamp(MIN_MAX_ZOOM, MAX_MAX_ZOOM))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ZoomMultiple {
    fn default() -> Self {
        Self(DEFAULT_MAX_ZOOM)
    }
}

/// Scale at which `image` fits entirely inside `bounds`, keeping aspect ratio.
///
/// Returns `None` when either size is degenerate.
#[must_use]
pub fn fit_scale(image: Size, bounds: Size) -> Option<f32> {
    if image.width <= 0.0 || image.height <= 0.0 || bounds.width <= 0.0 || bounds.height <= 0.0 {
        return None;
    }
    Some((bounds.width / image.width).min(bounds.height / image.height))
}

/// Inclusive range of allowed scales for one image in one viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomRange {
    min: f32,
    max: f32,
}

impl ZoomRange {
    /// Range used before an image and bounds are both known.
    pub const IDENTITY: Self = Self { min: 1.0, max: 1.0 };

    /// Computes the range for an image shown in `bounds`.
    ///
    /// The minimum fits the image to the bounds. The maximum is `multiple`
    /// times native resolution, but never below the minimum: a small image
    /// in a large viewport is already past the multiple when fitted.
    #[must_use]
    pub fn for_image(image: Size, bounds: Size, multiple: ZoomMultiple) -> Self {
        match fit_scale(image, bounds) {
            Some(min) => Self {
                min,
                max: multiple.value().max(min),
            },
            None => Self::IDENTITY,
        }
    }

    #[must_use]
    pub fn min(self) -> f32 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f32 {
        self.max
    }

    /// Clamps `scale` into the range. Non-finite values collapse to the minimum.
    #[must_use]
    pub fn clamp(self, scale: f32) -> f32 {
        if scale.is_finite() {
            scale.clamp(self.min, self.max)
        } else {
            self.min
        }
    }

    #[must_use]
    pub fn contains(self, scale: f32) -> bool {
        scale >= self.min && scale <= self.max
    }

    /// Returns whether the range allows any zooming at all.
    #[must_use]
    pub fn is_fixed(self) -> bool {
        (self.max - self.min).abs() <= f32::EPSILON
    }
}

impl Default for ZoomRange {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Formats a scale as a whole percentage for display (e.g. `1.5` → `"150%"`).
#[must_use]
pub fn format_percent(scale: f32) -> String {
    format!("{:.0}%", scale * 100.0)
}
