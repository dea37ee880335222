// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Maximum zoom multiple and gesture factors
//! - **Library**: Thumbnail sizing
//! - **Picker**: Grid layout

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Default maximum zoom, as a multiple of the image's native resolution.
pub const DEFAULT_MAX_ZOOM: f32 = 3.0;

/// Lowest accepted value for the maximum zoom multiple.
pub const MIN_MAX_ZOOM: f32 = 1.0;

/// Highest accepted value for the maximum zoom multiple.
pub const MAX_MAX_ZOOM: f32 = 8.0;

/// Scale factor applied per mouse wheel line.
pub const WHEEL_ZOOM_FACTOR: f32 = 1.1;

/// Scale factor applied per 100 pixels of trackpad scroll.
pub const PIXEL_SCROLL_ZOOM_FACTOR: f32 = 1.25;

// ==========================================================================
// Library Defaults
// ==========================================================================

/// Default edge length (in pixels) of generated library thumbnails.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 160;

/// Minimum thumbnail edge length.
pub const MIN_THUMBNAIL_SIZE: u32 = 32;

/// Maximum thumbnail edge length.
pub const MAX_THUMBNAIL_SIZE: u32 = 512;

// ==========================================================================
// Picker Defaults
// ==========================================================================

/// Spacing between grid cells in the picker.
pub const GRID_SPACING: f32 = 4.0;

/// Edge length of a grid cell in the picker.
pub const GRID_CELL_SIZE: f32 = 120.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MAX_ZOOM >= 1.0);
    assert!(MAX_MAX_ZOOM > MIN_MAX_ZOOM);
    assert!(DEFAULT_MAX_ZOOM >= MIN_MAX_ZOOM);
    assert!(DEFAULT_MAX_ZOOM <= MAX_MAX_ZOOM);
    assert!(WHEEL_ZOOM_FACTOR > 1.0);
    assert!(PIXEL_SCROLL_ZOOM_FACTOR > 1.0);

    assert!(MIN_THUMBNAIL_SIZE > 0);
    assert!(MAX_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);

    assert!(GRID_CELL_SIZE > 0.0);
    assert!(GRID_SPACING >= 0.0);
};
