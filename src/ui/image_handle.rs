// SPDX-License-Identifier: MPL-2.0
//! Conversion of domain images into Iced render handles.

use crate::domain::ImageData;
use iced::widget::image::Handle;

/// Builds an Iced image handle from decoded RGBA pixels.
///
/// Handles are created once per image (on load, or when the library listing
/// arrives) and reused by every frame.
#[must_use]
pub fn to_handle(image: &ImageData) -> Handle {
    Handle::from_rgba(image.width(), image.height(), image.rgba_bytes().to_vec())
}
