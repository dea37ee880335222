// SPDX-License-Identifier: MPL-2.0
//! Image decoding and thumbnailing with the `image` crate.

use crate::application::port::SourceError;
use crate::domain::{ImageData, ImageId};
use image_rs::DynamicImage;
use std::io;
use std::path::Path;

/// Decodes the file at `path` into a [`DynamicImage`].
///
/// # Errors
///
/// - [`SourceError::NotFound`] if the file does not exist
/// - [`SourceError::AccessDenied`] if it may not be read
/// - [`SourceError::Decode`] if the bytes are not a supported image
/// - [`SourceError::Io`] for any other read failure
pub fn decode_file(path: &Path) -> Result<DynamicImage, SourceError> {
    let bytes = std::fs::read(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => SourceError::NotFound(ImageId::from(path)),
        _ => map_io_error(&err, path),
    })?;

    image_rs::load_from_memory(&bytes)
        .map_err(|err| SourceError::Decode(format!("{}: {err}", path.display())))
}

/// Converts a decoded image to RGBA8 domain data.
#[must_use]
pub fn to_image_data(image: &DynamicImage) -> ImageData {
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    ImageData::from_rgba(width, height, rgba.into_raw())
}

/// Builds a thumbnail that fits in a `size` x `size` square, keeping aspect ratio.
///
/// Images already inside the square are never scaled up.
#[must_use]
pub fn thumbnail(image: &DynamicImage, size: u32) -> ImageData {
    if image.width() <= size && image.height() <= size {
        return to_image_data(image);
    }
    to_image_data(&image.thumbnail(size, size))
}

/// Maps an I/O error on `path` to the source error taxonomy.
pub fn map_io_error(err: &io::Error, path: &Path) -> SourceError {
    match err.kind() {
        io::ErrorKind::PermissionDenied => {
            SourceError::AccessDenied(format!("{}: {err}", path.display()))
        }
        _ => SourceError::Io(format!("{}: {err}", path.display())),
    }
}
