// SPDX-License-Identifier: MPL-2.0
//! Decoded images and library identifiers.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A decoded RGBA8 image.
///
/// Pixels are shared through an `Arc`, so cloning an `ImageData` is cheap and
/// the viewer can hand the same image to the host without copying.
///
/// # Example
///
/// ```
/// use iced_picker::domain::ImageData;
///
/// let image = ImageData::from_rgba(4, 2, vec![0u8; 4 * 2 * 4]);
/// assert_eq!(image.width(), 4);
/// assert_eq!(image.height(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ImageData {
    width: u32,
    height: u32,
    rgba_bytes: Arc<Vec<u8>>,
}

impl ImageData {
    /// Creates an image from dimensions and shared RGBA pixel data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn new(width: u32, height: u32, rgba_bytes: Arc<Vec<u8>>) -> Self {
        let expected_len = (width as usize) * (height as usize) * 4;
        assert_eq!(
            rgba_bytes.len(),
            expected_len,
            "RGBA data length mismatch: expected {expected_len}, got {}",
            rgba_bytes.len()
        );

        Self {
            width,
            height,
            rgba_bytes,
        }
    }

    /// Creates an image, or returns `None` when the buffer length does not
    /// match `width * height * 4`. Providers decoding untrusted data use this.
    #[must_use]
    pub fn try_from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Option<Self> {
        let expected_len = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        (rgba_bytes.len() == expected_len).then(|| Self {
            width,
            height,
            rgba_bytes: Arc::new(rgba_bytes),
        })
    }

    /// Creates an image from dimensions and owned RGBA pixel data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Self {
        Self::new(width, height, Arc::new(rgba_bytes))
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `true` if either dimension is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Returns `true` if both images share the same pixel buffer.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.rgba_bytes, &other.rgba_bytes)
    }
}

impl PartialEq for ImageData {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && (self.ptr_eq(other) || self.rgba_bytes == other.rgba_bytes)
    }
}

/// Opaque identifier of an image in the photo library.
///
/// The filesystem source uses the file path itself, so names that are not
/// valid UTF-8 still resolve to the file they were listed from. Other
/// sources may use any stable string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(PathBuf);

impl ImageId {
    #[must_use]
    pub fn new(id: impl Into<PathBuf>) -> Self {
        Self(id.into())
    }

    /// The identifier as text, if it is valid UTF-8.
    #[must_use]
    pub fn to_str(&self) -> Option<&str> {
        self.0.to_str()
    }

    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Interprets the identifier as a filesystem path.
    #[must_use]
    pub fn to_path(&self) -> PathBuf {
        self.0.clone()
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<&Path> for ImageId {
    fn from(path: &Path) -> Self {
        Self(path.to_path_buf())
    }
}

impl From<PathBuf> for ImageId {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&str> for ImageId {
    fn from(id: &str) -> Self {
        Self(PathBuf::from(id))
    }
}

/// One item of a library listing: an identifier and its thumbnail.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryEntry {
    pub id: ImageId,
    pub thumbnail: ImageData,
}

impl LibraryEntry {
    #[must_use]
    pub fn new(id: ImageId, thumbnail: ImageData) -> Self {
        Self { id, thumbnail }
    }
}
