// SPDX-License-Identifier: MPL-2.0
//! Image source port definition.
//!
//! The [`ImageSource`] trait is the single external collaborator of both the
//! viewer and the picker: it captures from a camera, lists the photo library
//! and resolves library identifiers to full images.
//!
//! Methods are synchronous and may block for a long time (file I/O, decoding,
//! hardware). Callers run them off the UI thread and feed the outcome back to
//! the components tagged with a [`RequestId`](crate::application::RequestId).

use crate::domain::{ImageData, ImageId, LibraryEntry};
use thiserror::Error;

// =============================================================================
// AcquisitionSource
// =============================================================================

/// Where the viewer should acquire its next image from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcquisitionSource {
    /// Capture a new image with the camera.
    Camera,
    /// Let the user choose one existing image from the library.
    Library,
}

impl AcquisitionSource {
    /// Short lowercase label used in logs and notices.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AcquisitionSource::Camera => "camera",
            AcquisitionSource::Library => "library",
        }
    }
}

// =============================================================================
// SourceError
// =============================================================================

/// Errors reported by an [`ImageSource`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The user or the system refused access to the library or camera.
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// The user dismissed the capture or chooser without picking anything.
    #[error("Acquisition cancelled")]
    Cancelled,

    /// The requested device or source does not exist on this system.
    #[error("Source unavailable: {0}")]
    Unavailable(String),

    /// The identifier no longer names an image (deleted or moved).
    #[error("Image not found: {0}")]
    NotFound(ImageId),

    /// The image data could not be decoded.
    #[error("Could not decode image: {0}")]
    Decode(String),

    /// Any other I/O failure.
    #[error("I/O error: {0}")]
    Io(String),
}

impl SourceError {
    /// Returns `true` for the silent, user-initiated cancellation.
    #[must_use]
    pub fn is_cancellation(&self) -> bool {
        matches!(self, SourceError::Cancelled)
    }

    /// Returns `true` when access was refused.
    #[must_use]
    pub fn is_access_denied(&self) -> bool {
        matches!(self, SourceError::AccessDenied(_))
    }
}

// =============================================================================
// ImageSource Trait
// =============================================================================

/// Port for acquiring images from a camera or a photo library.
///
/// Implementations must be `Send + Sync` so a single shared instance can be
/// used from background tasks.
pub trait ImageSource: Send + Sync {
    /// Captures a new image from the camera.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Cancelled`] if the user aborted the capture,
    /// [`SourceError::Unavailable`] if there is no camera, or another
    /// variant on hardware/decoding failure.
    fn capture(&self) -> Result<ImageData, SourceError>;

    /// Lists the library in its stable enumeration order.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::AccessDenied`] if the library may not be read,
    /// or another variant if enumeration fails.
    fn enumerate_library(&self) -> Result<Vec<LibraryEntry>, SourceError>;

    /// Resolves a library identifier to its full image.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::NotFound`] if the image disappeared since it was
    /// listed, or another variant if it cannot be read or decoded.
    fn resolve(&self, id: &ImageId) -> Result<ImageData, SourceError>;
}
