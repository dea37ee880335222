// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`source`]: Camera capture, library enumeration and identifier resolution
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `image` crate types)
//! - Traits are `Send + Sync` for use from background tasks
//! - Methods return `Result` with domain error types
//! - No `async fn` - callers wrap calls in Iced `Task`s
//!
//! # Example
//!
//! ```
//! use iced_picker::application::port::ImageSource;
//! use iced_picker::domain::ImageId;
//!
//! fn first_image_size(source: &impl ImageSource) -> Option<(u32, u32)> {
//!     let entries = source.enumerate_library().ok()?;
//!     let first: &ImageId = &entries.first()?.id;
//!     let image = source.resolve(first).ok()?;
//!     Some((image.width(), image.height()))
//! }
//! ```

pub mod source;

pub use source::{AcquisitionSource, ImageSource, SourceError};
