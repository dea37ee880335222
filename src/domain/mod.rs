// SPDX-License-Identifier: MPL-2.0
//! Domain types shared by the viewer, the picker and the image source port.
//!
//! Nothing in here depends on Iced; the UI layer converts these types into
//! render handles at the edge.

pub mod image;

pub use image::{ImageData, ImageId, LibraryEntry};
