// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`filesystem`]: Photo library and capture folder on disk (implements [`ImageSource`])
//!
//! [`ImageSource`]: crate::application::port::ImageSource

pub mod filesystem;

pub use filesystem::FsImageSource;
