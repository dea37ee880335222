// SPDX-License-Identifier: MPL-2.0
//! `iced_picker` is a single-image pan/zoom viewer and a multi-select photo
//! library picker built with the Iced GUI framework.
//!
//! Layers follow the dependency rule: [`domain`] types, [`application`]
//! ports and request tracking, [`infrastructure`] adapters, [`ui`]
//! components, and the [`app`] host wiring them together.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
