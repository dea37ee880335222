// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`viewer`] - Single-image viewer with pan, zoom and acquisition
//! - [`selection`] - Images chosen through the picker
//! - [`picker`] - Multi-select library picker
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state management (zoom, viewport, drag, pinch)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`image_handle`] - Domain image to render handle conversion
//! - [`navbar`] - Navigation bar with screen tabs
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod image_handle;
pub mod navbar;
pub mod notifications;
pub mod picker;
pub mod selection;
pub mod state;
pub mod styles;
pub mod viewer;
