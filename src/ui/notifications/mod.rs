// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Acquisition failures, access problems and selection-limit notices are
//! reported as toasts that never block interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```
//! use iced_picker::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::warning("Camera unavailable"));
//! assert_eq!(manager.visible_count(), 1);
//! ```
//!
//! Toasts last 3s for success/info and 5s for warnings, counted from when
//! they appear; errors stay until dismissed. At most three are on screen and
//! a repeated notice bumps a counter on the existing toast.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
