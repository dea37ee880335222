// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::picker;
use crate::ui::selection;
use crate::ui::viewer;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(viewer::Message),
    Picker(picker::Message),
    Selection(selection::Message),
    Navbar(navbar::Message),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
///
/// Flags take precedence over the settings file.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional image path to open in the viewer on startup.
    pub file_path: Option<PathBuf>,
    /// Library directory override.
    pub library_dir: Option<PathBuf>,
    /// Camera capture folder override.
    pub camera_dir: Option<PathBuf>,
    /// Selection limit override for the picker.
    pub max_selectable: Option<usize>,
    /// Settings file to read instead of the default location.
    pub config_path: Option<PathBuf>,
}
