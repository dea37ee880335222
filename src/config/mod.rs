// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[library]` - Photo library directory and thumbnail size
//! - `[camera]` - Capture drop folder used as the camera source
//! - `[picker]` - Multi-select picker limits
//! - `[viewer]` - Viewer zoom bounds
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `ICED_PICKER_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_picker::config;
//! use std::path::Path;
//!
//! let (mut config, _warning) = config::load();
//! config.picker.max_selectable = Some(4);
//! config::save_to_path(&config, Path::new("settings.toml")).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::picker::PickerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedPicker";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_PICKER_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Photo library settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LibraryConfig {
    /// Directory browsed by the picker and the viewer's library chooser.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    /// Edge length of generated thumbnails in pixels.
    #[serde(
        default = "default_thumbnail_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_size: Option<u32>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            directory: None,
            thumbnail_size: default_thumbnail_size(),
        }
    }
}

/// Camera settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CameraConfig {
    /// Folder where a tethered camera drops its captures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

/// Multi-select picker settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PickerSection {
    /// Upper bound on simultaneously selected images. Unbounded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_selectable: Option<usize>,
}

/// Viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Maximum zoom as a multiple of native resolution.
    #[serde(default = "default_max_zoom", skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<f32>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            max_zoom: default_max_zoom(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub library: LibraryConfig,

    #[serde(default)]
    pub camera: CameraConfig,

    #[serde(default)]
    pub picker: PickerSection,

    #[serde(default)]
    pub viewer: ViewerConfig,
}

impl Config {
    /// Library directory, falling back to the platform pictures directory.
    #[must_use]
    pub fn library_directory(&self) -> Option<PathBuf> {
        self.library.directory.clone().or_else(dirs::picture_dir)
    }

    /// Thumbnail size clamped to the supported range.
    #[must_use]
    pub fn thumbnail_size(&self) -> u32 {
        self.library
            .thumbnail_size
            .unwrap_or(DEFAULT_THUMBNAIL_SIZE)
            .clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE)
    }

    /// Picker configuration derived from the `[picker]` section.
    #[must_use]
    pub fn picker_config(&self) -> PickerConfig {
        PickerConfig {
            max_selectable: self.picker.max_selectable,
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_thumbnail_size() -> Option<u32> {
    Some(DEFAULT_THUMBNAIL_SIZE)
}

fn default_max_zoom() -> Option<f32> {
    Some(DEFAULT_MAX_ZOOM)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_default_config_path() -> Option<PathBuf> {
    let base = std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            dirs::config_dir().map(|mut path| {
                path.push(APP_NAME);
                path
            })
        });

    base.map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). A missing file yields the
/// defaults silently; an unreadable or invalid file yields the defaults and a
/// warning message meant for the user.
pub fn load() -> (Config, Option<String>) {
    match get_default_config_path() {
        Some(path) => load_or_default(&path),
        None => (Config::default(), None),
    }
}

/// Loads the configuration at `path`, degrading to defaults like [`load`].
pub fn load_or_default(path: &Path) -> (Config, Option<String>) {
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(path) {
        Ok(config) => (config, None),
        Err(err) => {
            log::warn!("Ignoring config at {}: {err}", path.display());
            (
                Config::default(),
                Some(format!(
                    "Settings file {} could not be read, defaults are used",
                    path.display()
                )),
            )
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(Error::io(path))?;
    toml::from_str(&content).map_err(Error::parse(path))
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(Error::io(parent))?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content).map_err(Error::io(path))?;
    Ok(())
}
