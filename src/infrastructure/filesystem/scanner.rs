// SPDX-License-Identifier: MPL-2.0
//! Directory scanning for supported image files.
//!
//! The library order is the file-name order of the scanned directory, which
//! stays stable for the whole session as long as the directory is unchanged.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Image file extensions recognised in the library and capture folders.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
];

/// Returns `true` if `path` has a supported image extension (case-insensitive).
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Lists supported images directly inside `directory`, sorted by file name.
///
/// # Errors
///
/// Returns the underlying I/O error if the directory cannot be read.
pub fn list_images(directory: &Path) -> io::Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }

    images.sort_by_key(|path| {
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    });

    Ok(images)
}

/// Returns the most recently modified supported image in `directory`.
///
/// # Errors
///
/// Returns the underlying I/O error if the directory cannot be read.
pub fn newest_image(directory: &Path) -> io::Result<Option<PathBuf>> {
    let mut newest: Option<(SystemTime, PathBuf)> = None;

    for path in list_images(directory)? {
        let modified = std::fs::metadata(&path)
            .and_then(|meta| meta.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);

        let is_newer = newest
            .as_ref()
            .is_none_or(|(current, _)| modified >= *current);
        if is_newer {
            newest = Some((modified, path));
        }
    }

    Ok(newest.map(|(_, path)| path))
}
