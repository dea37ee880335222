// SPDX-License-Identifier: MPL-2.0
//! Filesystem-backed [`ImageSource`].
//!
//! - The photo library is a directory; entries are its supported images in
//!   file-name order, each with a generated thumbnail.
//! - The camera is a capture drop folder (for example a tethered-camera
//!   import directory); capturing returns its newest image.
//! - Identifiers are file paths.

pub mod decode;
pub mod scanner;

use crate::application::port::{ImageSource, SourceError};
use crate::config::{Config, DEFAULT_THUMBNAIL_SIZE};
use crate::domain::{ImageData, ImageId, LibraryEntry};
use std::io;
use std::path::{Path, PathBuf};

pub use scanner::{is_supported_image, IMAGE_EXTENSIONS};

/// Image source reading the library and capture folders from disk.
#[derive(Debug, Clone)]
pub struct FsImageSource {
    library_dir: Option<PathBuf>,
    camera_dir: Option<PathBuf>,
    thumbnail_size: u32,
}

impl FsImageSource {
    #[must_use]
    pub fn new(library_dir: Option<PathBuf>, camera_dir: Option<PathBuf>) -> Self {
        Self {
            library_dir,
            camera_dir,
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
        }
    }

    /// Builds a source from the `[library]` and `[camera]` config sections.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.library_directory(), config.camera.directory.clone())
            .with_thumbnail_size(config.thumbnail_size())
    }

    #[must_use]
    pub fn with_thumbnail_size(mut self, size: u32) -> Self {
        self.thumbnail_size = size.max(1);
        self
    }

    #[must_use]
    pub fn library_dir(&self) -> Option<&Path> {
        self.library_dir.as_deref()
    }

    #[must_use]
    pub fn camera_dir(&self) -> Option<&Path> {
        self.camera_dir.as_deref()
    }
}

impl ImageSource for FsImageSource {
    fn capture(&self) -> Result<ImageData, SourceError> {
        let dir = self
            .camera_dir
            .as_deref()
            .ok_or_else(|| SourceError::Unavailable("no camera is configured".to_string()))?;

        let newest = scanner::newest_image(dir).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => {
                SourceError::Unavailable(format!("camera folder {} is missing", dir.display()))
            }
            _ => decode::map_io_error(&err, dir),
        })?;

        let path = newest.ok_or_else(|| {
            SourceError::Unavailable(format!("no capture found in {}", dir.display()))
        })?;
        log::info!("Captured {}", path.display());

        decode::decode_file(&path).map(|image| decode::to_image_data(&image))
    }

    fn enumerate_library(&self) -> Result<Vec<LibraryEntry>, SourceError> {
        let dir = self.library_dir.as_deref().ok_or_else(|| {
            SourceError::Unavailable("no library directory is configured".to_string())
        })?;

        let paths = scanner::list_images(dir).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => {
                SourceError::AccessDenied(format!("library {} does not exist", dir.display()))
            }
            _ => decode::map_io_error(&err, dir),
        })?;

        let mut entries = Vec::with_capacity(paths.len());
        for path in paths {
            match decode::decode_file(&path) {
                Ok(image) => entries.push(LibraryEntry::new(
                    ImageId::from(path),
                    decode::thumbnail(&image, self.thumbnail_size),
                )),
                Err(err) => log::warn!("Skipping {}: {err}", path.display()),
            }
        }

        log::info!("Enumerated {} library images in {}", entries.len(), dir.display());
        Ok(entries)
    }

    fn resolve(&self, id: &ImageId) -> Result<ImageData, SourceError> {
        let path = id.as_path();
        if !is_supported_image(path) {
            return Err(SourceError::Decode(format!("unsupported file type: {id}")));
        }
        decode::decode_file(path).map(|image| decode::to_image_data(&image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn write_png(path: &Path, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, Rgba([200, 100, 50, 255]))
            .save(path)
            .expect("failed to write png");
    }

    #[test]
    fn enumerate_lists_images_in_name_order_with_thumbnails() {
        let dir = tempdir().expect("failed to create temp dir");
        write_png(&dir.path().join("b.png"), 300, 150);
        write_png(&dir.path().join("a.png"), 40, 40);
        std::fs::write(dir.path().join("c.png"), b"corrupted").expect("failed to write file");

        let source =
            FsImageSource::new(Some(dir.path().to_path_buf()), None).with_thumbnail_size(100);
        let entries = source.enumerate_library().expect("enumeration should succeed");

        let names: Vec<String> = entries
            .iter()
            .map(|e| e.id.to_path().file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.png", "b.png"]);
        // Small images are kept at their own size rather than scaled up.
        assert_eq!((entries[0].thumbnail.width(), entries[0].thumbnail.height()), (40, 40));
        assert_eq!((entries[1].thumbnail.width(), entries[1].thumbnail.height()), (100, 50));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_file_names_resolve_after_enumeration() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().expect("failed to create temp dir");
        write_png(&dir.path().join(OsStr::from_bytes(b"caf\xe9.png")), 6, 4);

        let source = FsImageSource::new(Some(dir.path().to_path_buf()), None);
        let entries = source.enumerate_library().expect("enumeration should succeed");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id.to_str(), None);

        let image = source
            .resolve(&entries[0].id)
            .expect("listed entry should resolve");
        assert_eq!((image.width(), image.height()), (6, 4));
    }

    #[test]
    fn enumerate_missing_library_is_access_denied() {
        let dir = tempdir().expect("failed to create temp dir");
        let source = FsImageSource::new(Some(dir.path().join("absent")), None);
        assert!(source
            .enumerate_library()
            .unwrap_err()
            .is_access_denied());
    }

    #[test]
    fn enumerate_without_library_is_unavailable() {
        let source = FsImageSource::new(None, None);
        assert!(matches!(
            source.enumerate_library(),
            Err(SourceError::Unavailable(_))
        ));
    }

    #[test]
    fn resolve_returns_full_image() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("full.png");
        write_png(&path, 640, 480);

        let source = FsImageSource::new(Some(dir.path().to_path_buf()), None);
        let image = source
            .resolve(&ImageId::from(path.as_path()))
            .expect("resolve should succeed");
        assert_eq!((image.width(), image.height()), (640, 480));
    }

    #[test]
    fn resolve_deleted_image_is_not_found() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("gone.png");
        let source = FsImageSource::new(Some(dir.path().to_path_buf()), None);
        assert!(matches!(
            source.resolve(&ImageId::from(path.as_path())),
            Err(SourceError::NotFound(_))
        ));
    }

    #[test]
    fn capture_without_camera_is_unavailable() {
        let source = FsImageSource::new(None, None);
        assert!(matches!(source.capture(), Err(SourceError::Unavailable(_))));
    }

    #[test]
    fn capture_with_empty_folder_is_unavailable() {
        let dir = tempdir().expect("failed to create temp dir");
        let source = FsImageSource::new(None, Some(dir.path().to_path_buf()));
        assert!(matches!(source.capture(), Err(SourceError::Unavailable(_))));
    }

    #[test]
    fn capture_returns_image_from_drop_folder() {
        let dir = tempdir().expect("failed to create temp dir");
        write_png(&dir.path().join("shot.png"), 12, 9);
        let source = FsImageSource::new(None, Some(dir.path().to_path_buf()));
        let image = source.capture().expect("capture should succeed");
        assert_eq!((image.width(), image.height()), (12, 9));
    }

    #[test]
    fn from_config_uses_sections() {
        let mut config = Config::default();
        config.library.directory = Some(PathBuf::from("/photos"));
        config.camera.directory = Some(PathBuf::from("/imports"));
        let source = FsImageSource::from_config(&config);
        assert_eq!(source.library_dir(), Some(Path::new("/photos")));
        assert_eq!(source.camera_dir(), Some(Path::new("/imports")));
    }
}
