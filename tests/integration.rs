// SPDX-License-Identifier: MPL-2.0
use iced_picker::application::port::ImageSource;
use iced_picker::application::resolve_in_order;
use iced_picker::config::{self, Config};
use iced_picker::domain::ImageData;
use iced_picker::infrastructure::FsImageSource;
use iced_picker::ui::picker::{Effect, Message, PickerConfig, State, Status};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([200, 100, 50, 255]))
        .save(&path)
        .expect("Failed to write fixture image");
    path
}

#[test]
fn config_round_trips_through_toml() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut written = Config::default();
    written.library.directory = Some(PathBuf::from("/photos"));
    written.camera.directory = Some(PathBuf::from("/photos/imports"));
    written.picker.max_selectable = Some(5);
    written.viewer.max_zoom = Some(4.0);

    config::save_to_path(&written, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");

    assert_eq!(loaded, written);
    assert_eq!(loaded.picker_config(), PickerConfig { max_selectable: Some(5) });
}

#[test]
fn invalid_config_falls_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[picker\nmax_selectable = ").expect("Failed to write config");

    let (loaded, warning) = config::load_or_default(&path);

    assert_eq!(loaded, Config::default());
    assert!(warning.is_some());
}

#[test]
fn picker_flow_skips_images_removed_before_finalize() {
    let dir = tempdir().expect("Failed to create temporary directory");
    write_png(dir.path(), "a.png", 10, 4);
    let removed = write_png(dir.path(), "b.png", 20, 4);
    write_png(dir.path(), "c.png", 30, 4);
    std::fs::write(dir.path().join("notes.txt"), "not an image").expect("write");

    let source = FsImageSource::new(Some(dir.path().to_path_buf()), None).with_thumbnail_size(8);
    let mut picker = State::new(PickerConfig::default());

    let Effect::Enumerate { request } = picker.initialize() else {
        panic!("expected enumerate effect");
    };
    picker.handle_message(Message::Enumerated {
        request,
        result: source.enumerate_library(),
    });
    assert_eq!(picker.status(), &Status::Ready);
    assert_eq!(picker.candidates().len(), 3);
    assert!(picker
        .candidates()
        .iter()
        .all(|c| c.thumbnail().width() <= 8 && c.thumbnail().height() <= 8));

    // Select in reverse click order.
    for index in [2, 1, 0] {
        picker.toggle_selection(index).expect("unbounded picker");
    }

    std::fs::remove_file(&removed).expect("Failed to remove fixture");

    let Effect::Resolve { request, ids } = picker.finalize() else {
        panic!("expected resolve effect");
    };
    let results = resolve_in_order(&source, &ids);
    let effect = picker.handle_message(Message::Resolved { request, results });

    let Effect::Chosen(images) = effect else {
        panic!("expected chosen images, got {effect:?}");
    };
    let widths: Vec<u32> = images.iter().map(ImageData::width).collect();
    assert_eq!(widths, vec![10, 30]);
    assert_eq!(picker.status(), &Status::Finished);
}

#[test]
fn missing_library_is_reported_as_access_denied() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let source = FsImageSource::new(Some(dir.path().join("gone")), None);
    let mut picker = State::new(PickerConfig::default());

    let Effect::Enumerate { request } = picker.initialize() else {
        panic!("expected enumerate effect");
    };
    let effect = picker.handle_message(Message::Enumerated {
        request,
        result: source.enumerate_library(),
    });

    assert!(picker.candidates().is_empty());
    assert!(matches!(picker.status(), Status::Failed(err) if err.is_access_denied()));
    assert!(matches!(effect, Effect::Notify(_)));
}
