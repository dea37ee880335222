// SPDX-License-Identifier: MPL-2.0
use iced::Size;
use iced_picker::application::port::{AcquisitionSource, ImageSource, SourceError};
use iced_picker::domain::{ImageData, ImageId, LibraryEntry};
use iced_picker::infrastructure::FsImageSource;
use iced_picker::ui::state::ZoomMultiple;
use iced_picker::ui::viewer::{pane, Effect, Message, Phase, State};
use std::time::{Duration, SystemTime};
use tempfile::tempdir;

/// Source whose camera and library return images of distinct widths.
struct Scripted;

impl ImageSource for Scripted {
    fn capture(&self) -> Result<ImageData, SourceError> {
        Ok(ImageData::from_rgba(100, 50, vec![0; 100 * 50 * 4]))
    }

    fn enumerate_library(&self) -> Result<Vec<LibraryEntry>, SourceError> {
        Ok(Vec::new())
    }

    fn resolve(&self, id: &ImageId) -> Result<ImageData, SourceError> {
        match id.to_str() {
            Some("library") => Ok(ImageData::from_rgba(300, 200, vec![0; 300 * 200 * 4])),
            _ => Err(SourceError::NotFound(id.clone())),
        }
    }
}

fn request(viewer: &mut State, source: AcquisitionSource) -> iced_picker::application::RequestId {
    match viewer.handle_message(Message::RequestAcquisition(source)) {
        Effect::Acquire { request, .. } => request,
        other => panic!("expected acquire effect, got {other:?}"),
    }
}

#[test]
fn latest_request_wins_even_when_earlier_answer_arrives_last() {
    let source = Scripted;
    let mut viewer = State::new(ZoomMultiple::default());
    viewer.handle_message(Message::Pane(pane::Event::Resized(Size::new(600.0, 400.0))));

    let camera = request(&mut viewer, AcquisitionSource::Camera);
    let library = request(&mut viewer, AcquisitionSource::Library);

    let effect = viewer.handle_message(Message::Acquired {
        request: library,
        source: AcquisitionSource::Library,
        result: source.resolve(&ImageId::from("library")),
    });
    assert!(matches!(effect, Effect::ImageLoaded(ref image) if image.width() == 300));

    let late = viewer.handle_message(Message::Acquired {
        request: camera,
        source: AcquisitionSource::Camera,
        result: source.capture(),
    });
    assert_eq!(late, Effect::None);
    assert_eq!(viewer.image().map(ImageData::width), Some(300));
    assert_eq!(viewer.phase(), Phase::Loaded);
}

#[test]
fn cancelled_library_choice_keeps_current_image() {
    let source = Scripted;
    let mut viewer = State::new(ZoomMultiple::default());

    let first = request(&mut viewer, AcquisitionSource::Camera);
    viewer.handle_message(Message::Acquired {
        request: first,
        source: AcquisitionSource::Camera,
        result: source.capture(),
    });

    let second = request(&mut viewer, AcquisitionSource::Library);
    let effect = viewer.handle_message(Message::Acquired {
        request: second,
        source: AcquisitionSource::Library,
        result: Err(SourceError::Cancelled),
    });

    assert_eq!(effect, Effect::None);
    assert_eq!(viewer.image().map(ImageData::width), Some(100));
    assert!(!viewer.is_acquiring());
}

#[test]
fn camera_folder_yields_newest_capture() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let older = dir.path().join("older.png");
    let newer = dir.path().join("newer.png");
    image_rs::RgbaImage::new(11, 3).save(&older).expect("write");
    image_rs::RgbaImage::new(22, 3).save(&newer).expect("write");

    let past = SystemTime::now() - Duration::from_secs(3600);
    std::fs::File::options()
        .write(true)
        .open(&older)
        .and_then(|file| file.set_modified(past))
        .expect("Failed to age fixture");

    let source = FsImageSource::new(None, Some(dir.path().to_path_buf()));
    let mut viewer = State::new(ZoomMultiple::default());
    let camera = request(&mut viewer, AcquisitionSource::Camera);

    viewer.handle_message(Message::Acquired {
        request: camera,
        source: AcquisitionSource::Camera,
        result: source.capture(),
    });

    assert_eq!(viewer.image().map(ImageData::width), Some(22));
}

#[test]
fn missing_camera_notifies_without_changing_state() {
    let source = FsImageSource::new(None, None);
    let mut viewer = State::new(ZoomMultiple::default());
    let camera = request(&mut viewer, AcquisitionSource::Camera);

    let effect = viewer.handle_message(Message::Acquired {
        request: camera,
        source: AcquisitionSource::Camera,
        result: source.capture(),
    });

    assert!(matches!(effect, Effect::Notify(_)));
    assert_eq!(viewer.phase(), Phase::Empty);
}
