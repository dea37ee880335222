// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the viewer, the picker
//! and the selection screen.
//!
//! The `App` struct owns the image source and every component state, and
//! translates component effects into background tasks. Components only ever
//! see messages.

mod message;
mod screen;
mod subscription;
mod tasks;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::port::AcquisitionSource;
use crate::config::{self, Config, DEFAULT_MAX_ZOOM};
use crate::domain::ImageId;
use crate::infrastructure::FsImageSource;
use crate::ui::notifications::{self, Notification};
use crate::ui::state::ZoomMultiple;
use crate::ui::{picker, selection, viewer};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tasks::SharedSource;

const APP_NAME: &str = "Iced Picker";

/// Root Iced application state.
pub struct App {
    screen: Screen,
    viewer: viewer::State,
    picker: picker::State,
    selection: selection::State,
    source: SharedSource,
    /// Directory the viewer's library chooser opens in.
    library_dir: Option<PathBuf>,
    /// Dimensions of the image last shown in the viewer, for the title.
    last_viewed: Option<(u32, u32)>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("viewer_phase", &self.viewer.phase())
            .field("chosen", &self.selection.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Applies command-line overrides on top of the settings file.
pub fn apply_flags(config: &mut Config, flags: &Flags) {
    if let Some(dir) = &flags.library_dir {
        config.library.directory = Some(dir.clone());
    }
    if let Some(dir) = &flags.camera_dir {
        config.camera.directory = Some(dir.clone());
    }
    if let Some(max) = flags.max_selectable {
        config.picker.max_selectable = Some(max);
    }
}

impl App {
    /// Loads the settings, applies `Flags` and optionally opens the image
    /// given on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = match &flags.config_path {
            Some(path) => config::load_or_default(path),
            None => config::load(),
        };
        apply_flags(&mut config, &flags);

        let mut app = Self::from_config(&config);

        if let Some(warning) = config_warning {
            app.notifications.push(Notification::warning(warning));
        }

        let task = match flags.file_path {
            Some(path) => app.open_path(path),
            None => Task::none(),
        };

        (app, task)
    }

    /// Builds the application around a filesystem source configured by `config`.
    pub fn from_config(config: &Config) -> Self {
        let source = FsImageSource::from_config(config);
        let library_dir = source.library_dir().map(PathBuf::from);
        log::info!(
            "Library: {}",
            library_dir
                .as_deref()
                .map_or_else(|| "<none>".into(), |dir| dir.display().to_string())
        );

        let max_zoom = ZoomMultiple::new(config.viewer.max_zoom.unwrap_or(DEFAULT_MAX_ZOOM));

        Self {
            screen: Screen::default(),
            viewer: viewer::State::new(max_zoom),
            picker: picker::State::new(config.picker_config()),
            selection: selection::State::default(),
            source: Arc::new(source),
            library_dir,
            last_viewed: None,
            notifications: notifications::Manager::new(),
        }
    }

    /// Opens `path` in the viewer as a library acquisition.
    fn open_path(&mut self, path: PathBuf) -> Task<Message> {
        match self.viewer.request_acquisition(AcquisitionSource::Library) {
            viewer::Effect::Acquire { request, .. } => {
                tasks::open(self.source.clone(), request, ImageId::from(path.as_path()))
            }
            _ => Task::none(),
        }
    }

    fn title(&self) -> String {
        match self.last_viewed {
            Some((width, height)) => format!("{width}×{height} - {APP_NAME}"),
            None => APP_NAME.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            viewer: &mut self.viewer,
            picker: &mut self.picker,
            selection: &mut self.selection,
            notifications: &mut self.notifications,
            last_viewed: &mut self.last_viewed,
            source: &self.source,
            library_dir: &self.library_dir,
        };

        match message {
            Message::Viewer(message) => update::handle_viewer_message(&mut ctx, message),
            Message::Picker(message) => update::handle_picker_message(&mut ctx, message),
            Message::Selection(message) => update::handle_selection_message(&mut ctx, message),
            Message::Navbar(message) => update::handle_navbar_message(&mut ctx, message),
            Message::Notification(message) => {
                ctx.notifications.handle_message(&message);
                Task::none()
            }
            Message::Tick(now) => {
                ctx.notifications.tick(now);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            viewer: &self.viewer,
            picker: &self.picker,
            selection: &self.selection,
            notifications: &self.notifications,
        })
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn viewer(&self) -> &viewer::State {
        &self.viewer
    }

    #[must_use]
    pub fn picker(&self) -> &picker::State {
        &self.picker
    }

    #[must_use]
    pub fn selection(&self) -> &selection::State {
        &self.selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::SourceError;
    use crate::application::Resolution;
    use crate::domain::{ImageData, LibraryEntry};
    use crate::ui::navbar::{self, Tab};

    fn app() -> App {
        let mut config = Config::default();
        config.library.directory = Some(PathBuf::from("/nonexistent/library"));
        App::from_config(&config)
    }

    fn image(width: u32) -> ImageData {
        ImageData::from_rgba(width, 2, vec![0; width as usize * 8])
    }

    #[test]
    fn flags_override_config() {
        let mut config = Config::default();
        config.picker.max_selectable = Some(9);
        let flags = Flags {
            library_dir: Some(PathBuf::from("/lib")),
            camera_dir: Some(PathBuf::from("/cam")),
            max_selectable: Some(2),
            ..Flags::default()
        };

        apply_flags(&mut config, &flags);

        assert_eq!(config.library.directory, Some(PathBuf::from("/lib")));
        assert_eq!(config.camera.directory, Some(PathBuf::from("/cam")));
        assert_eq!(config.picker.max_selectable, Some(2));
    }

    #[test]
    fn absent_flags_keep_config() {
        let mut config = Config::default();
        config.picker.max_selectable = Some(4);
        apply_flags(&mut config, &Flags::default());
        assert_eq!(config.picker.max_selectable, Some(4));
    }

    #[test]
    fn navbar_switches_screens() {
        let mut app = app();
        assert_eq!(app.screen(), Screen::Viewer);
        let _ = app.update(Message::Navbar(navbar::Message::Select(Tab::Selection)));
        assert_eq!(app.screen(), Screen::Selection);
    }

    #[test]
    fn picker_flow_delivers_chosen_images_to_selection() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::Select(Tab::Selection)));
        let _ = app.update(Message::Selection(selection::Message::OpenPicker));
        assert_eq!(app.screen(), Screen::Picker);
        assert_eq!(app.picker().status(), &picker::Status::Loading);

        let request = app.picker().pending_request().expect("enumeration pending");
        let entries = ["a", "b"]
            .into_iter()
            .map(|name| LibraryEntry::new(ImageId::from(name), image(1)))
            .collect();
        let _ = app.update(Message::Picker(picker::Message::Enumerated {
            request,
            result: Ok(entries),
        }));
        assert_eq!(app.picker().candidates().len(), 2);

        let _ = app.update(Message::Picker(picker::Message::Toggle(1)));
        let _ = app.update(Message::Picker(picker::Message::Finalize));
        assert_eq!(app.picker().status(), &picker::Status::Finalizing);

        let request = app.picker().pending_request().expect("resolution pending");
        let _ = app.update(Message::Picker(picker::Message::Resolved {
            request,
            results: vec![Resolution {
                id: ImageId::from("b"),
                result: Ok(image(5)),
            }],
        }));

        assert_eq!(app.screen(), Screen::Selection);
        assert_eq!(app.selection().len(), 1);
        assert_eq!(app.selection().get(0).map(ImageData::width), Some(5));
    }

    #[test]
    fn cancelled_picker_returns_to_selection_unchanged() {
        let mut app = app();
        let _ = app.update(Message::Selection(selection::Message::OpenPicker));
        let _ = app.update(Message::Picker(picker::Message::Cancel));
        assert_eq!(app.screen(), Screen::Selection);
        assert!(app.selection().is_empty());
    }

    #[test]
    fn opening_chosen_image_shows_it_in_viewer() {
        let mut app = app();
        app.selection.set(vec![image(3), image(7)]);
        let _ = app.update(Message::Selection(selection::Message::Open(1)));

        assert_eq!(app.screen(), Screen::Viewer);
        assert_eq!(app.viewer().image().map(ImageData::width), Some(7));
        assert_eq!(app.title(), format!("7×2 - {APP_NAME}"));
    }

    #[test]
    fn failed_acquisition_raises_notification() {
        let mut app = app();
        let _ = app.update(Message::Viewer(viewer::Message::RequestAcquisition(
            AcquisitionSource::Camera,
        )));
        let request = app.viewer().pending_request().expect("acquisition pending");

        let _ = app.update(Message::Viewer(viewer::Message::Acquired {
            request,
            source: AcquisitionSource::Camera,
            result: Err(SourceError::Unavailable("no camera".into())),
        }));

        assert!(app.notifications.has_notifications());
        assert_eq!(app.viewer().phase(), viewer::Phase::Empty);
    }
}
