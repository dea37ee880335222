// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components never touch the image source. Their effects are turned into
//! tasks here, and the tasks answer with component messages.

use super::tasks::{self, SharedSource};
use super::{Message, Screen};
use crate::domain::ImageData;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::{picker, selection, viewer};
use iced::Task;
use std::path::PathBuf;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub viewer: &'a mut viewer::State,
    pub picker: &'a mut picker::State,
    pub selection: &'a mut selection::State,
    pub notifications: &'a mut notifications::Manager,
    pub last_viewed: &'a mut Option<(u32, u32)>,
    pub source: &'a SharedSource,
    pub library_dir: &'a Option<PathBuf>,
}

/// Handles viewer component messages.
pub fn handle_viewer_message(ctx: &mut UpdateContext<'_>, message: viewer::Message) -> Task<Message> {
    match ctx.viewer.handle_message(message) {
        viewer::Effect::None => Task::none(),
        viewer::Effect::Acquire { request, source } => {
            log::debug!("Starting {} acquisition {request}", source.label());
            tasks::acquire(
                ctx.source.clone(),
                ctx.library_dir.clone(),
                request,
                source,
            )
        }
        viewer::Effect::ImageLoaded(image) => {
            remember_viewed(ctx.last_viewed, &image);
            Task::none()
        }
        viewer::Effect::Notify(notification) => {
            ctx.notifications.push(notification);
            Task::none()
        }
    }
}

/// Handles picker component messages.
pub fn handle_picker_message(ctx: &mut UpdateContext<'_>, message: picker::Message) -> Task<Message> {
    match ctx.picker.handle_message(message) {
        picker::Effect::None => Task::none(),
        picker::Effect::Enumerate { request } => tasks::enumerate(ctx.source.clone(), request),
        picker::Effect::Resolve { request, ids } => {
            tasks::resolve(ctx.source.clone(), request, ids)
        }
        picker::Effect::Chosen(images) => {
            let count = images.len();
            ctx.selection.set(images);
            *ctx.screen = Screen::Selection;
            if count > 0 {
                ctx.notifications.push(Notification::success(match count {
                    1 => "1 image chosen".to_string(),
                    n => format!("{n} images chosen"),
                }));
            }
            Task::none()
        }
        picker::Effect::Cancelled => {
            log::info!("Picker cancelled");
            *ctx.screen = Screen::Selection;
            Task::none()
        }
        picker::Effect::Notify(notification) => {
            ctx.notifications.push(notification);
            Task::none()
        }
    }
}

/// Handles messages from the selection screen.
pub fn handle_selection_message(
    ctx: &mut UpdateContext<'_>,
    message: selection::Message,
) -> Task<Message> {
    match message {
        selection::Message::OpenPicker => {
            *ctx.screen = Screen::Picker;
            handle_picker_message(ctx, picker::Message::Initialize)
        }
        selection::Message::Clear => {
            ctx.selection.clear();
            Task::none()
        }
        selection::Message::Open(index) => {
            let Some(image) = ctx.selection.get(index).cloned() else {
                return Task::none();
            };
            ctx.viewer.cancel_acquisition();
            ctx.viewer.load_image(Some(image.clone()));
            remember_viewed(ctx.last_viewed, &image);
            *ctx.screen = Screen::Viewer;
            Task::none()
        }
    }
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    // The navbar is hidden on the picker screen.
    let Some(active) = ctx.screen.tab() else {
        return Task::none();
    };

    match navbar::update(message, active) {
        NavbarEvent::None => {}
        NavbarEvent::SwitchTo(tab) => *ctx.screen = Screen::from(tab),
    }
    Task::none()
}

fn remember_viewed(last_viewed: &mut Option<(u32, u32)>, image: &ImageData) {
    log::info!("Viewing {}x{} image", image.width(), image.height());
    *last_viewed = Some((image.width(), image.height()));
}
