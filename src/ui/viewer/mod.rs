// SPDX-License-Identifier: MPL-2.0
//! Single-image viewer with pan/zoom and camera/library acquisition.
//!
//! - [`component`] - state, messages and effects
//! - [`pane`] - canvas that draws the image and reports gestures
//! - [`empty_state`] - placeholder shown before the first image

pub mod component;
pub mod empty_state;
pub mod pane;

pub use component::{Effect, Message, Phase, State};

use crate::application::port::AcquisitionSource;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::state::zoom;
use crate::ui::styles;
use iced::widget::{button, canvas, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Renders the viewer: toolbar on top, image pane (or empty state) below.
pub fn view(state: &State) -> Element<'_, Message> {
    let content: Element<'_, Message> = match state.handle() {
        Some(handle) => canvas::Canvas::new(pane::Pane {
            handle,
            viewport: state.viewport(),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into(),
        None => empty_state::view(),
    };

    Column::new()
        .push(toolbar(state))
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .clip(true),
        )
        .into()
}

fn toolbar(state: &State) -> Element<'_, Message> {
    let loaded = state.phase() == Phase::Loaded;

    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(source_button("Camera", AcquisitionSource::Camera, state))
        .push(source_button("Library", AcquisitionSource::Library, state))
        .push(
            button(Text::new("Fit"))
                .on_press_maybe(loaded.then_some(Message::FitToBounds))
                .style(if loaded {
                    styles::button::secondary
                } else {
                    styles::button::disabled
                }),
        );

    if let Some(source) = state.pending_source() {
        row = row
            .push(Text::new(format!("Waiting for {}…", source.label())).size(typography::BODY))
            .push(
                button(Text::new("Cancel"))
                    .on_press(Message::CancelAcquisition)
                    .style(styles::button::secondary),
            );
    }

    row = row.push(Space::new().width(Length::Fill));

    if loaded {
        row = row.push(
            Text::new(zoom::format_percent(state.viewport().scale())).size(typography::BODY_SM),
        );
    }

    row.into()
}

fn source_button<'a>(
    label: &'a str,
    source: AcquisitionSource,
    state: &State,
) -> Element<'a, Message> {
    let style = if state.pending_source() == Some(source) {
        styles::button::selected
    } else {
        styles::button::primary
    };

    button(Text::new(label))
        .on_press(Message::RequestAcquisition(source))
        .style(style)
        .into()
}
