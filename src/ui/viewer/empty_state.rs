// SPDX-License-Identifier: MPL-2.0
//! Empty state view displayed when no image is loaded.
//!
//! Offers the two acquisition paths directly so the user never faces a
//! blank pane.

use super::component::Message;
use crate::application::port::AcquisitionSource;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length};

/// Renders the empty state view.
pub fn view<'a>() -> Element<'a, Message> {
    let title = Text::new("No image yet")
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    let subtitle = Text::new("Take a picture or pick one from your library")
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let buttons = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new("Camera"))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::RequestAcquisition(AcquisitionSource::Camera)),
        )
        .push(
            button(Text::new("Library"))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::RequestAcquisition(AcquisitionSource::Library)),
        );

    let hint = Text::new("Scroll or pinch to zoom, drag to pan, double-click to toggle zoom")
        .size(typography::CAPTION)
        .color(Color {
            a: 0.5,
            ..palette::GRAY_400
        });

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(buttons)
        .push(hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
