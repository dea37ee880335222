// SPDX-License-Identifier: MPL-2.0
//! Toast cards stacked in the bottom-right corner.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{Element, Length};

pub struct Toast;

impl Toast {
    /// One card: accent bar, severity heading over the message, close button.
    pub fn view(notification: &Notification) -> Element<'_, Message> {
        let severity = notification.severity();
        let accent = severity.color();

        let bar = container(Space::new())
            .width(Length::Fixed(sizing::TOAST_ACCENT))
            .height(Length::Fill)
            .style(styles::container::accent_bar(accent));

        let heading = text(format!("{} {}", severity.symbol(), severity.title()))
            .size(typography::CAPTION)
            .color(accent);
        let body = column![heading, text(notification.label()).size(typography::BODY)]
            .spacing(spacing::XXS)
            .width(Length::Fill);

        let close = button(text("×").size(typography::BODY_LG))
            .padding([0.0, spacing::XS])
            .style(button::text)
            .on_press(Message::Dismiss(notification.id()));

        container(
            row![bar, body, close]
                .spacing(spacing::SM)
                .align_y(Vertical::Center),
        )
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::XS)
        .style(styles::container::toast(accent))
        .into()
    }

    /// Full-window layer holding the visible cards, oldest on top.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        let cards = Column::with_children(manager.visible().map(Self::view))
            .spacing(spacing::XS)
            .align_x(Horizontal::Right);

        container(cards)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_builds_for_empty_and_full_managers() {
        let mut manager = Manager::new();
        {
            let _empty = Toast::view_overlay(&manager);
        }

        manager.push(Notification::warning("Camera unavailable"));
        manager.push(Notification::error("No access to the photo library"));
        let _full = Toast::view_overlay(&manager);
        assert_eq!(manager.visible_count(), 2);
    }
}
