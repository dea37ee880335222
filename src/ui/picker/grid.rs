// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid of the picker.
//!
//! Cells wrap to the available width inside a vertical scrollable. Each cell
//! is a button toggling its candidate; selected cells get a framed style and
//! a check badge.

use super::component::{CandidateImage, Message};
use crate::config::{GRID_CELL_SIZE, GRID_SPACING};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Image;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, Container, Row, Scrollable, Stack, Text};
use iced::{ContentFit, Element, Length};

/// Renders every candidate as a selectable cell.
pub fn view(candidates: &[CandidateImage]) -> Element<'_, Message> {
    let cells = candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| cell(index, candidate));

    let grid = Row::with_children(cells)
        .spacing(GRID_SPACING)
        .wrap()
        .vertical_spacing(GRID_SPACING);

    Scrollable::new(Container::new(grid).padding(spacing::XS).width(Length::Fill))
        .direction(Direction::Vertical(Scrollbar::new()))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn cell(index: usize, candidate: &CandidateImage) -> Element<'_, Message> {
    let thumbnail = Image::new(candidate.handle().clone())
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Cover);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(thumbnail);

    if candidate.is_selected() {
        layers = layers.push(
            Container::new(badge())
                .width(Length::Fill)
                .align_x(Horizontal::Right)
                .padding(spacing::XXS),
        );
    }

    button(layers)
        .width(Length::Fixed(GRID_CELL_SIZE))
        .height(Length::Fixed(GRID_CELL_SIZE))
        .padding(spacing::XXS)
        .on_press(Message::Toggle(index))
        .style(styles::button::tile(candidate.is_selected()))
        .into()
}

fn badge<'a>() -> Element<'a, Message> {
    Container::new(Text::new("✓").size(typography::CAPTION))
        .width(Length::Fixed(sizing::BADGE_SIZE))
        .height(Length::Fixed(sizing::BADGE_SIZE))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::badge)
        .into()
}
