// SPDX-License-Identifier: MPL-2.0
//! Multi-select library picker.
//!
//! - [`component`] - selection state, messages and effects
//! - [`grid`] - thumbnail grid
//!
//! ```
//! use iced_picker::ui::picker::{Effect, PickerConfig, State};
//!
//! let mut picker = State::new(PickerConfig { max_selectable: Some(3) });
//! assert!(matches!(picker.initialize(), Effect::Enumerate { .. }));
//! assert_eq!(picker.cancel(), Effect::Cancelled);
//! ```

pub mod component;
pub mod grid;

pub use component::{
    CandidateImage, Effect, Message, PickerConfig, SelectionError, State, Status,
};

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Renders the picker: header with counter and actions, grid below.
pub fn view(state: &State) -> Element<'_, Message> {
    let body: Element<'_, Message> = match state.status() {
        Status::Idle | Status::Loading => centered(Text::new("Loading library…").into()),
        Status::Failed(err) => centered(
            Column::new()
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Center)
                .push(Text::new(format!("The library could not be listed: {err}")))
                .push(
                    button(Text::new("Retry"))
                        .on_press(Message::Initialize)
                        .style(styles::button::primary),
                )
                .into(),
        ),
        _ if state.candidates().is_empty() => {
            centered(Text::new("The library has no images").into())
        }
        _ => grid::view(state.candidates()),
    };

    Column::new()
        .push(header(state))
        .push(Container::new(body).width(Length::Fill).height(Length::Fill))
        .into()
}

/// Counter text shown in the header.
#[must_use]
pub fn selection_label(count: usize, max: Option<usize>) -> String {
    match max {
        Some(max) => format!("{count} of {max} selected"),
        None => format!("{count} selected"),
    }
}

fn header(state: &State) -> Element<'_, Message> {
    let finalizing = *state.status() == Status::Finalizing;
    let can_finish = *state.status() == Status::Ready;

    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(selection_label(
                state.selected_count(),
                state.config().max_selectable,
            ))
            .size(typography::BODY),
        );

    if finalizing {
        row = row.push(Text::new("Preparing images…").size(typography::BODY_SM));
    }

    row.push(Space::new().width(Length::Fill))
        .push(
            button(Text::new("Cancel"))
                .on_press(Message::Cancel)
                .style(styles::button::secondary),
        )
        .push(
            button(Text::new("Done"))
                .on_press_maybe(can_finish.then_some(Message::Finalize))
                .style(if can_finish {
                    styles::button::primary
                } else {
                    styles::button::disabled
                }),
        )
        .into()
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_mentions_limit_when_bounded() {
        assert_eq!(selection_label(2, Some(5)), "2 of 5 selected");
        assert_eq!(selection_label(0, None), "0 selected");
    }
}
