// SPDX-License-Identifier: MPL-2.0
//! Selection screen: the images chosen through the picker.
//!
//! Chosen images are shown in a horizontally scrolling strip, in the order the
//! picker delivered them (library order). Clicking a preview opens it in the
//! viewer.

use crate::domain::ImageData;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::image_handle;
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, Column, Container, Row, Scrollable, Space, Text};
use iced::{alignment, ContentFit, Element, Length};

/// One chosen image with its cached render handle.
#[derive(Debug, Clone)]
pub struct ChosenImage {
    image: ImageData,
    handle: Handle,
}

impl ChosenImage {
    #[must_use]
    pub fn new(image: ImageData) -> Self {
        Self {
            handle: image_handle::to_handle(&image),
            image,
        }
    }

    #[must_use]
    pub fn image(&self) -> &ImageData {
        &self.image
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    OpenPicker,
    Clear,
    /// Show the chosen image at this position in the viewer.
    Open(usize),
}

/// Images retained from the last finished picker flow.
#[derive(Debug, Clone, Default)]
pub struct State {
    chosen: Vec<ChosenImage>,
}

impl State {
    /// Replaces the chosen set. Order is kept as given.
    pub fn set(&mut self, images: Vec<ImageData>) {
        self.chosen = images.into_iter().map(ChosenImage::new).collect();
    }

    pub fn clear(&mut self) {
        self.chosen.clear();
    }

    #[must_use]
    pub fn chosen(&self) -> &[ChosenImage] {
        &self.chosen
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageData> {
        self.chosen.get(index).map(ChosenImage::image)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }
}

pub fn view(state: &State) -> Element<'_, Message> {
    let header = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            button(Text::new("Select images"))
                .on_press(Message::OpenPicker)
                .style(styles::button::primary),
        )
        .push(
            button(Text::new("Clear"))
                .on_press_maybe((!state.is_empty()).then_some(Message::Clear))
                .style(if state.is_empty() {
                    styles::button::disabled
                } else {
                    styles::button::secondary
                }),
        )
        .push(Space::new().width(Length::Fill))
        .push(Text::new(format!("{} chosen", state.len())).size(typography::BODY_SM));

    let body: Element<'_, Message> = if state.is_empty() {
        Container::new(Text::new("No images chosen yet").size(typography::BODY_LG))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    } else {
        Container::new(strip(state))
            .width(Length::Fill)
            .padding(spacing::XS)
            .style(styles::container::panel)
            .into()
    };

    Column::new().push(header).push(body).into()
}

fn strip(state: &State) -> Element<'_, Message> {
    let previews = state.chosen.iter().enumerate().map(|(index, chosen)| {
        button(
            Image::new(chosen.handle.clone())
                .height(Length::Fill)
                .content_fit(ContentFit::Contain),
        )
        .height(Length::Fill)
        .padding(spacing::XXS)
        .on_press(Message::Open(index))
        .style(styles::button::tile(false))
        .into()
    });

    Scrollable::new(Row::with_children(previews).spacing(spacing::XS))
        .direction(Direction::Horizontal(Scrollbar::new()))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::STRIP_HEIGHT))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(width: u32) -> ImageData {
        ImageData::from_rgba(width, 1, vec![0; width as usize * 4])
    }

    #[test]
    fn set_keeps_delivery_order() {
        let mut state = State::default();
        state.set(vec![image(1), image(2), image(3)]);
        let widths: Vec<u32> = state.chosen().iter().map(|c| c.image().width()).collect();
        assert_eq!(widths, vec![1, 2, 3]);
        assert_eq!(state.get(1).map(ImageData::width), Some(2));
        assert!(state.get(9).is_none());
    }

    #[test]
    fn clear_empties_the_strip() {
        let mut state = State::default();
        state.set(vec![image(1)]);
        state.clear();
        assert!(state.is_empty());
        let _element = view(&state);
    }
}
