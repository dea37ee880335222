// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! Tabs switch between the single-image viewer and the multi-image
//! selection screen. The bar is hidden while the picker is open.

use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Container, Row, Text},
    Element, Length,
};

/// Top-level tabs reachable from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Viewer,
    Selection,
}

impl Tab {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tab::Viewer => "Viewer",
            Tab::Selection => "Selection",
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    pub active: Tab,
    /// Number of images currently chosen, shown next to the Selection tab.
    pub chosen_count: usize,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Select(Tab),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    SwitchTo(Tab),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, active: Tab) -> Event {
    match message {
        Message::Select(tab) if tab == active => Event::None,
        Message::Select(tab) => Event::SwitchTo(tab),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let selection_label = if ctx.chosen_count > 0 {
        format!("{} ({})", Tab::Selection.label(), ctx.chosen_count)
    } else {
        Tab::Selection.label().to_string()
    };

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::XS)
        .align_y(Vertical::Center)
        .push(tab_button(Tab::Viewer.label().to_string(), Tab::Viewer, ctx.active))
        .push(tab_button(selection_label, Tab::Selection, ctx.active));

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::panel)
        .into()
}

fn tab_button<'a>(label: String, tab: Tab, active: Tab) -> Element<'a, Message> {
    let style = if tab == active {
        styles::button::selected
    } else {
        styles::button::secondary
    };

    button(Text::new(label))
        .on_press(Message::Select(tab))
        .padding([spacing::XXS, spacing::SM])
        .style(style)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders() {
        let _element = view(ViewContext {
            active: Tab::Viewer,
            chosen_count: 0,
        });
        let _element = view(ViewContext {
            active: Tab::Selection,
            chosen_count: 3,
        });
    }

    #[test]
    fn selecting_other_tab_emits_switch() {
        let event = update(Message::Select(Tab::Selection), Tab::Viewer);
        assert_eq!(event, Event::SwitchTo(Tab::Selection));
    }

    #[test]
    fn selecting_active_tab_is_noop() {
        assert_eq!(update(Message::Select(Tab::Viewer), Tab::Viewer), Event::None);
    }
}
