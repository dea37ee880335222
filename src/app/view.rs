// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::{picker, selection, viewer};
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub viewer: &'a viewer::State,
    pub picker: &'a picker::State,
    pub selection: &'a selection::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Viewer => viewer::view(ctx.viewer).map(Message::Viewer),
        Screen::Selection => selection::view(ctx.selection).map(Message::Selection),
        Screen::Picker => picker::view(ctx.picker).map(Message::Picker),
    };

    let mut column = Column::new();
    if let Some(active) = ctx.screen.tab() {
        column = column.push(
            navbar::view(NavbarViewContext {
                active,
                chosen_count: ctx.selection.len(),
            })
            .map(Message::Navbar),
        );
    }
    column = column.push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let base = Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    Stack::new()
        .push(base)
        .push(Toast::view_overlay(ctx.notifications).map(Message::Notification))
        .into()
}
