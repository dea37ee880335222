// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::ui::navbar::Tab;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Viewer,
    Selection,
    /// Modal picker flow; left through Done or Cancel only.
    Picker,
}

impl Screen {
    /// Navbar tab highlighted for this screen, if the navbar is shown.
    #[must_use]
    pub fn tab(self) -> Option<Tab> {
        match self {
            Screen::Viewer => Some(Tab::Viewer),
            Screen::Selection => Some(Tab::Selection),
            Screen::Picker => None,
        }
    }
}

impl From<Tab> for Screen {
    fn from(tab: Tab) -> Self {
        match tab {
            Tab::Viewer => Screen::Viewer,
            Tab::Selection => Screen::Selection,
        }
    }
}
