// SPDX-License-Identifier: MPL-2.0
//! Button styles.
//!
//! Every variant is a [`Look`] per status, turned into an Iced style by
//! [`Look::into_style`].

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color, Shadow, Theme};

/// Fill, ink and frame of one button state.
#[derive(Debug, Clone, Copy)]
struct Look {
    fill: Option<Color>,
    ink: Color,
    frame: Color,
    frame_width: f32,
    shadow: Shadow,
}

impl Look {
    const fn flat(fill: Color, ink: Color, frame: Color) -> Self {
        Self {
            fill: Some(fill),
            ink,
            frame,
            frame_width: border::WIDTH_SM,
            shadow: shadow::NONE,
        }
    }

    const fn raised(self, shadow: Shadow) -> Self {
        Self { shadow, ..self }
    }

    fn into_style(self) -> Style {
        Style {
            background: self.fill.map(Background::Color),
            text_color: self.ink,
            border: Border {
                color: self.frame,
                width: self.frame_width,
                radius: radius::SM.into(),
            },
            shadow: self.shadow,
            snap: true,
        }
    }
}

const INACTIVE: Look = Look::flat(palette::GRAY_200, palette::GRAY_400, palette::GRAY_400);

/// Main call to action: Done, Take Photo, Retry.
pub fn primary(_theme: &Theme, status: Status) -> Style {
    let look = match status {
        Status::Hovered => {
            Look::flat(palette::PRIMARY_400, palette::WHITE, palette::PRIMARY_500).raised(shadow::MD)
        }
        Status::Active | Status::Pressed => {
            Look::flat(palette::PRIMARY_500, palette::WHITE, palette::PRIMARY_600).raised(shadow::SM)
        }
        Status::Disabled => INACTIVE,
    };
    look.into_style()
}

pub fn disabled(_theme: &Theme, _status: Status) -> Style {
    INACTIVE.into_style()
}

/// The active tab or the source currently being acquired from.
pub fn selected(_theme: &Theme, status: Status) -> Style {
    let look = match status {
        Status::Disabled => INACTIVE,
        _ => Look::flat(palette::PRIMARY_700, palette::WHITE, palette::PRIMARY_800),
    };
    look.into_style()
}

/// Quiet action that follows the theme's lightness.
pub fn secondary(theme: &Theme, status: Status) -> Style {
    let dark = theme.extended_palette().is_dark;
    let (fill, hover_fill, ink) = if dark {
        (palette::GRAY_700, palette::GRAY_600, palette::WHITE)
    } else {
        (palette::GRAY_100, palette::GRAY_200, palette::GRAY_900)
    };

    let look = match status {
        Status::Hovered => Look::flat(hover_fill, ink, palette::PRIMARY_500).raised(shadow::SM),
        Status::Active | Status::Pressed => Look::flat(fill, ink, palette::GRAY_400),
        Status::Disabled => INACTIVE,
    };
    look.into_style()
}

/// Thumbnail cell. Selection draws a thick accent frame over a light tint;
/// hovering an unselected cell hints the frame.
pub fn tile(selected: bool) -> impl Fn(&Theme, Status) -> Style {
    move |_theme: &Theme, status: Status| {
        let hovered = matches!(status, Status::Hovered | Status::Pressed);
        let look = Look {
            fill: selected.then_some(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_500
            }),
            ink: palette::WHITE,
            frame: match (selected, hovered) {
                (true, _) => palette::PRIMARY_500,
                (false, true) => palette::PRIMARY_200,
                (false, false) => Color::TRANSPARENT,
            },
            frame_width: if selected {
                border::WIDTH_LG
            } else {
                border::WIDTH_MD
            },
            shadow: shadow::NONE,
        };
        look.into_style()
    }
}
