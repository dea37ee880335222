// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container::Style;
use iced::{Background, Border, Color, Theme};

fn surface(theme: &Theme) -> Color {
    Color {
        a: opacity::SURFACE,
        ..theme.extended_palette().background.base.color
    }
}

/// Translucent band behind the navbar and the chosen-images strip.
pub fn panel(theme: &Theme) -> Style {
    Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        ..Style::default()
    }
}

/// Round check mark over a selected thumbnail.
pub fn badge(_theme: &Theme) -> Style {
    Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        text_color: Some(palette::WHITE),
        border: Border {
            color: palette::WHITE,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Style::default()
    }
}

/// Toast card, framed faintly in its severity accent.
pub fn toast(accent: Color) -> impl Fn(&Theme) -> Style {
    move |theme: &Theme| Style {
        background: Some(Background::Color(theme.extended_palette().background.weak.color)),
        text_color: Some(theme.palette().text),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..accent
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Style::default()
    }
}

/// Solid accent bar on a toast's leading edge.
pub fn accent_bar(accent: Color) -> impl Fn(&Theme) -> Style {
    move |_theme: &Theme| Style {
        background: Some(Background::Color(accent)),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..Style::default()
    }
}
