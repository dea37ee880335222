// SPDX-License-Identifier: MPL-2.0
//! Shared visual constants.
//!
//! Widgets never spell out raw numbers or colors; they pick from these scales
//! so the viewer, the picker grid and the toasts stay visually consistent.
//!
//! ```
//! use iced_picker::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let tint = Color { a: opacity::OVERLAY_SUBTLE, ..palette::PRIMARY_500 };
//! assert!(spacing::MD > spacing::XS);
//! # let _ = tint;
//! ```

pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    pub const GRAY_900: Color = Color::from_rgb(0.11, 0.11, 0.12);
    pub const GRAY_700: Color = Color::from_rgb(0.28, 0.29, 0.31);
    pub const GRAY_600: Color = Color::from_rgb(0.34, 0.35, 0.37);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.46, 0.48);
    pub const GRAY_200: Color = Color::from_rgb(0.76, 0.77, 0.79);
    pub const GRAY_100: Color = Color::from_rgb(0.88, 0.89, 0.9);

    /// Accent blue, light to dark.
    pub const PRIMARY_200: Color = Color::from_rgb(0.68, 0.82, 0.98);
    pub const PRIMARY_400: Color = Color::from_rgb(0.38, 0.66, 0.98);
    pub const PRIMARY_500: Color = Color::from_rgb(0.24, 0.56, 0.92);
    pub const PRIMARY_600: Color = Color::from_rgb(0.18, 0.47, 0.82);
    pub const PRIMARY_700: Color = Color::from_rgb(0.13, 0.38, 0.7);
    pub const PRIMARY_800: Color = Color::from_rgb(0.09, 0.29, 0.56);

    pub const SUCCESS_500: Color = Color::from_rgb(0.27, 0.7, 0.42);
    pub const INFO_500: Color = Color::from_rgb(0.4, 0.6, 0.98);
    pub const WARNING_500: Color = Color::from_rgb(0.95, 0.64, 0.14);
    pub const ERROR_500: Color = Color::from_rgb(0.9, 0.23, 0.21);
}

/// Alpha values for tints and translucent surfaces.
pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.45;
    pub const SURFACE: f32 = 0.95;
}

/// Gaps and paddings on a 4px step.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    pub const TOAST_WIDTH: f32 = 320.0;
    /// Accent bar on the leading edge of a toast.
    pub const TOAST_ACCENT: f32 = 4.0;
    /// Height of the chosen-images strip.
    pub const STRIP_HEIGHT: f32 = 220.0;
    /// Diameter of the check badge on selected thumbnails.
    pub const BADGE_SIZE: f32 = 22.0;
}

pub mod typography {
    pub const TITLE_LG: f32 = 28.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
    /// Frame of a selected thumbnail.
    pub const WIDTH_LG: f32 = 3.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Large enough to round any widget into a pill or circle.
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    const fn lifted(y: f32, blur_radius: f32) -> Shadow {
        Shadow {
            color: palette::BLACK,
            offset: Vector { x: 0.0, y },
            blur_radius,
        }
    }

    pub const NONE: Shadow = lifted(0.0, 0.0);
    pub const SM: Shadow = lifted(2.0, 4.0);
    pub const MD: Shadow = lifted(4.0, 10.0);
}

const _: () = {
    assert!(spacing::XXS < spacing::XS && spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD && spacing::MD < spacing::LG && spacing::LG < spacing::XL);
    assert!(typography::TITLE_LG > typography::TITLE_MD && typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY_LG > typography::BODY && typography::BODY > typography::CAPTION);
    assert!(border::WIDTH_SM < border::WIDTH_MD && border::WIDTH_MD < border::WIDTH_LG);
    assert!(opacity::SURFACE < 1.0);
    assert!(sizing::BADGE_SIZE * 4.0 < sizing::STRIP_HEIGHT);
};
