// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Gradient, Theme};

/// Generic panel surface used for the wizard cards.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dashed-look drop zone border; highlighted while a drag hovers the window.
pub fn drop_zone(theme: &Theme, highlighted: bool) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    let (border_color, background) = if highlighted {
        (
            palette::PRIMARY_500,
            Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_400
            })),
        )
    } else {
        (
            palette::GRAY_400,
            Some(Background::Color(Color::from_rgba(
                base.r,
                base.g,
                base.b,
                opacity::SURFACE,
            ))),
        )
    };

    container::Style {
        background,
        border: Border {
            color: border_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Card outline for selectable variants (thumbnails, captions).
pub fn selectable_card(theme: &Theme, is_selected: bool) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    let border_color = if is_selected {
        palette::PRIMARY_500
    } else {
        Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        }
    };

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            color: border_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Small pill badge (scores, style labels).
pub fn badge(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent
        })),
        border: Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        text_color: Some(accent),
        ..Default::default()
    }
}

/// Brand gradient used for thumbnail placeholder art and the stepper line.
pub fn brand_gradient(angle: f32, from: Color, to: Color) -> Background {
    Background::Gradient(Gradient::Linear(
        iced::gradient::Linear::new(angle)
            .add_stop(0.0, from)
            .add_stop(1.0, to),
    ))
}
