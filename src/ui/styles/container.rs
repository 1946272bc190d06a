// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface for result sections.
///
/// The color is derived from the active Iced `Theme` background so cards
/// stay readable in both light and dark modes without hard-coding colors.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Header bar along the top of the window.
pub fn header(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Small colored badge (tier label, nutrient status, service status).
pub fn badge(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..color
        })),
        border: Border {
            color,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        text_color: Some(color),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_tints_background_with_its_color() {
        let color = Color::from_rgb(0.2, 0.7, 0.4);
        let style = badge(color)(&Theme::Light);
        match style.background {
            Some(Background::Color(bg)) => {
                assert_eq!(bg.g, color.g);
                assert!(bg.a < 1.0);
            }
            other => panic!("expected color background, got {other:?}"),
        }
        assert_eq!(style.text_color, Some(color));
    }
}
