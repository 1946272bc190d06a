// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn disabled_style(theme: &Theme, border_radius: f32) -> button::Style {
    let is_light = !theme.extended_palette().is_dark;
    button::Style {
        background: Some(Background::Color(if is_light {
            palette::GRAY_100
        } else {
            palette::GRAY_700
        })),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: border_radius.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Main call to action (the analyze button).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled_style(theme, radius::MD),
    }
}

/// Pill-shaped suggestion button.
/// Adapts to light/dark theme while maintaining consistency.
pub fn chip(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = !theme.extended_palette().is_dark;

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            })),
            text_color,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => disabled_style(theme, radius::FULL),
    }
}

/// Borderless button for the header (theme toggle, dismiss).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.palette().text;
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_SUBTLE,
        button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        _ => opacity::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        })),
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Dark;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn disabled_buttons_are_grayed_out() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(
                primary(&theme, button::Status::Disabled).text_color,
                palette::GRAY_400
            );
            assert_eq!(
                chip(&theme, button::Status::Disabled).text_color,
                palette::GRAY_400
            );
        }
    }

    #[test]
    fn ghost_button_background_changes_on_hover() {
        let theme = Theme::Light;
        let normal = ghost(&theme, button::Status::Active);
        let hover = ghost(&theme, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }
}
