// SPDX-License-Identifier: MPL-2.0
//! Reusable error display component with consistent styling.
//!
//! This component displays errors and warnings with:
//! - A symbol appropriate to the severity
//! - A title describing the issue
//! - A message explaining what went wrong
//! - An optional action button (e.g., "Dismiss")
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
//!
//! ErrorDisplay::new(ErrorSeverity::Error)
//!     .title("Analysis failed")
//!     .message("Failed to analyze kale")
//!     .action("Dismiss", Message::DismissNotice)
//!     .view()
//! ```

use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Severity level determines the color scheme and symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorSeverity {
    /// Operation failed (red)
    #[default]
    Error,
    /// Operation degraded but possible (orange)
    Warning,
}

impl ErrorSeverity {
    /// Returns the primary color for this severity level.
    pub fn color(&self) -> Color {
        match self {
            ErrorSeverity::Error => palette::ERROR_500,
            ErrorSeverity::Warning => palette::WARNING_500,
        }
    }

    /// Returns the symbol shown next to the text.
    pub fn symbol(&self) -> &'static str {
        match self {
            ErrorSeverity::Error => "⛔",
            ErrorSeverity::Warning => "⚠️",
        }
    }
}

/// Configuration for the ErrorDisplay component.
#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    severity: ErrorSeverity,
    title: Option<String>,
    message: Option<String>,
    action_label: Option<String>,
    action_message: Option<Message>,
}

impl<Message> Default for ErrorDisplay<Message> {
    fn default() -> Self {
        Self {
            severity: ErrorSeverity::default(),
            title: None,
            message: None,
            action_label: None,
            action_message: None,
        }
    }
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    /// Creates a new error display with the given severity.
    pub fn new(severity: ErrorSeverity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    /// Sets the title (main heading).
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the message (user-friendly explanation).
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the action button label and message.
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action_label = Some(label.into());
        self.action_message = Some(message);
        self
    }

    /// Renders the error display component.
    pub fn view(self) -> Element<'static, Message> {
        let accent_color = self.severity.color();

        let symbol = Container::new(Text::new(self.severity.symbol()).size(sizing::ICON_MD))
            .width(Length::Shrink)
            .align_x(alignment::Horizontal::Center);

        let mut content = Column::new().spacing(spacing::XXS).width(Length::Fill);

        if let Some(title_text) = self.title {
            let title = Text::new(title_text)
                .size(typography::BODY_LG)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(accent_color),
                });
            content = content.push(title);
        }

        if let Some(message_text) = self.message {
            content = content.push(Text::new(message_text).size(typography::BODY));
        }

        let mut main_row = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(symbol)
            .push(content);

        if let (Some(label), Some(msg)) = (self.action_label, self.action_message) {
            let action_btn = button(Text::new(label).size(typography::BODY_SM))
                .on_press(msg)
                .style(button_styles::ghost);
            main_row = main_row.push(action_btn);
        }

        // Neutral surface with a colored edge, so the error reads without shouting.
        Container::new(main_row)
            .width(Length::Fill)
            .max_width(sizing::ERROR_MAX_WIDTH)
            .padding(spacing::MD)
            .style(move |theme: &Theme| {
                let bg_color = theme.extended_palette().background.weak.color;
                container::Style {
                    background: Some(iced::Background::Color(bg_color)),
                    border: iced::Border {
                        color: accent_color,
                        width: border::WIDTH_MD,
                        radius: radius::MD.into(),
                    },
                    text_color: Some(theme.palette().text),
                    ..Default::default()
                }
            })
            .into()
    }
}
