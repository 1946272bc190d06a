// SPDX-License-Identifier: MPL-2.0
//! Placeholder shown before the first analysis.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

/// Renders the empty state view.
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("🥗").size(sizing::ICON_XL))
        .push(
            Text::new(i18n.tr("empty-state-title"))
                .size(typography::TITLE_MD)
                .color(palette::GRAY_400),
        )
        .push(
            Text::new(i18n.tr("empty-state-body"))
                .size(typography::BODY)
                .color(palette::GRAY_400)
                .align_x(alignment::Horizontal::Center),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XXL)
        .align_x(alignment::Horizontal::Center)
        .into()
}
