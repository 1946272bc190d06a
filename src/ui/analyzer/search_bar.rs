// SPDX-License-Identifier: MPL-2.0
//! Query field, analyze button and quick suggestions.

use super::component::Message;
use crate::application::analyzer::ViewState;
use crate::domain::nutrition::QuickFood;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, text_input, Column, Row, Text};
use iced::{alignment, Element, Length};

/// Renders the search section.
///
/// While a request is pending the button, Enter in the field and the
/// suggestions are all disabled; the field itself stays editable.
pub fn view<'a>(state: &'a ViewState, i18n: &'a I18n) -> Element<'a, Message> {
    let can_submit = state.can_submit();

    let placeholder = i18n.tr("search-placeholder");
    let input = text_input(placeholder.as_str(), &state.query_text)
        .on_input(Message::QueryChanged)
        .on_submit_maybe(can_submit.then_some(Message::Submit))
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .width(Length::Fill);

    let button_label = if state.busy {
        i18n.tr("analyzing")
    } else {
        i18n.tr("analyze-button")
    };
    let analyze = button(
        Text::new(button_label)
            .size(typography::BODY_LG)
            .align_y(alignment::Vertical::Center),
    )
    .on_press_maybe(can_submit.then_some(Message::Submit))
    .height(Length::Fixed(sizing::INPUT_HEIGHT + spacing::XS))
    .padding([spacing::XS, spacing::LG])
    .style(styles::button::primary);

    let search_row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(input)
        .push(analyze);

    Column::new()
        .spacing(spacing::MD)
        .push(search_row)
        .push(quick_foods(can_submit, i18n))
        .into()
}

fn quick_foods<'a>(enabled: bool, i18n: &'a I18n) -> Element<'a, Message> {
    let chips = QuickFood::ALL.into_iter().map(|food| {
        button(text(food.label()).size(typography::BODY_SM))
            .on_press_maybe(enabled.then_some(Message::QuickSelect(food)))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::chip)
            .into()
    });

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("quick-foods-title")).size(typography::CAPTION))
        .push(
            Row::with_children(chips)
                .spacing(spacing::XS)
                .wrap()
                .vertical_spacing(spacing::XS),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    #[test]
    fn search_bar_renders_idle_and_busy() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let idle = ViewState {
            query_text: "kale".into(),
            ..ViewState::default()
        };
        let _idle = view(&idle, &i18n);

        let busy = ViewState {
            busy: true,
            ..idle.clone()
        };
        let _busy = view(&busy, &i18n);
    }
}
