// SPDX-License-Identifier: MPL-2.0
//! Header bar shown above the analyzer.
//!
//! Carries the app title, the backend status badge (click to re-check) and
//! the theme toggle.

use crate::domain::service::ServiceStatus;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{
    alignment::Vertical,
    widget::{button, text, tooltip, Column, Container, Row, Space, Text, Tooltip},
    Element, Length, Theme,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub service_status: ServiceStatus,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    CycleTheme,
    RecheckService,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ThemeModeChanged(ThemeMode),
    RecheckService,
}

/// Process a header message and return the corresponding event.
pub fn update(message: Message, theme_mode: ThemeMode) -> Event {
    match message {
        Message::CycleTheme => Event::ThemeModeChanged(theme_mode.next()),
        Message::RecheckService => Event::RecheckService,
    }
}

/// Render the header bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let titles = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD))
        .push(
            Text::new(ctx.i18n.tr("app-subtitle"))
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::for_theme(theme).text_secondary),
                }),
        );

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .push(titles)
        .push(Space::new().width(Length::Fill))
        .push(build_status_badge(&ctx))
        .push(build_theme_toggle(&ctx));

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::header)
        .into()
}

/// Badge showing whether the backend answered the last health probe.
fn build_status_badge<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let status = ctx.service_status;
    let label = Text::new(ctx.i18n.tr(status.i18n_key())).size(typography::CAPTION);

    let badge = Container::new(label)
        .padding([spacing::XXS, spacing::XS])
        .style(move |theme: &Theme| {
            let scheme = ColorScheme::for_theme(theme);
            let color = match status {
                ServiceStatus::Unknown => scheme.text_tertiary,
                ServiceStatus::Online { degraded: false } => scheme.success,
                ServiceStatus::Online { degraded: true } => scheme.warning,
                ServiceStatus::Offline => scheme.error,
            };
            styles::container::badge(color)(theme)
        });

    // No re-check while a probe is already in flight.
    let recheck = (status != ServiceStatus::Unknown).then_some(Message::RecheckService);

    button(badge)
        .on_press_maybe(recheck)
        .padding(0)
        .style(styles::button::ghost)
        .into()
}

fn build_theme_toggle<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let toggle = button(Text::new(ctx.theme_mode.symbol()).size(typography::TITLE_SM))
        .on_press(Message::CycleTheme)
        .padding(spacing::XS)
        .style(styles::button::ghost);

    let tip = format!(
        "{} ({})",
        ctx.i18n.tr("theme-toggle-tooltip"),
        ctx.i18n.tr(ctx.theme_mode.i18n_key())
    );

    Tooltip::new(
        toggle,
        Container::new(Text::new(tip).size(typography::CAPTION))
            .padding(spacing::XS)
            .style(styles::container::card),
        tooltip::Position::Bottom,
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn header_view_renders() {
        let i18n = I18n::default();
        for service_status in [
            ServiceStatus::Unknown,
            ServiceStatus::Online { degraded: false },
            ServiceStatus::Online { degraded: true },
            ServiceStatus::Offline,
        ] {
            let ctx = ViewContext {
                i18n: &i18n,
                theme_mode: ThemeMode::System,
                service_status,
            };
            let _element = view(ctx);
        }
    }

    #[test]
    fn cycle_theme_emits_next_mode() {
        let event = update(Message::CycleTheme, ThemeMode::Light);
        assert_eq!(event, Event::ThemeModeChanged(ThemeMode::Dark));

        let event = update(Message::CycleTheme, ThemeMode::System);
        assert_eq!(event, Event::ThemeModeChanged(ThemeMode::Light));
    }

    #[test]
    fn recheck_emits_event() {
        let event = update(Message::RecheckService, ThemeMode::Dark);
        assert_eq!(event, Event::RecheckService);
    }
}
