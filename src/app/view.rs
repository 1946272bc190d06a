// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::domain::service::ServiceStatus;
use crate::i18n::fluent::I18n;
use crate::ui::analyzer;
use crate::ui::components::{ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::spacing;
use crate::ui::header::{self, ViewContext as HeaderViewContext};
use crate::ui::theming::ThemeMode;
use iced::{
    alignment,
    widget::{Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub analyzer: &'a analyzer::State,
    pub theme_mode: ThemeMode,
    pub service_status: ServiceStatus,
    /// i18n key of a startup warning, if any.
    pub notice: Option<&'a str>,
}

/// Renders the header, the optional startup warning and the analyzer.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header_view = header::view(HeaderViewContext {
        i18n: ctx.i18n,
        theme_mode: ctx.theme_mode,
        service_status: ctx.service_status,
    })
    .map(Message::Header);

    let mut column = Column::new().push(header_view);

    if let Some(key) = ctx.notice {
        let banner = ErrorDisplay::new(ErrorSeverity::Warning)
            .message(ctx.i18n.tr(key))
            .action(ctx.i18n.tr("dismiss-button"), Message::DismissNotice)
            .view();
        column = column.push(
            Container::new(banner)
                .width(Length::Fill)
                .padding([spacing::SM, spacing::LG])
                .align_x(alignment::Horizontal::Center),
        );
    }

    let analyzer_view = ctx
        .analyzer
        .view(analyzer::ViewContext { i18n: ctx.i18n })
        .map(Message::Analyzer);

    column
        .push(analyzer_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
