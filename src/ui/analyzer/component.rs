// SPDX-License-Identifier: MPL-2.0
//! Analyzer component encapsulating state and update logic.

use super::{empty_state, result_card, search_bar};
use crate::application::analyzer::{Analyzer, Completion, Dispatch, ViewState};
use crate::domain::error::AnalysisError;
use crate::domain::nutrition::{AnalysisResult, QuickFood};
use crate::i18n::fluent::I18n;
use crate::ui::components::{ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{sizing, spacing};
use iced::widget::{scrollable, Column, Container};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the analyzer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the analyzer.
#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Submit,
    QuickSelect(QuickFood),
    /// Outcome of the request tagged `generation`.
    AnalysisCompleted {
        generation: u64,
        result: Result<AnalysisResult, AnalysisError>,
    },
}

/// Side effects the parent must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Send the query to the analysis service and report back with
    /// [`Message::AnalysisCompleted`] carrying the same generation.
    Analyze(Dispatch),
}

/// Analyzer UI state.
#[derive(Debug, Default)]
pub struct State {
    analyzer: Analyzer,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current view state.
    #[must_use]
    pub fn view_state(&self) -> &ViewState {
        self.analyzer.state()
    }

    /// Handle a message and return the effect for the parent.
    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::QueryChanged(text) => {
                self.analyzer.edit_query(text);
                Effect::None
            }
            Message::Submit => {
                // Enter in the field bypasses the disabled button.
                if !self.analyzer.state().can_submit() {
                    return Effect::None;
                }
                match self.analyzer.submit_current() {
                    Ok(dispatch) => Effect::Analyze(dispatch),
                    Err(_) => Effect::None,
                }
            }
            Message::QuickSelect(food) => {
                if !self.analyzer.state().can_submit() {
                    return Effect::None;
                }
                Effect::Analyze(self.analyzer.quick_select(food))
            }
            Message::AnalysisCompleted { generation, result } => {
                if self.analyzer.complete(generation, result) == Completion::Stale {
                    tracing::debug!(generation, "ignored outdated analysis");
                }
                Effect::None
            }
        }
    }

    /// Render the analyzer screen.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let state = self.view_state();
        let i18n = ctx.i18n;

        let mut content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .width(Length::Fill)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .push(search_bar::view(state, i18n));

        // The error goes first; an earlier result may still be shown below it.
        if let Some(error) = &state.error {
            content = content.push(
                ErrorDisplay::new(ErrorSeverity::Error)
                    .title(i18n.tr("error-title"))
                    .message(error_message(error, i18n))
                    .view(),
            );
        }

        content = match &state.result {
            Some(result) => content.push(result_card::view(result, i18n)),
            None if state.error.is_none() && !state.busy => content.push(empty_state::view(i18n)),
            None => content,
        };

        scrollable(
            Container::new(content)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .height(Length::Fill)
        .into()
    }
}

/// Localized, user-facing text for an analysis error.
///
/// A server-provided message is shown as is; otherwise the generic message
/// for the error kind is used.
#[must_use]
pub fn error_message(error: &AnalysisError, i18n: &I18n) -> String {
    match error {
        AnalysisError::Request {
            detail: Some(detail),
            ..
        } => i18n.tr_with_args(error.i18n_key(), &[("detail", detail)]),
        AnalysisError::Request { food, detail: None } => {
            i18n.tr_with_args(error.i18n_key(), &[("food", food)])
        }
        AnalysisError::Validation | AnalysisError::ResponseShape => i18n.tr(error.i18n_key()),
    }
}
