// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components report effects; the handlers here turn them into tasks against
//! the analysis service.

use super::Message;
use crate::application::analyzer::Dispatch;
use crate::application::port::NutritionAnalysisService;
use crate::domain::error::AnalysisError;
use crate::domain::service::ServiceStatus;
use crate::ui::analyzer::{self, Effect as AnalyzerEffect};
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::theming::ThemeMode;
use iced::Task;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a, S> {
    pub analyzer: &'a mut analyzer::State,
    pub service: Option<&'a S>,
    pub service_status: &'a mut ServiceStatus,
    pub theme_mode: &'a mut ThemeMode,
    pub notice: &'a mut Option<String>,
}

pub fn handle_analyzer_message<S: NutritionAnalysisService>(
    ctx: &mut UpdateContext<'_, S>,
    message: analyzer::Message,
) -> Task<Message> {
    match ctx.analyzer.handle_message(message) {
        AnalyzerEffect::None => Task::none(),
        AnalyzerEffect::Analyze(dispatch) => analyze_task(ctx.service, dispatch),
    }
}

pub fn handle_header_message<S: NutritionAnalysisService>(
    ctx: &mut UpdateContext<'_, S>,
    message: header::Message,
) -> Task<Message> {
    match header::update(message, *ctx.theme_mode) {
        HeaderEvent::ThemeModeChanged(mode) => {
            tracing::debug!(?mode, "theme mode changed");
            *ctx.theme_mode = mode;
            Task::none()
        }
        HeaderEvent::RecheckService => {
            *ctx.service_status = ServiceStatus::Unknown;
            health_task(ctx.service)
        }
    }
}

pub fn handle_service_checked<S>(
    ctx: &mut UpdateContext<'_, S>,
    status: ServiceStatus,
) -> Task<Message> {
    match status {
        ServiceStatus::Offline => tracing::warn!("analysis service is offline"),
        ServiceStatus::Online { degraded: true } => {
            tracing::warn!("analysis service is online but degraded");
        }
        _ => tracing::info!(?status, "analysis service checked"),
    }
    *ctx.service_status = status;
    Task::none()
}

pub fn handle_dismiss_notice<S>(ctx: &mut UpdateContext<'_, S>) -> Task<Message> {
    *ctx.notice = None;
    Task::none()
}

/// Sends the dispatched query and reports back with its generation.
///
/// Without a usable client the dispatch fails immediately, which still
/// clears the busy flag.
pub fn analyze_task<S: NutritionAnalysisService>(
    service: Option<&S>,
    dispatch: Dispatch,
) -> Task<Message> {
    let Dispatch { generation, query } = dispatch;
    let completed = move |result| {
        Message::Analyzer(analyzer::Message::AnalysisCompleted { generation, result })
    };

    match service {
        Some(service) => Task::perform(service.analyze(&query), completed),
        None => Task::done(completed(Err(AnalysisError::request(query.as_str(), None)))),
    }
}

/// Probes the backend. Without a client the service is reported offline.
pub fn health_task<S: NutritionAnalysisService>(service: Option<&S>) -> Task<Message> {
    match service {
        Some(service) => Task::perform(service.health(), Message::ServiceChecked),
        None => Task::done(Message::ServiceChecked(ServiceStatus::Offline)),
    }
}
