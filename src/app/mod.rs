// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the header, the
//! analyzer and the analysis service.
//!
//! The `App` struct wires together the analyzer, localization and the HTTP
//! client, and translates component effects into tasks. Startup policy
//! (settings fallback, base URL resolution, the initial health probe) lives
//! here so user-facing behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::domain::service::ServiceStatus;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::infrastructure::HttpAnalysisClient;
use crate::ui::analyzer;
use crate::ui::theming::{self, ThemeMode};
use config::Config;
use iced::{window, Element, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    analyzer: analyzer::State,
    /// `None` when the HTTP client could not be built; every analysis then
    /// fails with a request error.
    service: Option<HttpAnalysisClient>,
    service_status: ServiceStatus,
    theme_mode: ThemeMode,
    /// OS color preference, sampled once at startup.
    system_is_dark: bool,
    /// i18n key of a startup warning shown above the analyzer.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("service_status", &self.service_status)
            .field("theme_mode", &self.theme_mode)
            .field("busy", &self.analyzer.view_state().busy)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed on the
    // first call only.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state from the settings file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::with_config(flags, &config, config_warning)
    }

    fn with_config(
        flags: Flags,
        config: &Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);
        let base_url = config::resolve_base_url(flags.api_url.clone(), config);
        let mut notice = config_warning;

        let service =
            match HttpAnalysisClient::new(&base_url, config.service.request_timeout()) {
                Ok(client) => {
                    tracing::info!(base_url = client.base_url(), "analysis service configured");
                    Some(client)
                }
                Err(err) => {
                    let err = Error::from(err);
                    tracing::error!(error = %err, "analysis disabled");
                    notice = Some(err.i18n_key().to_string());
                    None
                }
            };

        let mut app = App {
            i18n,
            analyzer: analyzer::State::new(),
            service,
            service_status: ServiceStatus::Unknown,
            theme_mode: config.general.theme_mode,
            system_is_dark: theming::detect_system_dark(),
            notice,
        };

        let mut tasks = vec![update::health_task(app.service.as_ref())];
        if let Some(food) = flags.food {
            tasks.push(app.update(Message::Analyzer(analyzer::Message::QueryChanged(food))));
            tasks.push(app.update(Message::Analyzer(analyzer::Message::Submit)));
        }

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.analyzer.view_state().result {
            Some(result) => format!("{} - {app_name}", result.food_name),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme(self.system_is_dark)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            analyzer: &mut self.analyzer,
            service: self.service.as_ref(),
            service_status: &mut self.service_status,
            theme_mode: &mut self.theme_mode,
            notice: &mut self.notice,
        };

        match message {
            Message::Analyzer(analyzer_message) => {
                update::handle_analyzer_message(&mut ctx, analyzer_message)
            }
            Message::Header(header_message) => {
                update::handle_header_message(&mut ctx, header_message)
            }
            Message::ServiceChecked(status) => update::handle_service_checked(&mut ctx, status),
            Message::DismissNotice => update::handle_dismiss_notice(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            analyzer: &self.analyzer,
            theme_mode: self.theme_mode,
            service_status: self.service_status,
            notice: self.notice.as_deref(),
        })
    }
}
