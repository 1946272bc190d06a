// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::service::ServiceStatus;
use crate::ui::{analyzer, header};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Analyzer(analyzer::Message),
    Header(header::Message),
    /// Result of a backend health probe.
    ServiceChecked(ServiceStatus),
    /// Close the startup warning banner.
    DismissNotice,
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `NUTRITION_ANALYZER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional backend base URL.
    /// Takes precedence over `NUTRITION_ANALYZER_API_URL` and the settings file.
    pub api_url: Option<String>,
    /// Optional food to analyze right after startup.
    pub food: Option<String>,
}
