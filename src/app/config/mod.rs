// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file. The file is optional and never written back.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[service]` - Backend base URL and request timeout
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` or `load_with_override()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `NUTRITION_ANALYZER_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use nutrition_analyzer::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! let base_url = config::resolve_base_url(None, &config);
//! let timeout = config.service.request_timeout();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable that overrides the backend base URL.
pub const ENV_API_URL: &str = "NUTRITION_ANALYZER_API_URL";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Analysis backend settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServiceConfig {
    /// Base URL of the nutrition backend, without the `/api/...` path.
    #[serde(default = "default_base_url")]
    pub base_url: Option<String>,

    /// Timeout for one analysis request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ServiceConfig {
    /// Request timeout, clamped to the supported range.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Analysis backend settings.
    #[serde(default)]
    pub service: ServiceConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_base_url() -> Option<String> {
    Some(DEFAULT_BASE_URL.to_string())
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Base URL Resolution
// =============================================================================

/// Picks the backend base URL.
///
/// # Resolution Order
///
/// 1. `cli_url` (`--api-url`), if non-empty
/// 2. `NUTRITION_ANALYZER_API_URL` environment variable, if non-empty
/// 3. `[service] base_url` from the settings file
/// 4. [`DEFAULT_BASE_URL`]
pub fn resolve_base_url(cli_url: Option<String>, config: &Config) -> String {
    let env_url = std::env::var(ENV_API_URL).ok();
    [cli_url, env_url, config.service.base_url.clone()]
        .into_iter()
        .flatten()
        .map(|url| url.trim().to_string())
        .find(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings file");
                    return (Config::default(), Some(err.i18n_key().to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::Mutex;
    use tempfile::tempdir;

    // Serializes tests that touch the API URL environment variable.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn write_settings(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, content).expect("failed to write settings");
        path
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.service.base_url.as_deref(), Some(DEFAULT_BASE_URL));
        assert_eq!(
            config.service.request_timeout(),
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
    }

    #[test]
    fn sectioned_file_loads_correctly() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_settings(
            temp_dir.path(),
            r#"
[general]
language = "fr"
theme_mode = "Dark"

[service]
base_url = "https://nutrition.example.com"
request_timeout_secs = 10
"#,
        );

        let config = load_from_path(&path).expect("failed to load config");
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(
            config.service.base_url.as_deref(),
            Some("https://nutrition.example.com")
        );
        assert_eq!(config.service.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_settings(temp_dir.path(), "[general]\nlanguage = \"en-US\"\n");

        let config = load_from_path(&path).expect("failed to load config");
        assert_eq!(config.service, ServiceConfig::default());
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_settings(temp_dir.path(), "this is not = [valid");

        match load_from_path(&path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_settings(temp_dir.path(), "[general]\ntheme_mode = \"sepia\"\n");
        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn request_timeout_is_clamped() {
        let too_low = ServiceConfig {
            request_timeout_secs: Some(0),
            ..ServiceConfig::default()
        };
        let too_high = ServiceConfig {
            request_timeout_secs: Some(10_000),
            ..ServiceConfig::default()
        };
        assert_eq!(
            too_low.request_timeout(),
            Duration::from_secs(MIN_REQUEST_TIMEOUT_SECS)
        );
        assert_eq!(
            too_high.request_timeout(),
            Duration::from_secs(MAX_REQUEST_TIMEOUT_SECS)
        );
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_settings(temp_dir.path(), "[[[ not toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn unreadable_settings_file_reports_io_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(temp_dir.path().join(CONFIG_FILE)).expect("failed to create dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("error-io"));
    }

    #[test]
    fn base_url_prefers_cli_then_env_then_file() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let config = Config {
            service: ServiceConfig {
                base_url: Some("http://from-file:9000".into()),
                ..ServiceConfig::default()
            },
            ..Config::default()
        };

        std::env::set_var(ENV_API_URL, "http://from-env:7000");
        assert_eq!(
            resolve_base_url(Some("http://from-cli:8080".into()), &config),
            "http://from-cli:8080"
        );
        assert_eq!(resolve_base_url(None, &config), "http://from-env:7000");

        std::env::remove_var(ENV_API_URL);
        assert_eq!(resolve_base_url(None, &config), "http://from-file:9000");
    }

    #[test]
    fn blank_base_urls_are_skipped() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_API_URL, "");
        let config = Config {
            service: ServiceConfig {
                base_url: Some("   ".into()),
                ..ServiceConfig::default()
            },
            ..Config::default()
        };

        assert_eq!(resolve_base_url(Some(String::new()), &config), DEFAULT_BASE_URL);
        std::env::remove_var(ENV_API_URL);
    }
}
