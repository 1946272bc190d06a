// SPDX-License-Identifier: MPL-2.0
use nutrition_analyzer::app::config::{self, Config, DEFAULT_REQUEST_TIMEOUT_SECS};
use nutrition_analyzer::i18n::fluent::I18n;
use nutrition_analyzer::ui::theming::ThemeMode;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    fs::write(&config_path, "[general]\nlanguage = \"en-US\"\n")
        .expect("Failed to write initial config file");
    let english = config::load_from_path(&config_path).expect("Failed to load english config");
    let i18n_en = I18n::new(None, &english);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("analyze-button"), "Analyze");

    fs::write(&config_path, "[general]\nlanguage = \"fr\"\n")
        .expect("Failed to write french config file");
    let french = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &french);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("analyze-button"), "Analyser");
}

#[test]
fn cli_language_beats_config() {
    let config = Config {
        general: config::GeneralConfig {
            language: Some("fr".into()),
            ..Default::default()
        },
        ..Default::default()
    };
    let i18n = I18n::new(Some("en-US".into()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn full_settings_file_is_read() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        r#"
[general]
theme_mode = "Dark"

[service]
base_url = "http://nutrition.local:9000"
request_timeout_secs = 500
"#,
    )
    .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    assert_eq!(
        config.service.base_url.as_deref(),
        Some("http://nutrition.local:9000")
    );
    // Out-of-range timeouts are clamped.
    assert_eq!(config.service.request_timeout(), Duration::from_secs(120));
    assert_eq!(
        config::resolve_base_url(Some("http://cli:1".into()), &config),
        "http://cli:1"
    );
}

#[test]
fn missing_settings_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(config, Config::default());
    assert_eq!(
        config.service.request_timeout(),
        Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
    );
}

#[test]
fn malformed_settings_file_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[general\ntheme_mode = ")
        .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));

    let i18n = I18n::new(Some("en-US".into()), &config);
    let message = i18n.tr("notification-config-load-error");
    assert!(!message.starts_with("MISSING"));
}
