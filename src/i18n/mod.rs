// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Translations embedded at build time from `assets/i18n/*.ftl`
//! - Fluent arguments for messages that name a food
//! - Fallback to `en-US` when a key is missing in the active locale

pub mod fluent;
