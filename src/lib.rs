// SPDX-License-Identifier: MPL-2.0
//! `nutrition_analyzer` is a desktop client for a nutrition analysis service,
//! built with the Iced GUI framework.
//!
//! It sends a food name to the backend and renders the health score,
//! nutrient breakdown, benefits and meal suggestions it returns, with
//! Fluent localization and light/dark theming.

#![doc(html_root_url = "https://docs.rs/nutrition_analyzer/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
