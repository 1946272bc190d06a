// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`analyzer`] - Query field, quick suggestions and the analysis result
//!
//! # Shared Infrastructure
//!
//! - [`header`] - Title bar with service status and theme toggle
//! - [`components`] - Reusable UI components (error display)
//! - [`widgets`] - Custom Iced widgets (score gauge)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and semantic colors

pub mod analyzer;
pub mod components;
pub mod design_tokens;
pub mod header;
pub mod styles;
pub mod theming;
pub mod widgets;
