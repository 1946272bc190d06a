// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like the
//! HTTP stack.
//!
//! # Available Adapters
//!
//! - [`http`]: Nutrition backend over HTTP (implements [`NutritionAnalysisService`])
//!
//! [`NutritionAnalysisService`]: crate::application::port::NutritionAnalysisService

pub mod http;

// Re-export main types for convenience
pub use http::HttpAnalysisClient;
