// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`AnalysisError`](error::AnalysisError))
//! - [`nutrition`]: Nutrition types ([`Query`](nutrition::Query),
//!   [`AnalysisResult`](nutrition::AnalysisResult), [`ScoreTier`](nutrition::ScoreTier),
//!   [`NutrientStatus`](nutrition::NutrientStatus), [`QuickFood`](nutrition::QuickFood))
//! - [`service`]: Backend reachability ([`ServiceStatus`](service::ServiceStatus))

pub mod error;
pub mod nutrition;
pub mod service;
