// SPDX-License-Identifier: MPL-2.0
//! Nutrition value objects.
//!
//! - [`Query`]: validated food name
//! - [`AnalysisResult`]: what the backend returns for a food
//! - [`ScoreTier`] / [`NutrientStatus`]: display buckets
//! - [`QuickFood`]: predefined suggestions

mod query;
mod quick_food;
mod result;
mod tiers;

pub use query::Query;
pub use quick_food::QuickFood;
pub use result::{AnalysisResult, HealthScore, Nutrient, NutrientBreakdown, ResultMetadata};
pub use tiers::{status_bounds, tier_bounds, NutrientStatus, ScoreTier};
