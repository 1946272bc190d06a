// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`analysis`]: Nutrition analysis backend
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `reqwest` types)
//! - Traits are `Send + Sync` so adapters can be shared across tasks
//! - Methods return `Result` with domain error types

pub mod analysis;

// Re-export main types for convenience
pub use analysis::{analyze_path, NutritionAnalysisService};
