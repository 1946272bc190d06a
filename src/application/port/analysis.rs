// SPDX-License-Identifier: MPL-2.0
//! Nutrition analysis port definition.
//!
//! This module defines the [`NutritionAnalysisService`] trait: one request per
//! food item, answered with either an [`AnalysisResult`] or an
//! [`AnalysisError`].
//!
//! # Design Notes
//!
//! - Futures are `'static` so callers can hand them to `Task::perform`
//! - Implementations never retry; the user resubmits instead
//! - Validation happens before the port is reached (see [`Query::parse`])

use crate::domain::error::AnalysisError;
use crate::domain::nutrition::{AnalysisResult, Query};
use crate::domain::service::ServiceStatus;
use std::future::Future;

/// Path prefix of the analysis endpoint.
pub const ANALYZE_PATH_PREFIX: &str = "/api/analyze/";

/// Path of the health endpoint.
pub const HEALTH_PATH: &str = "/api/health";

/// Builds the request path for `query`, percent-escaping the food name so
/// spaces and reserved characters stay inside one path segment.
///
/// ```
/// use nutrition_analyzer::application::port::analysis::analyze_path;
/// use nutrition_analyzer::domain::nutrition::Query;
///
/// let query = Query::parse("sweet potato").unwrap();
/// assert_eq!(analyze_path(&query), "/api/analyze/sweet%20potato");
/// ```
#[must_use]
pub fn analyze_path(query: &Query) -> String {
    format!(
        "{ANALYZE_PATH_PREFIX}{}",
        urlencoding::encode(query.as_str())
    )
}

/// Backend that turns a food name into a nutrition analysis.
pub trait NutritionAnalysisService: Send + Sync {
    /// Requests the analysis of one food item.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Request`] on transport failure, timeout or a
    /// non-success status, and [`AnalysisError::ResponseShape`] when a
    /// success body lacks the required fields.
    fn analyze(
        &self,
        query: &Query,
    ) -> impl Future<Output = Result<AnalysisResult, AnalysisError>> + Send + 'static;

    /// Probes backend reachability. Never fails: unreachable maps to
    /// [`ServiceStatus::Offline`].
    fn health(&self) -> impl Future<Output = ServiceStatus> + Send + 'static;
}
