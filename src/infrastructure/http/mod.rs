// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the nutrition backend (implements [`NutritionAnalysisService`]).
//!
//! One `GET` per analysis, no retries. The body is read as text first so a
//! non-JSON answer can be told apart from a transport failure.

pub mod dto;

use crate::application::port::analysis::{analyze_path, NutritionAnalysisService, HEALTH_PATH};
use crate::domain::error::AnalysisError;
use crate::domain::nutrition::{AnalysisResult, Query};
use crate::domain::service::ServiceStatus;
use std::future::Future;
use std::time::Duration;

/// Upper bound for the startup health probe, independent of the analysis timeout.
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

const USER_AGENT: &str = concat!("NutritionAnalyzer/", env!("CARGO_PKG_VERSION"));

/// Failure to set up the HTTP client.
#[derive(Debug)]
pub struct ClientBuildError(String);

impl std::fmt::Display for ClientBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to build HTTP client: {}", self.0)
    }
}

impl std::error::Error for ClientBuildError {}

/// `reqwest`-backed analysis service.
///
/// Cheap to clone: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAnalysisClient {
    /// Creates a client for `base_url` with a per-request `timeout`.
    ///
    /// A trailing slash on `base_url` is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientBuildError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ClientBuildError(e.to_string()))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Wraps an already configured `reqwest` client.
    ///
    /// The client's own timeout applies; [`HEALTH_TIMEOUT`] still bounds the probe.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL requests are sent to, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the analysis request for `query`.
    #[must_use]
    pub fn analyze_url(&self, query: &Query) -> String {
        format!("{}{}", self.base_url, analyze_path(query))
    }
}

impl NutritionAnalysisService for HttpAnalysisClient {
    fn analyze(
        &self,
        query: &Query,
    ) -> impl Future<Output = Result<AnalysisResult, AnalysisError>> + Send + 'static {
        let client = self.client.clone();
        let url = self.analyze_url(query);
        let food = query.as_str().to_string();

        async move {
            tracing::info!(%url, "requesting analysis");

            let response = client.get(&url).send().await.map_err(|e| {
                tracing::warn!(error = %e, timeout = e.is_timeout(), "analysis request failed");
                AnalysisError::request(&food, None)
            })?;

            let status = response.status();
            let body = response.text().await.map_err(|e| {
                tracing::warn!(error = %e, "failed to read analysis body");
                AnalysisError::request(&food, None)
            })?;

            if !status.is_success() {
                tracing::warn!(%status, "analysis rejected by server");
                return Err(AnalysisError::request(&food, dto::error_detail(&body)));
            }

            dto::parse_analysis(&body, &food)
        }
    }

    fn health(&self) -> impl Future<Output = ServiceStatus> + Send + 'static {
        let client = self.client.clone();
        let url = format!("{}{}", self.base_url, HEALTH_PATH);

        async move {
            let response = match client.get(&url).timeout(HEALTH_TIMEOUT).send().await {
                Ok(response) if response.status().is_success() => response,
                Ok(response) => {
                    tracing::info!(status = %response.status(), "health probe rejected");
                    return ServiceStatus::Offline;
                }
                Err(e) => {
                    tracing::info!(error = %e, "backend unreachable");
                    return ServiceStatus::Offline;
                }
            };

            // Any 2xx means reachable, even if the body is not what we expect.
            match response.json::<dto::HealthResponse>().await {
                Ok(health) => health.into_status(),
                Err(_) => ServiceStatus::Online { degraded: false },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        let client = HttpAnalysisClient::new("http://localhost:8000/", Duration::from_secs(1))
            .expect("client builds");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn analyze_url_escapes_food() {
        let client = HttpAnalysisClient::new("http://localhost:8000", Duration::from_secs(1))
            .expect("client builds");
        let query = Query::parse("sweet potato").expect("valid");
        assert_eq!(
            client.analyze_url(&query),
            "http://localhost:8000/api/analyze/sweet%20potato"
        );
    }
}
