// SPDX-License-Identifier: MPL-2.0
//! Errors surfaced by a single analysis submission.
//!
//! Every variant ends up in the analyzer's error slot. None of them is fatal:
//! the user recovers by submitting again.

use std::fmt;

/// Failure of one analysis submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The query was empty after trimming. No request was sent.
    Validation,

    /// The request could not be completed: transport failure, timeout or
    /// a non-success HTTP status.
    Request {
        /// The food the request was issued for.
        food: String,
        /// Message provided by the server, if any.
        detail: Option<String>,
    },

    /// The server answered with success but the body is missing required
    /// fields (or is not structured data at all).
    ResponseShape,
}

impl AnalysisError {
    /// Builds a request error, dropping blank server messages so the generic
    /// message is used instead.
    #[must_use]
    pub fn request(food: impl Into<String>, detail: Option<String>) -> Self {
        let detail = detail
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        AnalysisError::Request {
            food: food.into(),
            detail,
        }
    }

    /// Returns the i18n message key for this error type.
    ///
    /// A request error carrying a server message has no key of its own: the
    /// server text is shown verbatim.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AnalysisError::Validation => "error-empty-query",
            AnalysisError::Request { detail: Some(_), .. } => "error-request-server",
            AnalysisError::Request { detail: None, .. } => "error-request-failed",
            AnalysisError::ResponseShape => "error-invalid-response",
        }
    }

    /// Server-provided detail, when the backend supplied one.
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            AnalysisError::Request { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Food name the failed request targeted.
    pub fn food(&self) -> Option<&str> {
        match self {
            AnalysisError::Request { food, .. } => Some(food),
            _ => None,
        }
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::Validation => write!(f, "empty input"),
            AnalysisError::Request {
                detail: Some(detail),
                ..
            } => write!(f, "{detail}"),
            AnalysisError::Request { food, detail: None } => {
                write!(f, "failed to analyze {food}")
            }
            AnalysisError::ResponseShape => write!(f, "invalid response from server"),
        }
    }
}

impl std::error::Error for AnalysisError {}
