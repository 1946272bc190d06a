// SPDX-License-Identifier: MPL-2.0
//! Analyzer state machine.
//!
//! Holds the ephemeral view state of the analyzer and enforces the ordering
//! validation → dispatch → completion. The state machine is independent of
//! Iced: the UI component turns a [`Dispatch`] into a task and feeds the
//! outcome back through [`Analyzer::complete`].
//!
//! ```text
//! Idle ──submit──▶ Busy ──complete(Ok)──▶ Success
//!   ▲                │
//!   │                └──complete(Err)──▶ Failed
//!   └── validation error (no dispatch)
//! ```

use super::port::analysis::analyze_path;
use crate::domain::error::AnalysisError;
use crate::domain::nutrition::{AnalysisResult, QuickFood, Query};
use std::sync::Arc;

/// Snapshot of everything the analyzer view renders.
///
/// `result` and `error` are independent: a failure keeps the previous result
/// around, and the view gives the error precedence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub query_text: String,
    pub busy: bool,
    pub result: Option<Arc<AnalysisResult>>,
    pub error: Option<AnalysisError>,
}

impl ViewState {
    /// Returns true when the UI should accept a new submission.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.busy
    }
}

/// A request the caller must send to the analysis service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// Tag to hand back to [`Analyzer::complete`].
    pub generation: u64,
    pub query: Query,
}

impl Dispatch {
    /// Escaped request path for this dispatch.
    #[must_use]
    pub fn request_path(&self) -> String {
        analyze_path(&self.query)
    }
}

/// What [`Analyzer::complete`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The outcome belonged to the latest dispatch and was applied.
    Applied,
    /// A newer dispatch exists; the outcome was dropped.
    Stale,
}

/// Owner of the analyzer view state.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    state: ViewState,
    generation: u64,
}

impl Analyzer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current view state.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Generation of the most recent dispatch (0 before the first one).
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Updates the query field. Does not touch result, error or busy.
    pub fn edit_query(&mut self, text: impl Into<String>) {
        self.state = ViewState {
            query_text: text.into(),
            ..self.state.clone()
        };
    }

    /// Validates `raw` and, if valid, marks the analyzer busy.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Validation`] for empty or whitespace-only
    /// input. The error is also stored in the view state; busy and result are
    /// left as they were and nothing must be dispatched.
    pub fn submit(&mut self, raw: &str) -> Result<Dispatch, AnalysisError> {
        let query = match Query::parse(raw) {
            Ok(query) => query,
            Err(err) => {
                self.state = ViewState {
                    error: Some(err.clone()),
                    ..self.state.clone()
                };
                return Err(err);
            }
        };

        self.generation = self.generation.wrapping_add(1);
        self.state = ViewState {
            busy: true,
            error: None,
            ..self.state.clone()
        };
        tracing::debug!(generation = self.generation, food = %query, "analysis dispatched");

        Ok(Dispatch {
            generation: self.generation,
            query,
        })
    }

    /// Submits the current content of the query field.
    ///
    /// # Errors
    ///
    /// Same as [`Analyzer::submit`].
    pub fn submit_current(&mut self) -> Result<Dispatch, AnalysisError> {
        let raw = self.state.query_text.clone();
        self.submit(&raw)
    }

    /// Places the suggestion's lowercased name in the query field, then
    /// submits it.
    pub fn quick_select(&mut self, food: QuickFood) -> Dispatch {
        let query = food.query();
        self.generation = self.generation.wrapping_add(1);
        self.state = ViewState {
            query_text: query.as_str().to_string(),
            busy: true,
            error: None,
            ..self.state.clone()
        };
        tracing::debug!(generation = self.generation, food = %query, "quick analysis dispatched");

        Dispatch {
            generation: self.generation,
            query,
        }
    }

    /// Applies the outcome of the dispatch tagged `generation`.
    ///
    /// Outcomes from superseded dispatches are dropped without touching the
    /// state. Otherwise busy is cleared and either the result is replaced
    /// (error cleared) or the error is set (previous result kept).
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: Result<AnalysisResult, AnalysisError>,
    ) -> Completion {
        if generation != self.generation {
            tracing::debug!(
                generation,
                latest = self.generation,
                "dropping stale analysis outcome"
            );
            return Completion::Stale;
        }

        self.state = match outcome {
            Ok(result) => ViewState {
                busy: false,
                error: None,
                result: Some(Arc::new(result)),
                ..self.state.clone()
            },
            Err(err) => {
                tracing::warn!(error = %err, "analysis failed");
                ViewState {
                    busy: false,
                    error: Some(err),
                    ..self.state.clone()
                }
            }
        };
        Completion::Applied
    }
}
