// SPDX-License-Identifier: MPL-2.0
//! Validated food query.

use crate::domain::error::AnalysisError;
use std::fmt;

/// A food-item name, trimmed and guaranteed non-empty.
///
/// This is the only local validation the client performs; spelling and
/// format checks are left to the backend.
///
/// # Example
///
/// ```
/// use nutrition_analyzer::domain::nutrition::Query;
///
/// let query = Query::parse("  Banana \n").unwrap();
/// assert_eq!(query.as_str(), "Banana");
/// assert!(Query::parse(" \t ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    /// Trims `raw` and rejects it if nothing is left.
    pub fn parse(raw: &str) -> Result<Self, AnalysisError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AnalysisError::Validation);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Wraps a built-in label that is known to be trimmed and non-empty.
    pub(super) fn from_label(label: String) -> Self {
        debug_assert!(!label.trim().is_empty());
        Self(label)
    }

    /// Returns the trimmed query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_inputs_are_rejected() {
        for raw in ["", " ", "\t", "\n", "  \r\n\t  "] {
            assert_eq!(Query::parse(raw), Err(AnalysisError::Validation), "{raw:?}");
        }
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let query = Query::parse("\t sweet potato  ").expect("valid query");
        assert_eq!(query.as_str(), "sweet potato");
        assert_eq!(query.to_string(), "sweet potato");
    }

    #[test]
    fn inner_text_is_kept_as_typed() {
        let query = Query::parse("Greek Yogurt").expect("valid query");
        assert_eq!(query.as_str(), "Greek Yogurt");
    }
}
