// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Service**: Backend location and request timeout
//! - **Window**: Initial and minimum window size

// ==========================================================================
// Service Defaults
// ==========================================================================

/// Backend used when neither the CLI, the environment nor the settings file
/// names one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default timeout for one analysis request (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 560.0;
pub const MIN_WINDOW_HEIGHT: f32 = 520.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_REQUEST_TIMEOUT_SECS > 0);
    assert!(MIN_REQUEST_TIMEOUT_SECS <= DEFAULT_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_is_http() {
        assert!(DEFAULT_BASE_URL.starts_with("http://"));
        assert!(!DEFAULT_BASE_URL.ends_with('/'));
    }
}
