// SPDX-License-Identifier: MPL-2.0
//! Reachability of the analysis backend.

/// Result of the startup health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceStatus {
    /// Probe not finished yet.
    #[default]
    Unknown,
    /// The backend answered the probe.
    Online {
        /// The backend answered but reported a missing dependency (food
        /// database not loaded or AI provider not configured).
        degraded: bool,
    },
    /// The probe failed or timed out.
    Offline,
}

impl ServiceStatus {
    /// Returns true if the backend is known to be reachable.
    #[must_use]
    pub fn is_online(&self) -> bool {
        matches!(self, ServiceStatus::Online { .. })
    }

    /// Returns the i18n key of the status badge.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ServiceStatus::Unknown => "service-status-checking",
            ServiceStatus::Online { degraded: false } => "service-status-online",
            ServiceStatus::Online { degraded: true } => "service-status-degraded",
            ServiceStatus::Offline => "service-status-offline",
        }
    }
}
