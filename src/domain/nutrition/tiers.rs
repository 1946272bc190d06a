// SPDX-License-Identifier: MPL-2.0
//! Display buckets derived from backend numbers.
//!
//! Both helpers are total: every `f64`, including NaN, maps to a bucket.

// =============================================================================
// Bounds
// =============================================================================

/// Health score cut points. A score equal to a bound belongs to the upper tier.
pub mod tier_bounds {
    /// Lowest score rated excellent.
    pub const EXCELLENT: f64 = 80.0;
    /// Lowest score rated good.
    pub const GOOD: f64 = 60.0;
    /// Lowest score rated fair.
    pub const FAIR: f64 = 40.0;
}

/// Nutrient amount cut points. An amount equal to a bound belongs to the lower status.
pub mod status_bounds {
    /// Amounts strictly above this are high.
    pub const HIGH_ABOVE: f64 = 10.0;
    /// Amounts strictly above this (and up to [`HIGH_ABOVE`]) are good.
    pub const GOOD_ABOVE: f64 = 5.0;
}

// =============================================================================
// ScoreTier
// =============================================================================

/// Qualitative bucket for a health score, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScoreTier {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl ScoreTier {
    /// Maps a score to its tier.
    ///
    /// ```
    /// use nutrition_analyzer::domain::nutrition::ScoreTier;
    ///
    /// assert_eq!(ScoreTier::from_score(80.0), ScoreTier::Excellent);
    /// assert_eq!(ScoreTier::from_score(79.9), ScoreTier::Good);
    /// ```
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= tier_bounds::EXCELLENT {
            ScoreTier::Excellent
        } else if score >= tier_bounds::GOOD {
            ScoreTier::Good
        } else if score >= tier_bounds::FAIR {
            ScoreTier::Fair
        } else {
            ScoreTier::Poor
        }
    }

    /// Emoji shown next to the score.
    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            ScoreTier::Excellent => "🌟",
            ScoreTier::Good => "✅",
            ScoreTier::Fair => "⚠️",
            ScoreTier::Poor => "❌",
        }
    }

    /// Returns the i18n key of the descriptive label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ScoreTier::Excellent => "tier-excellent",
            ScoreTier::Good => "tier-good",
            ScoreTier::Fair => "tier-fair",
            ScoreTier::Poor => "tier-poor",
        }
    }
}

// =============================================================================
// NutrientStatus
// =============================================================================

/// Coarse level of a single nutrient amount.
///
/// The thresholds are unit-naive: callers pass the amount already expressed
/// in the unit the backend uses for that nutrient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NutrientStatus {
    Low,
    Good,
    High,
}

impl NutrientStatus {
    /// Maps an amount to its status.
    #[must_use]
    pub fn from_amount(amount: f64) -> Self {
        if amount > status_bounds::HIGH_ABOVE {
            NutrientStatus::High
        } else if amount > status_bounds::GOOD_ABOVE {
            NutrientStatus::Good
        } else {
            NutrientStatus::Low
        }
    }

    /// Returns the i18n key of the status badge.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            NutrientStatus::High => "nutrient-status-high",
            NutrientStatus::Good => "nutrient-status-good",
            NutrientStatus::Low => "nutrient-status-low",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_tier_boundaries_belong_to_upper_tier() {
        assert_eq!(ScoreTier::from_score(80.0), ScoreTier::Excellent);
        assert_eq!(ScoreTier::from_score(79.9), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(60.0), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(59.9), ScoreTier::Fair);
        assert_eq!(ScoreTier::from_score(40.0), ScoreTier::Fair);
        assert_eq!(ScoreTier::from_score(39.9), ScoreTier::Poor);
    }

    #[test]
    fn score_tier_extremes() {
        assert_eq!(ScoreTier::from_score(100.0), ScoreTier::Excellent);
        assert_eq!(ScoreTier::from_score(0.0), ScoreTier::Poor);
        assert_eq!(ScoreTier::from_score(-5.0), ScoreTier::Poor);
        assert_eq!(ScoreTier::from_score(f64::NAN), ScoreTier::Poor);
    }

    #[test]
    fn score_tiers_are_ordered() {
        assert!(ScoreTier::Poor < ScoreTier::Fair);
        assert!(ScoreTier::Fair < ScoreTier::Good);
        assert!(ScoreTier::Good < ScoreTier::Excellent);
    }

    #[test]
    fn nutrient_status_boundaries_belong_to_lower_status() {
        assert_eq!(NutrientStatus::from_amount(10.0), NutrientStatus::Good);
        assert_eq!(NutrientStatus::from_amount(10.1), NutrientStatus::High);
        assert_eq!(NutrientStatus::from_amount(5.0), NutrientStatus::Low);
        assert_eq!(NutrientStatus::from_amount(5.1), NutrientStatus::Good);
    }

    #[test]
    fn nutrient_status_extremes() {
        assert_eq!(NutrientStatus::from_amount(0.0), NutrientStatus::Low);
        assert_eq!(NutrientStatus::from_amount(89.0), NutrientStatus::High);
        assert_eq!(NutrientStatus::from_amount(f64::NAN), NutrientStatus::Low);
    }

    #[test]
    fn every_tier_has_distinct_label_key() {
        let keys = [
            ScoreTier::Excellent.i18n_key(),
            ScoreTier::Good.i18n_key(),
            ScoreTier::Fair.i18n_key(),
            ScoreTier::Poor.i18n_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
