// SPDX-License-Identifier: MPL-2.0
//! Analysis result returned by the backend for one food item.

use super::tiers::{NutrientStatus, ScoreTier};
use std::fmt;

// =============================================================================
// HealthScore
// =============================================================================

/// Health score, clamped to `0.0..=100.0`.
///
/// Values outside the range are clamped rather than rejected; NaN becomes 0.
///
/// # Example
///
/// ```
/// use nutrition_analyzer::domain::nutrition::{HealthScore, ScoreTier};
///
/// assert_eq!(HealthScore::new(140.0).value(), 100.0);
/// assert_eq!(HealthScore::new(85.0).tier(), ScoreTier::Excellent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct HealthScore(f64);

impl HealthScore {
    /// Lowest possible score.
    pub const MIN: f64 = 0.0;
    /// Highest possible score.
    pub const MAX: f64 = 100.0;

    /// Creates a new score, clamping to the valid range.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(Self::MIN);
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Returns the score value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the score as a fraction of the maximum (0.0 to 1.0).
    #[must_use]
    pub fn fraction(self) -> f32 {
        (self.0 / Self::MAX) as f32
    }

    /// Returns the qualitative tier of this score.
    #[must_use]
    pub fn tier(self) -> ScoreTier {
        ScoreTier::from_score(self.0)
    }
}

impl fmt::Display for HealthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}", self.0)
    }
}

// =============================================================================
// Nutrients
// =============================================================================

/// The six nutrients of the detailed breakdown, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Calories,
    Protein,
    Carbohydrates,
    Fiber,
    Fat,
    Sugar,
}

impl Nutrient {
    /// All nutrients, in the order they are shown.
    pub const ALL: [Nutrient; 6] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbohydrates,
        Nutrient::Fiber,
        Nutrient::Fat,
        Nutrient::Sugar,
    ];

    /// Display unit. Calories are energy, everything else is mass.
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Calories => "kcal",
            _ => "g",
        }
    }

    /// Returns the i18n key of the nutrient name.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Nutrient::Calories => "nutrient-calories",
            Nutrient::Protein => "nutrient-protein",
            Nutrient::Carbohydrates => "nutrient-carbohydrates",
            Nutrient::Fat => "nutrient-fat",
            Nutrient::Fiber => "nutrient-fiber",
            Nutrient::Sugar => "nutrient-sugar",
        }
    }
}

/// Per-nutrient amounts as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NutrientBreakdown {
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
}

impl NutrientBreakdown {
    /// Returns the amount of one nutrient.
    #[must_use]
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbohydrates => self.carbohydrates,
            Nutrient::Fat => self.fat,
            Nutrient::Fiber => self.fiber,
            Nutrient::Sugar => self.sugar,
        }
    }

    /// Iterates the breakdown in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        Nutrient::ALL.into_iter().map(move |n| (n, self.get(n)))
    }

    /// Status badge for one nutrient.
    #[must_use]
    pub fn status(&self, nutrient: Nutrient) -> NutrientStatus {
        NutrientStatus::from_amount(self.get(nutrient))
    }
}

// =============================================================================
// AnalysisResult
// =============================================================================

/// Optional descriptive fields some backends attach to a result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultMetadata {
    pub serving_size: Option<String>,
    pub calories_per_serving: Option<f64>,
    pub dietary_tags: Vec<String>,
}

impl ResultMetadata {
    /// Returns true when there is nothing to display.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.serving_size.is_none()
            && self.calories_per_serving.is_none()
            && self.dietary_tags.is_empty()
    }
}

/// Successful analysis of one food item.
///
/// Immutable once received; a new submission replaces it as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Food name as reported by the backend (may differ from the query).
    pub food_name: String,
    /// Free-text nutrition description.
    pub nutrition_info: String,
    pub health_score: HealthScore,
    pub breakdown: NutrientBreakdown,
    /// Zero or more benefits, shown in order.
    pub benefits: Vec<String>,
    /// Zero or more suggestions, shown in order.
    pub suggestions: Vec<String>,
    pub metadata: ResultMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_score_clamps_to_range() {
        assert_eq!(HealthScore::new(-3.0).value(), 0.0);
        assert_eq!(HealthScore::new(150.0).value(), 100.0);
        assert_eq!(HealthScore::new(42.5).value(), 42.5);
    }

    #[test]
    fn health_score_nan_is_zero() {
        let score = HealthScore::new(f64::NAN);
        assert_eq!(score.value(), 0.0);
        assert_eq!(score.tier(), ScoreTier::Poor);
    }

    #[test]
    fn health_score_displays_rounded() {
        assert_eq!(HealthScore::new(85.0).to_string(), "85");
        assert_eq!(HealthScore::new(72.6).to_string(), "73");
    }

    #[test]
    fn health_score_fraction() {
        assert!((HealthScore::new(50.0).fraction() - 0.5).abs() < f32::EPSILON);
        assert!((HealthScore::new(100.0).fraction() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn breakdown_iterates_in_display_order() {
        let breakdown = NutrientBreakdown {
            calories: 89.0,
            protein: 1.1,
            carbohydrates: 23.0,
            fat: 0.3,
            fiber: 2.6,
            sugar: 12.0,
        };
        let items: Vec<_> = breakdown.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[0], (Nutrient::Calories, 89.0));
        assert_eq!(items[5], (Nutrient::Sugar, 12.0));
        assert_eq!(breakdown.status(Nutrient::Carbohydrates), NutrientStatus::High);
        assert_eq!(breakdown.status(Nutrient::Fiber), NutrientStatus::Low);
    }

    #[test]
    fn display_order_matches_declaration_order() {
        for (index, nutrient) in Nutrient::ALL.into_iter().enumerate() {
            assert_eq!(nutrient as usize, index);
        }
    }

    #[test]
    fn only_calories_use_energy_unit() {
        for nutrient in Nutrient::ALL {
            let expected = if nutrient == Nutrient::Calories { "kcal" } else { "g" };
            assert_eq!(nutrient.unit(), expected);
        }
    }

    #[test]
    fn metadata_emptiness() {
        assert!(ResultMetadata::default().is_empty());
        let meta = ResultMetadata {
            dietary_tags: vec!["vegan".into()],
            ..ResultMetadata::default()
        };
        assert!(!meta.is_empty());
    }
}
