// SPDX-License-Identifier: MPL-2.0
//! Wire types of the nutrition backend and their mapping to domain types.

use crate::domain::error::AnalysisError;
use crate::domain::nutrition::{
    AnalysisResult, HealthScore, NutrientBreakdown, ResultMetadata,
};
use crate::domain::service::ServiceStatus;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Body of a successful `GET /api/analyze/{food}`.
///
/// Only `detailed_breakdown` is mandatory; everything else falls back to an
/// empty value so partially populated answers still render. Optional fields
/// that are null or of the wrong type read as absent.
#[derive(Debug, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default, deserialize_with = "lenient_text")]
    pub food: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub nutrition_info: Option<String>,
    #[serde(default)]
    pub detailed_breakdown: Option<BreakdownDto>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub health_benefits: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub meal_suggestions: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub health_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub dietary_tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub serving_size: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub calories_per_serving: Option<f64>,
}

/// `detailed_breakdown` object. Missing, null or non-numeric nutrients read
/// as zero.
#[derive(Debug, Default, Deserialize)]
pub struct BreakdownDto {
    #[serde(default, deserialize_with = "lenient")]
    pub calories: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub protein: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub carbs: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub fiber: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub fat: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub sugar: Option<f64>,
}

/// Any value that does not deserialize as `T` becomes `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Strings pass through, numbers are rendered, anything else is dropped.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_of(Value::deserialize(deserializer)?))
}

/// Keeps the usable entries of a list; a non-list reads as empty.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items.into_iter().filter_map(text_of).collect()),
        _ => Ok(Vec::new()),
    }
}

fn text_of(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl From<BreakdownDto> for NutrientBreakdown {
    fn from(dto: BreakdownDto) -> Self {
        NutrientBreakdown {
            calories: dto.calories.unwrap_or(0.0),
            protein: dto.protein.unwrap_or(0.0),
            carbohydrates: dto.carbs.unwrap_or(0.0),
            fat: dto.fat.unwrap_or(0.0),
            fiber: dto.fiber.unwrap_or(0.0),
            sugar: dto.sugar.unwrap_or(0.0),
        }
    }
}

impl AnalyzeResponse {
    /// Converts the wire body into a domain result.
    ///
    /// `fallback_food` names the result when the backend omits `food`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::ResponseShape`] when `detailed_breakdown` is
    /// absent or null.
    pub fn into_result(self, fallback_food: &str) -> Result<AnalysisResult, AnalysisError> {
        let breakdown = self
            .detailed_breakdown
            .ok_or(AnalysisError::ResponseShape)?;

        Ok(AnalysisResult {
            food_name: self
                .food
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| fallback_food.to_string()),
            nutrition_info: self.nutrition_info.unwrap_or_default(),
            health_score: HealthScore::new(self.health_score.unwrap_or(0.0)),
            breakdown: breakdown.into(),
            benefits: self.health_benefits,
            suggestions: self.meal_suggestions,
            metadata: ResultMetadata {
                serving_size: self.serving_size,
                calories_per_serving: self.calories_per_serving,
                dietary_tags: self.dietary_tags,
            },
        })
    }
}

/// Parses a success body.
///
/// # Errors
///
/// Any body that is not a JSON object with a breakdown is a shape error.
pub fn parse_analysis(body: &str, fallback_food: &str) -> Result<AnalysisResult, AnalysisError> {
    let response: AnalyzeResponse = serde_json::from_str(body).map_err(|e| {
        tracing::warn!(error = %e, "analysis body is not the expected JSON");
        AnalysisError::ResponseShape
    })?;
    response.into_result(fallback_food)
}

/// Extracts the server message from an error body.
///
/// FastAPI puts it in `detail`; other backends use `message` or `error`.
/// Non-string values (FastAPI validation lists, for instance) are ignored.
#[must_use]
pub fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["detail", "message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .map(str::to_string)
}

/// Body of `GET /api/health`.
#[derive(Debug, Default, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: Option<String>,
    /// Number of foods loaded, or a flag on older backends.
    #[serde(default)]
    pub database_loaded: Option<Value>,
    #[serde(default)]
    pub openai_configured: Option<bool>,
}

impl HealthResponse {
    /// Maps the probe answer to a status. Absent fields are not held against
    /// the backend.
    #[must_use]
    pub fn into_status(self) -> ServiceStatus {
        let database_ok = match self.database_loaded {
            Some(Value::Bool(loaded)) => loaded,
            Some(Value::Number(count)) => count.as_f64().is_some_and(|n| n > 0.0),
            _ => true,
        };
        let ai_ok = self.openai_configured.unwrap_or(true);
        let healthy = self
            .status
            .as_deref()
            .map_or(true, |s| s.eq_ignore_ascii_case("healthy") || s.eq_ignore_ascii_case("ok"));

        ServiceStatus::Online {
            degraded: !(database_ok && ai_ok && healthy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::nutrition::ScoreTier;

    const BANANA: &str = r#"{
        "food": "banana",
        "nutrition_info": "Realistic nutrition data for banana",
        "detailed_breakdown": {"calories": 89, "protein": 1.1, "fat": 0.3, "carbs": 23, "fiber": 2.6, "sugar": 12},
        "health_benefits": ["Low calorie option for weight management"],
        "meal_suggestions": ["Include banana in a balanced breakfast"],
        "health_score": 75,
        "dietary_tags": ["Low Fat"],
        "calories_per_serving": 89,
        "serving_size": "1 standard serving"
    }"#;

    #[test]
    fn full_body_maps_every_field() {
        let result = parse_analysis(BANANA, "Banana").expect("valid body");
        assert_eq!(result.food_name, "banana");
        assert_eq!(result.health_score.value(), 75.0);
        assert_eq!(result.health_score.tier(), ScoreTier::Good);
        assert_eq!(result.breakdown.carbohydrates, 23.0);
        assert_eq!(result.benefits.len(), 1);
        assert_eq!(result.metadata.dietary_tags, vec!["Low Fat".to_string()]);
        assert_eq!(result.metadata.serving_size.as_deref(), Some("1 standard serving"));
    }

    #[test]
    fn missing_breakdown_is_shape_error() {
        let body = r#"{"food": "banana", "health_score": 75}"#;
        assert_eq!(parse_analysis(body, "banana"), Err(AnalysisError::ResponseShape));
    }

    #[test]
    fn null_breakdown_is_shape_error() {
        let body = r#"{"food": "banana", "detailed_breakdown": null}"#;
        assert_eq!(parse_analysis(body, "banana"), Err(AnalysisError::ResponseShape));
    }

    #[test]
    fn non_json_body_is_shape_error() {
        assert_eq!(parse_analysis("", "banana"), Err(AnalysisError::ResponseShape));
        assert_eq!(
            parse_analysis("<html>oops</html>", "banana"),
            Err(AnalysisError::ResponseShape)
        );
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let body = r#"{"detailed_breakdown": {"calories": 10}}"#;
        let result = parse_analysis(body, "celery").expect("breakdown present");
        assert_eq!(result.food_name, "celery");
        assert_eq!(result.health_score.value(), 0.0);
        assert_eq!(result.breakdown.protein, 0.0);
        assert!(result.benefits.is_empty());
        assert!(result.suggestions.is_empty());
        assert!(result.metadata.is_empty());
    }

    #[test]
    fn null_nutrient_reads_as_zero() {
        let body = r#"{
            "detailed_breakdown": {"calories": 89, "protein": null, "fat": 0.3, "carbs": 23, "fiber": 2.6, "sugar": 12},
            "health_score": 80
        }"#;
        let result = parse_analysis(body, "banana").expect("breakdown present");
        assert_eq!(result.breakdown.protein, 0.0);
        assert_eq!(result.breakdown.calories, 89.0);
        assert_eq!(result.health_score.value(), 80.0);
    }

    #[test]
    fn mistyped_optional_fields_do_not_reject_the_result() {
        let body = r#"{
            "food": "banana",
            "detailed_breakdown": {"calories": "lots", "protein": 1.1},
            "health_score": "high",
            "serving_size": 100,
            "calories_per_serving": null,
            "health_benefits": ["Potassium", 3, null],
            "meal_suggestions": "smoothie",
            "dietary_tags": null
        }"#;
        let result = parse_analysis(body, "banana").expect("breakdown present");
        assert_eq!(result.breakdown.calories, 0.0);
        assert_eq!(result.breakdown.protein, 1.1);
        assert_eq!(result.health_score.value(), 0.0);
        assert_eq!(result.metadata.serving_size.as_deref(), Some("100"));
        assert_eq!(result.metadata.calories_per_serving, None);
        assert_eq!(result.benefits, vec!["Potassium".to_string(), "3".to_string()]);
        assert!(result.suggestions.is_empty());
        assert!(result.metadata.dietary_tags.is_empty());
    }

    #[test]
    fn non_object_breakdown_is_shape_error() {
        let body = r#"{"food": "banana", "detailed_breakdown": "n/a"}"#;
        assert_eq!(parse_analysis(body, "banana"), Err(AnalysisError::ResponseShape));
    }

    #[test]
    fn error_detail_prefers_fastapi_detail() {
        assert_eq!(
            error_detail(r#"{"detail": "Please enter a valid food item"}"#).as_deref(),
            Some("Please enter a valid food item")
        );
        assert_eq!(error_detail(r#"{"message": "boom"}"#).as_deref(), Some("boom"));
        assert_eq!(error_detail(r#"{"error": "nope"}"#).as_deref(), Some("nope"));
    }

    #[test]
    fn error_detail_ignores_unusable_bodies() {
        assert_eq!(error_detail(""), None);
        assert_eq!(error_detail("Internal Server Error"), None);
        assert_eq!(error_detail(r#"{"detail": [{"loc": ["path"]}]}"#), None);
    }

    #[test]
    fn health_counts_and_flags() {
        let healthy: HealthResponse = serde_json::from_str(
            r#"{"status": "healthy", "database_loaded": 42, "openai_configured": true}"#,
        )
        .expect("valid json");
        assert_eq!(healthy.into_status(), ServiceStatus::Online { degraded: false });

        let empty_db: HealthResponse = serde_json::from_str(
            r#"{"status": "healthy", "database_loaded": 0, "openai_configured": true}"#,
        )
        .expect("valid json");
        assert_eq!(empty_db.into_status(), ServiceStatus::Online { degraded: true });
    }

    #[test]
    fn minimal_health_body_is_online() {
        let minimal: HealthResponse =
            serde_json::from_str(r#"{"status": "healthy"}"#).expect("valid json");
        assert_eq!(minimal.into_status(), ServiceStatus::Online { degraded: false });
    }
}
