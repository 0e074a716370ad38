//! BMI and suitable-weight calculations.

use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ApiError;

/// Reference BMI used to derive the suitable weight.
pub const REFERENCE_BMI: f64 = 22.0;

/// Converts a height in centimeters squared to meters squared.
const CM2_PER_M2: f64 = 10_000.0;

/// Validated input for a metrics computation.
///
/// Both values are finite and positive, and every derived metric is finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsRequest {
    weight: f64,
    height: f64,
}

impl MetricsRequest {
    /// Validate weight (kg) and height (cm).
    ///
    /// Height is blamed when its square or the suitable weight leaves the
    /// finite non-zero range; weight is blamed when only the BMI does.
    pub fn new(weight: f64, height: f64) -> Result<Self, ApiError> {
        if !is_positive(weight) {
            return Err(ApiError::InvalidParameter("weight"));
        }
        if !is_positive(height) {
            return Err(ApiError::InvalidParameter("height"));
        }

        if !is_positive(height * height) || !suitable_weight(height).is_finite() {
            return Err(ApiError::InvalidParameter("height"));
        }
        if !bmi(weight, height).is_finite() {
            return Err(ApiError::InvalidParameter("weight"));
        }

        Ok(Self { weight, height })
    }

    /// Body weight in kilograms.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Height in centimeters.
    pub fn height(&self) -> f64 {
        self.height
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Result of a metrics computation.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HealthMetrics {
    /// Body mass index, truncated to two decimal places.
    #[schema(example = 22)]
    pub bmi: f64,
    /// Weight (kg) at which the BMI would equal 22.
    #[schema(example = 65)]
    pub suitable_weight: f64,
    /// Obesity classification label. Never populated by the calculator.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "普通")]
    pub degree_of_obesity: Option<String>,
}

/// Compute BMI and suitable weight for a request.
pub fn calculate_metrics(request: &MetricsRequest) -> HealthMetrics {
    HealthMetrics {
        bmi: bmi(request.weight, request.height),
        suitable_weight: suitable_weight(request.height),
        degree_of_obesity: None,
    }
}

/// BMI from weight (kg) and height (cm), truncated (not rounded) to 2 decimals.
pub fn bmi(weight: f64, height: f64) -> f64 {
    truncate_2dp(weight * CM2_PER_M2 / (height * height))
}

/// Weight (kg) at which a person of `height` (cm) has a BMI of 22.
pub fn suitable_weight(height: f64) -> f64 {
    height * height * REFERENCE_BMI / CM2_PER_M2
}

fn truncate_2dp(value: f64) -> f64 {
    (value * 100.0).floor() / 100.0
}
