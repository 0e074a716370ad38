//! HTTP API handlers.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::debug;

use super::docs;
use crate::error::{ApiError, ErrorResponse, Result};
use crate::health::{calculate_metrics, HealthMetrics, MetricsRequest};
use crate::metrics;

/// Path of the metrics endpoint.
pub const HEALTHCARE_PATH: &str = "/getHealthcare";
/// Path of the API document endpoint.
pub const API_DOCS_PATH: &str = "/api_docs";
/// Path of the liveness endpoint.
pub const HEALTH_PATH: &str = "/health";

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Pre-rendered API document, shared by every response.
    pub api_docs: Bytes,
}

impl AppState {
    /// Create new app state, rendering the API document.
    pub fn new() -> Result<Self> {
        Ok(Self {
            api_docs: docs::render()?.into(),
        })
    }
}

/// Raw query string of `/getHealthcare`.
#[derive(Debug, Default)]
pub struct MetricsQuery {
    /// Weight in kilograms.
    pub weight: Option<String>,
    /// Height in centimeters.
    pub height: Option<String>,
}

impl MetricsQuery {
    /// Collect the known parameters from decoded query pairs.
    /// The first occurrence of a repeated parameter wins; unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "weight" => &mut query.weight,
                "height" => &mut query.height,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

impl TryFrom<MetricsQuery> for MetricsRequest {
    type Error = ApiError;

    /// Presence of both parameters is checked (weight first) before either value is parsed.
    fn try_from(query: MetricsQuery) -> std::result::Result<Self, Self::Error> {
        let weight = query.weight.ok_or(ApiError::MissingParameter("weight"))?;
        let height = query.height.ok_or(ApiError::MissingParameter("height"))?;

        MetricsRequest::new(parse_number("weight", &weight)?, parse_number("height", &height)?)
    }
}

fn parse_number(name: &'static str, raw: &str) -> std::result::Result<f64, ApiError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ApiError::InvalidParameter(name))
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Compute BMI and suitable weight.
#[utoipa::path(
    get,
    path = "/getHealthcare",
    description = "身長と体重を渡すとBMI,適正体重、肥満度を返してくれる",
    params(
        ("weight" = i64, Query, description = "体重(Kg)"),
        ("height" = i64, Query, description = "身長(Cm)")
    ),
    responses(
        (status = 200, description = "成功時", body = HealthMetrics),
        (status = 400, description = "パラメータ不足", body = ErrorResponse)
    ),
    tag = "Healthcare"
)]
pub async fn get_healthcare(
    Query(pairs): Query<Vec<(String, String)>>,
) -> std::result::Result<Json<HealthMetrics>, ApiError> {
    let _timer = metrics::track_request(HEALTHCARE_PATH);

    let request = MetricsRequest::try_from(MetricsQuery::from_pairs(pairs)).map_err(|e| {
        debug!(parameter = e.parameter(), error = %e, "Rejected metrics request");
        metrics::inc_validation_failures(e.parameter());
        e
    })?;

    let result = calculate_metrics(&request);
    debug!(
        weight = request.weight(),
        height = request.height(),
        bmi = result.bmi,
        suitable_weight = result.suitable_weight,
        "Computed health metrics"
    );

    Ok(Json(result))
}

/// Serve the API document as plain text.
pub async fn api_docs(State(state): State<AppState>) -> impl IntoResponse {
    let _timer = metrics::track_request(API_DOCS_PATH);

    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.api_docs,
    )
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}
