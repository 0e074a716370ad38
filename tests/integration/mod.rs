//! Integration tests for the healthcare API router.
//!
//! These drive the public router end to end without binding a socket.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use healthcare_api::api::{create_router, AppState};
use healthcare_api::health::{bmi, suitable_weight};

fn app() -> Router {
    create_router(AppState::new().expect("api document renders"))
}

async fn get(uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

/// Reference example from the API description.
#[tokio::test]
async fn test_reference_example() {
    let (status, content_type, body) = get("/getHealthcare?weight=65&height=170").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));

    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body, json!({ "bmi": 22.49, "suitable_weight": 63.58 }));
}

/// Successful responses carry exactly the computed keys and match the formulas.
#[tokio::test]
async fn test_results_match_formulas() {
    for (weight, height) in [(50, 160), (70, 175), (90, 182), (48, 155)] {
        let uri = format!("/getHealthcare?weight={weight}&height={height}");
        let (status, _, body) = get(&uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");

        let body: Value = serde_json::from_str(&body).unwrap();
        let obj = body.as_object().unwrap();
        assert_eq!(obj.len(), 2, "{uri}");

        let (w, h) = (weight as f64, height as f64);
        assert_eq!(obj["bmi"].as_f64(), Some(bmi(w, h)), "{uri}");
        assert_eq!(obj["suitable_weight"].as_f64(), Some(suitable_weight(h)), "{uri}");
    }
}

/// Missing weight is reported first, whether or not height is present.
#[tokio::test]
async fn test_missing_parameters() {
    let cases = [
        ("/getHealthcare", "weightは必須です"),
        ("/getHealthcare?height=170", "weightは必須です"),
        ("/getHealthcare?weight=65", "heightは必須です"),
    ];

    for (uri, message) in cases {
        let (status, _, body) = get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");

        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body, json!({ "error_message": message }), "{uri}");
    }
}

/// Non-numeric and non-positive values are rejected.
#[tokio::test]
async fn test_invalid_parameters() {
    let cases = [
        ("/getHealthcare?weight=abc&height=170", "weightは正の数値で指定してください"),
        ("/getHealthcare?weight=-1&height=170", "weightは正の数値で指定してください"),
        ("/getHealthcare?weight=65&height=0", "heightは正の数値で指定してください"),
        ("/getHealthcare?weight=65&height=1e-200", "heightは正の数値で指定してください"),
        ("/getHealthcare?weight=1e305&height=170", "weightは正の数値で指定してください"),
    ];

    for (uri, message) in cases {
        let (status, _, body) = get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");

        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["error_message"], message, "{uri}");
    }
}

/// A repeated parameter still yields a JSON body; the first value is used.
#[tokio::test]
async fn test_repeated_parameters() {
    let (status, content_type, body) = get("/getHealthcare?weight=65&weight=70&height=170").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body, json!({ "bmi": 22.49, "suitable_weight": 63.58 }));
}

/// The API document is served as text and never changes between calls.
#[tokio::test]
async fn test_api_docs_is_static() {
    let (status, content_type, first) = get("/api_docs").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/plain"));

    let (_, _, second) = get("/api_docs").await;
    assert_eq!(first, second);

    let doc: Value = serde_json::from_str(&first).unwrap();
    assert_eq!(doc["info"]["title"], "ヘルスケアAPI");
    assert!(doc["paths"]["/getHealthcare"]["get"].is_object());
}
