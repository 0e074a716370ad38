//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::docs::ApiDoc;
use super::handlers::{
    api_docs, get_healthcare, health, AppState, API_DOCS_PATH, HEALTHCARE_PATH, HEALTH_PATH,
};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(HEALTHCARE_PATH, get(get_healthcare))
        .route(API_DOCS_PATH, get(api_docs))
        .route(HEALTH_PATH, get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Mount Swagger UI at `/swagger-ui`, backed by the same API document.
pub fn with_swagger_ui(router: Router) -> Router {
    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
