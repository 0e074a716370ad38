//! OpenAPI description of the public API.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::health::HealthMetrics;

/// API document served by `/api_docs`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ヘルスケアAPI",
        description = "身長と体重を渡すとBMI,適正体重、肥満度を返してくれます",
        version = "1.0.0"
    ),
    servers(
        (url = "/", description = "https")
    ),
    paths(super::handlers::get_healthcare),
    components(schemas(HealthMetrics, ErrorResponse)),
    tags(
        (name = "Healthcare", description = "Body-mass metrics")
    )
)]
pub struct ApiDoc;

/// Serialize the API document once for serving as text.
pub fn render() -> serde_json::Result<String> {
    ApiDoc::openapi().to_pretty_json()
}
