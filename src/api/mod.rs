//! HTTP API module: health metrics, API document and liveness endpoints.

pub mod docs;
pub mod handlers;
pub mod routes;

pub use docs::ApiDoc;
pub use handlers::AppState;
pub use routes::{create_router, with_swagger_ui};
