use crate::error::HealthResponse;
use axum::Json;

/// GET /health handler - Health check endpoint
///
/// The site has no backing services to probe, so reaching the handler at all
/// means the process is serving requests.
pub async fn health_handler() -> Json<HealthResponse> {
    tracing::debug!("Health check passed");
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
