//! Health check endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health — liveness probe; has no dependency to check.
#[tracing::instrument]
pub async fn check() -> Json<HealthResponse> {
    metrics::counter!("health_checks_total").increment(1);
    Json(HealthResponse { status: "healthy" })
}
