//! Liveness handlers

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// GET /ping - bare reachability check
pub async fn ping() -> &'static str {
    "pong"
}

/// GET /health - liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "store-api",
    })
}
