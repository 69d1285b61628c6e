//! Service liveness endpoint.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::AppState;

/// Liveness response for the review service.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Human-readable liveness message.
    pub message: &'static str,
}

/// Report that the review service is up.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "solstice",
        version: env!("CARGO_PKG_VERSION"),
        message: "Solstice review service is running",
    })
}

/// Creates the liveness routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
