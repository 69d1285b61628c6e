//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for listing and submitting reviews
//! - Error-to-response mapping
//! - The shared application state

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit};
use solstice_core::review::ReviewService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
///
/// Built once at startup and passed into the router; handlers never reach
/// for process-wide connections.
#[derive(Clone)]
pub struct AppState {
    /// Review service over the document and blob stores.
    pub reviews: Arc<ReviewService>,
    /// Multipart field name carrying the attachment.
    pub upload_field: String,
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .method_not_allowed_fallback(error::method_not_allowed)
        .layer(DefaultBodyLimit::max(state.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
