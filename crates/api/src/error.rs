//! Error-to-response mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use solstice_core::review::ReviewError;
use solstice_shared::AppError;

/// Wrapper giving [`AppError`] an HTTP response representation.
///
/// Every error path returns a JSON body with at least an `error` key;
/// server-side failures additionally attach the underlying message under
/// `details` for diagnostics.
pub struct ApiError(pub AppError);

impl From<ReviewError> for ApiError {
    fn from(err: ReviewError) -> Self {
        Self(match err {
            ReviewError::MissingFields => AppError::Validation,
            ReviewError::Upload(e) => AppError::StorageUpload(e.to_string()),
            ReviewError::Store(e) => AppError::Persistence(e),
        })
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = if status.is_server_error() {
            json!({
                "error": "Internal Server Error",
                "details": self.0.to_string(),
            })
        } else {
            json!({ "error": self.0.to_string() })
        };

        (status, Json(body)).into_response()
    }
}

/// Fallback for requests hitting a known path with an unsupported method.
pub async fn method_not_allowed() -> Response {
    ApiError(AppError::MethodNotAllowed).into_response()
}
