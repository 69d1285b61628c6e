//! Review listing and submission routes.

use std::collections::HashMap;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use solstice_core::multipart::{Part, parse_form};
use solstice_core::review::{Review, ReviewError, SubmitReview};
use solstice_core::storage::UploadFile;
use solstice_shared::AppError;
use tracing::{error, info};

use crate::{AppState, error::ApiError};

/// Creates the review routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/reviews", get(list_reviews).post(submit_review))
}

/// GET `/reviews`
/// List stored reviews, most recent first.
async fn list_reviews(State(state): State<AppState>) -> Result<Json<Vec<Review>>, ApiError> {
    let reviews = state.reviews.list().await?;
    Ok(Json(reviews))
}

/// POST `/reviews`
/// Accept a multipart submission with text fields `name`, `rating`,
/// `comment` and an optional attachment under the configured field name.
async fn submit_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    // Non-multipart bodies never reach the parser.
    let Some(boundary) = extract_boundary(&headers) else {
        return ApiError(AppError::MalformedRequest(
            "expected multipart/form-data with a boundary".into(),
        ))
        .into_response();
    };

    let mut parts = parse_form(&body, &boundary);
    let input = SubmitReview {
        name: text_field(&parts, "name"),
        rating: text_field(&parts, "rating").and_then(|raw| raw.parse().ok()),
        comment: text_field(&parts, "comment"),
        attachment: parts.remove(&state.upload_field).and_then(into_upload),
    };

    match state.reviews.submit(input).await {
        Ok(review) => {
            info!(
                id = ?review.id,
                has_video = review.video_url.is_some(),
                "Review submitted"
            );
            (
                StatusCode::CREATED,
                Json(json!({
                    "message": "Review submitted successfully",
                    "review": review,
                })),
            )
                .into_response()
        }
        Err(e) => {
            if !matches!(e, ReviewError::MissingFields) {
                error!(error = %e, "Failed to submit review");
            }
            ApiError::from(e).into_response()
        }
    }
}

/// Extract the boundary token from a `multipart/form-data` content type.
fn extract_boundary(headers: &HeaderMap) -> Option<String> {
    let content_type = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    let mut items = content_type.split(';').map(str::trim);
    if !items.next()?.eq_ignore_ascii_case("multipart/form-data") {
        return None;
    }
    items.find_map(|item| {
        let (key, value) = item.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("boundary")
            .then(|| value.trim().trim_matches('"').to_string())
    })
}

fn text_field(parts: &HashMap<String, Part>, name: &str) -> Option<String> {
    parts.get(name)?.as_text().map(str::to_string)
}

fn into_upload(part: Part) -> Option<UploadFile> {
    match part {
        Part::File {
            filename,
            content_type,
            content,
            ..
        } => Some(UploadFile {
            filename,
            content_type,
            content,
        }),
        Part::Text { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with_content_type(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_str(value).expect("value"));
        headers
    }

    #[test]
    fn test_extract_boundary() {
        let headers =
            headers_with_content_type("multipart/form-data; boundary=----WebKitFormBoundaryX");
        assert_eq!(
            extract_boundary(&headers).as_deref(),
            Some("----WebKitFormBoundaryX")
        );
    }

    #[test]
    fn test_extract_boundary_quoted() {
        let headers = headers_with_content_type("multipart/form-data; boundary=\"abc 123\"");
        assert_eq!(extract_boundary(&headers).as_deref(), Some("abc 123"));
    }

    #[test]
    fn test_extract_boundary_rejects_other_content_types() {
        let headers = headers_with_content_type("application/json");
        assert_eq!(extract_boundary(&headers), None);

        let headers = headers_with_content_type("multipart/form-data");
        assert_eq!(extract_boundary(&headers), None);
    }

    #[test]
    fn test_extract_boundary_missing_header() {
        assert_eq!(extract_boundary(&HeaderMap::new()), None);
    }
}
