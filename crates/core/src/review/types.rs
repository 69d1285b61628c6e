//! Review entity and submission input types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::UploadFile;

/// A stored customer review.
///
/// Created once per successful submission, never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Store-assigned identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Reviewer name.
    pub name: String,
    /// Rating, 1-5.
    pub rating: i32,
    /// Review text.
    pub comment: String,
    /// Public URL of the uploaded video; `None` when no attachment was
    /// submitted.
    pub video_url: Option<String>,
    /// Server-assigned creation time.
    pub created_at: DateTime<Utc>,
}

/// A review ready to be persisted. The store assigns the identity.
#[derive(Debug, Clone)]
pub struct NewReview {
    /// Reviewer name.
    pub name: String,
    /// Rating, 1-5.
    pub rating: i32,
    /// Review text.
    pub comment: String,
    /// Public URL of the uploaded video, if any.
    pub video_url: Option<String>,
    /// Creation time, assigned at submission.
    pub created_at: DateTime<Utc>,
}

/// Raw submission as extracted from a multipart request.
///
/// All fields are optional here; presence validation happens in the service
/// so the missing-field branch is a tested path rather than an extractor
/// failure.
#[derive(Debug, Default)]
pub struct SubmitReview {
    /// Reviewer name.
    pub name: Option<String>,
    /// Rating; `None` when absent or not a parseable integer.
    pub rating: Option<i32>,
    /// Review text.
    pub comment: Option<String>,
    /// Optional video attachment.
    pub attachment: Option<UploadFile>,
}
