//! BSON document shapes for the review collection.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};
use solstice_core::review::{NewReview, Review};

/// A review as stored in the collection.
///
/// Field names match the wire format the frontend expects (`videoUrl`,
/// `createdAt`); `_id` is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDocument {
    /// Store-assigned identity.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Reviewer name.
    pub name: String,
    /// Rating, 1-5.
    pub rating: i32,
    /// Review text.
    pub comment: String,
    /// Public URL of the uploaded video, if any.
    #[serde(rename = "videoUrl")]
    pub video_url: Option<String>,
    /// Server-assigned creation time.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime,
}

impl From<NewReview> for ReviewDocument {
    fn from(review: NewReview) -> Self {
        Self {
            id: None,
            name: review.name,
            rating: review.rating,
            comment: review.comment,
            video_url: review.video_url,
            created_at: DateTime::from_chrono(review.created_at),
        }
    }
}

impl From<ReviewDocument> for Review {
    fn from(document: ReviewDocument) -> Self {
        Self {
            id: document.id.map(|id| id.to_hex()),
            name: document.name,
            rating: document.rating,
            comment: document.comment,
            video_url: document.video_url,
            created_at: document.created_at.to_chrono(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mongodb::bson;

    use super::*;

    fn new_review() -> NewReview {
        NewReview {
            name: "Ada".to_string(),
            rating: 5,
            comment: "Panels installed on time".to_string(),
            video_url: Some("https://bucket.s3.us-east-2.amazonaws.com/1-clip.mp4".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_document_uses_collection_field_names() {
        let document = ReviewDocument::from(new_review());
        let bson = bson::to_document(&document).expect("serialize");

        assert!(bson.contains_key("videoUrl"));
        assert!(bson.contains_key("createdAt"));
        assert!(!bson.contains_key("_id"), "unset _id must be omitted");
    }

    #[test]
    fn test_round_trip_to_domain_review() {
        let created_at = Utc::now();
        let mut document = ReviewDocument::from(NewReview {
            created_at,
            ..new_review()
        });
        let object_id = ObjectId::new();
        document.id = Some(object_id);

        let review = Review::from(document);
        assert_eq!(review.id, Some(object_id.to_hex()));
        assert_eq!(review.name, "Ada");
        // BSON datetimes carry millisecond precision.
        assert_eq!(
            review.created_at.timestamp_millis(),
            created_at.timestamp_millis()
        );
    }
}
