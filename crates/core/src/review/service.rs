//! Review service implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::error::ReviewError;
use super::types::{NewReview, Review, SubmitReview};
use crate::storage::BlobStore;

/// Repository trait for review persistence.
///
/// This trait is implemented by the db crate to provide actual document
/// store operations.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// List stored reviews, most recent first.
    async fn list(&self) -> Result<Vec<Review>, ReviewError>;

    /// Persist one review and return it with its assigned identity.
    async fn insert(&self, review: NewReview) -> Result<Review, ReviewError>;
}

/// Review service orchestrating validation, attachment upload, and
/// persistence.
pub struct ReviewService {
    store: Arc<dyn ReviewStore>,
    blobs: Arc<dyn BlobStore>,
}

impl ReviewService {
    /// Create a new review service.
    #[must_use]
    pub fn new(store: Arc<dyn ReviewStore>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { store, blobs }
    }

    /// List stored reviews.
    ///
    /// # Errors
    ///
    /// Returns an error if the document store call fails.
    pub async fn list(&self) -> Result<Vec<Review>, ReviewError> {
        self.store.list().await
    }

    /// Validate and persist a submission.
    ///
    /// The attachment, when present, is uploaded before the insert; an
    /// upload failure aborts the whole submission and nothing is persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `name`, `rating`, or `comment` is absent
    /// - The blob store upload fails
    /// - The document store insert fails
    pub async fn submit(&self, input: SubmitReview) -> Result<Review, ReviewError> {
        let (Some(name), Some(rating), Some(comment)) =
            (input.name, input.rating, input.comment)
        else {
            return Err(ReviewError::MissingFields);
        };
        if name.is_empty() || comment.is_empty() {
            return Err(ReviewError::MissingFields);
        }

        let video_url = match input.attachment {
            Some(file) => Some(self.blobs.put_object(file).await?),
            None => None,
        };

        self.store
            .insert(NewReview {
                name,
                rating,
                comment,
                video_url,
                created_at: Utc::now(),
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use bytes::Bytes;

    use super::*;
    use crate::storage::{StorageError, UploadFile};

    struct InMemoryStore {
        reviews: Mutex<Vec<Review>>,
    }

    impl InMemoryStore {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                reviews: Mutex::new(Vec::new()),
            })
        }

        fn len(&self) -> usize {
            self.reviews.lock().expect("lock").len()
        }
    }

    #[async_trait]
    impl ReviewStore for InMemoryStore {
        async fn list(&self) -> Result<Vec<Review>, ReviewError> {
            Ok(self.reviews.lock().expect("lock").clone())
        }

        async fn insert(&self, review: NewReview) -> Result<Review, ReviewError> {
            let mut reviews = self.reviews.lock().expect("lock");
            let stored = Review {
                id: Some(format!("r{}", reviews.len())),
                name: review.name,
                rating: review.rating,
                comment: review.comment,
                video_url: review.video_url,
                created_at: review.created_at,
            };
            reviews.push(stored.clone());
            Ok(stored)
        }
    }

    struct FakeBlobs {
        fail: bool,
    }

    #[async_trait]
    impl BlobStore for FakeBlobs {
        async fn put_object(&self, file: UploadFile) -> Result<String, StorageError> {
            if self.fail {
                return Err(StorageError::operation("simulated outage"));
            }
            Ok(format!("https://blobs.test/{}", file.filename))
        }
    }

    fn service(store: Arc<InMemoryStore>, fail_uploads: bool) -> ReviewService {
        ReviewService::new(store, Arc::new(FakeBlobs { fail: fail_uploads }))
    }

    fn valid_input(attachment: Option<UploadFile>) -> SubmitReview {
        SubmitReview {
            name: Some("Ada".to_string()),
            rating: Some(5),
            comment: Some("Panels installed on time".to_string()),
            attachment,
        }
    }

    fn attachment() -> UploadFile {
        UploadFile {
            filename: "clip.mp4".to_string(),
            content_type: "video/mp4".to_string(),
            content: Bytes::from_static(b"\x00clip"),
        }
    }

    #[tokio::test]
    async fn test_submit_without_attachment_has_no_video_url() {
        let store = InMemoryStore::new();
        let review = service(store.clone(), false)
            .submit(valid_input(None))
            .await
            .expect("submit");

        assert_eq!(review.video_url, None);
        assert_eq!(review.rating, 5);
        assert!(review.id.is_some());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_with_attachment_stores_public_url() {
        let store = InMemoryStore::new();
        let review = service(store.clone(), false)
            .submit(valid_input(Some(attachment())))
            .await
            .expect("submit");

        assert_eq!(
            review.video_url.as_deref(),
            Some("https://blobs.test/clip.mp4")
        );
    }

    #[tokio::test]
    async fn test_missing_comment_rejected_without_insert() {
        let store = InMemoryStore::new();
        let input = SubmitReview {
            comment: None,
            ..valid_input(None)
        };

        let err = service(store.clone(), false).submit(input).await.unwrap_err();
        assert!(matches!(err, ReviewError::MissingFields));
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_empty_name_counts_as_missing() {
        let store = InMemoryStore::new();
        let input = SubmitReview {
            name: Some(String::new()),
            ..valid_input(None)
        };

        let err = service(store.clone(), false).submit(input).await.unwrap_err();
        assert!(matches!(err, ReviewError::MissingFields));
    }

    #[tokio::test]
    async fn test_upload_failure_aborts_before_insert() {
        let store = InMemoryStore::new();
        let err = service(store.clone(), true)
            .submit(valid_input(Some(attachment())))
            .await
            .unwrap_err();

        assert!(matches!(err, ReviewError::Upload(_)));
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_list_is_idempotent() {
        let store = InMemoryStore::new();
        let svc = service(store, false);
        svc.submit(valid_input(None)).await.expect("submit");

        let first = svc.list().await.expect("list");
        let second = svc.list().await.expect("list");
        assert_eq!(first, second);
    }
}
