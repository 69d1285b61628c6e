//! Review repository over a MongoDB collection.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{Collection, Database, bson::doc};
use solstice_core::review::{NewReview, Review, ReviewError, ReviewStore};

use crate::entities::ReviewDocument;

/// Repository for the review collection.
#[derive(Clone)]
pub struct ReviewRepository {
    collection: Collection<ReviewDocument>,
}

impl ReviewRepository {
    /// Create a repository over the named collection.
    #[must_use]
    pub fn new(database: &Database, collection: &str) -> Self {
        Self {
            collection: database.collection(collection),
        }
    }
}

#[async_trait]
impl ReviewStore for ReviewRepository {
    async fn list(&self) -> Result<Vec<Review>, ReviewError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await
            .map_err(|e| ReviewError::store(e.to_string()))?;

        let documents: Vec<ReviewDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| ReviewError::store(e.to_string()))?;

        Ok(documents.into_iter().map(Review::from).collect())
    }

    async fn insert(&self, review: NewReview) -> Result<Review, ReviewError> {
        let mut document = ReviewDocument::from(review);
        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(|e| ReviewError::store(e.to_string()))?;

        document.id = result.inserted_id.as_object_id();
        Ok(document.into())
    }
}
