//! Storage service implementation using Apache OpenDAL.

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use opendal::{Operator, services};

use super::config::{StorageConfig, StorageProvider};
use super::error::StorageError;

/// A file attachment taken from a multipart submission, queued for upload.
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// Original filename as submitted by the client.
    pub filename: String,
    /// MIME type of the file.
    pub content_type: String,
    /// Raw file bytes.
    pub content: Bytes,
}

/// Blob store operations needed by the review flow.
///
/// Implemented by [`StorageService`]; tests substitute in-memory fakes.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Upload the file under a collision-resistant key and return the
    /// public URL of the stored object.
    async fn put_object(&self, file: UploadFile) -> Result<String, StorageError>;
}

/// Storage service for uploaded attachments.
pub struct StorageService {
    operator: Operator,
    config: StorageConfig,
}

impl StorageService {
    /// Create a new storage service from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage provider cannot be initialized.
    pub fn from_config(config: StorageConfig) -> Result<Self, StorageError> {
        let operator = Self::create_operator(&config.provider)?;
        Ok(Self { operator, config })
    }

    /// Create OpenDAL operator from provider config.
    fn create_operator(provider: &StorageProvider) -> Result<Operator, StorageError> {
        match provider {
            StorageProvider::S3 {
                endpoint,
                bucket,
                access_key_id,
                secret_access_key,
                region,
            } => {
                let mut builder = services::S3::default()
                    .bucket(bucket)
                    .access_key_id(access_key_id)
                    .secret_access_key(secret_access_key)
                    .region(region);
                if let Some(endpoint) = endpoint {
                    builder = builder.endpoint(endpoint);
                }

                Ok(Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish())
            }
            StorageProvider::LocalFs { root, .. } => {
                let builder = services::Fs::default().root(
                    root.to_str()
                        .ok_or_else(|| StorageError::configuration("invalid path"))?,
                );

                Ok(Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish())
            }
        }
    }

    /// Generate the storage key for an uploaded file.
    ///
    /// Format: `{unix_millis}-{sanitized_filename}`. Two uploads of the same
    /// filename within the same millisecond collide; accepted limitation.
    #[must_use]
    pub fn generate_key(filename: &str) -> String {
        format!(
            "{}-{}",
            Utc::now().timestamp_millis(),
            sanitize_filename(filename)
        )
    }

    /// Public URL of the object stored under `key`, built deterministically
    /// from container name, region, and key.
    #[must_use]
    pub fn public_url(&self, key: &str) -> String {
        match &self.config.provider {
            StorageProvider::S3 {
                endpoint: Some(endpoint),
                bucket,
                ..
            } => format!("{}/{bucket}/{key}", endpoint.trim_end_matches('/')),
            StorageProvider::S3 { bucket, region, .. } => {
                format!("https://{bucket}.s3.{region}.amazonaws.com/{key}")
            }
            StorageProvider::LocalFs {
                public_base_url, ..
            } => format!("{}/{key}", public_base_url.trim_end_matches('/')),
        }
    }

    /// Upload raw bytes under `key` and return the public URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exceeds the configured size limit or the
    /// provider call fails.
    pub async fn put(
        &self,
        key: &str,
        content: Bytes,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let size = content.len() as u64;
        if size > self.config.max_file_size {
            return Err(StorageError::file_too_large(
                size,
                self.config.max_file_size,
            ));
        }

        self.operator
            .write_with(key, content)
            .content_type(content_type)
            .await?;

        Ok(self.public_url(key))
    }

    /// Get the storage provider name.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.config.provider.name()
    }

    /// Get the bucket/container name.
    #[must_use]
    pub fn bucket(&self) -> &str {
        self.config.provider.bucket()
    }
}

#[async_trait]
impl BlobStore for StorageService {
    async fn put_object(&self, file: UploadFile) -> Result<String, StorageError> {
        let key = Self::generate_key(&file.filename);
        self.put(&key, file.content, &file.content_type).await
    }
}

/// Sanitize filename for use in a storage key.
///
/// Only allows ASCII alphanumeric characters, dots, hyphens, and underscores.
fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
