//! Blob store adapter for uploaded review attachments, built on Apache
//! OpenDAL.
//!
//! Supported providers:
//! - S3-compatible: AWS S3, Cloudflare R2, MinIO
//! - Local filesystem (development only)
//!
//! Uploads return a public URL built deterministically from the container
//! name, region, and object key.

mod config;
mod error;
mod service;

pub use config::{StorageConfig, StorageProvider};
pub use error::StorageError;
pub use service::{BlobStore, StorageService, UploadFile};
