//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Document store configuration.
    pub database: DatabaseConfig,
    /// Blob store configuration.
    pub storage: StorageSettings,
    /// Upload handling configuration.
    #[serde(default)]
    pub upload: UploadConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Document store configuration.
///
/// A missing connection URI fails deserialization, which makes the
/// misconfiguration fatal at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// MongoDB connection URI.
    pub uri: String,
    /// Database name.
    #[serde(default = "default_database_name")]
    pub name: String,
    /// Collection holding review documents.
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_database_name() -> String {
    "solstice".to_string()
}

fn default_collection() -> String {
    "reviews".to_string()
}

/// Blob store provider settings.
///
/// Mirrors the storage provider shapes understood by the core storage
/// service; the server binary maps these into a `StorageConfig`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "provider", rename_all = "snake_case")]
pub enum StorageSettings {
    /// S3-compatible object storage.
    S3 {
        /// Bucket name. Missing bucket fails deserialization (startup-fatal).
        bucket: String,
        /// AWS region, used for the deterministic public URL.
        #[serde(default = "default_region")]
        region: String,
        /// Access key ID.
        access_key_id: String,
        /// Secret access key.
        secret_access_key: String,
        /// Custom endpoint for S3-compatible providers (MinIO, R2).
        #[serde(default)]
        endpoint: Option<String>,
    },
    /// Local filesystem (development only).
    LocalFs {
        /// Root directory for stored objects.
        root: PathBuf,
        /// Base URL prepended to object keys in responses.
        public_base_url: String,
    },
}

fn default_region() -> String {
    "us-east-2".to_string()
}

/// Upload handling configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// Multipart field name carrying the attachment.
    ///
    /// Some deployments submit the file under `media` instead of `video`,
    /// so this is a knob rather than a fixed contract.
    #[serde(default = "default_field_name")]
    pub field_name: String,
    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            field_name: default_field_name(),
            max_file_size: default_max_file_size(),
        }
    }
}

fn default_field_name() -> String {
    "video".to_string()
}

fn default_max_file_size() -> u64 {
    50 * 1024 * 1024
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, including when
    /// the database URI or S3 bucket is absent.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SOLSTICE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
