//! Solstice API Server
//!
//! Main entry point for the review submission service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use solstice_api::{AppState, create_router};
use solstice_core::review::ReviewService;
use solstice_core::storage::{StorageConfig, StorageProvider, StorageService};
use solstice_db::{ReviewRepository, connect};
use solstice_shared::{AppConfig, config::StorageSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "solstice=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; missing database URI or bucket is fatal here.
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Connect to the document store. The server must not begin serving
    // without it.
    let client = connect(&config.database.uri)
        .await
        .context("Failed to connect to MongoDB")?;
    info!(database = %config.database.name, "Connected to MongoDB");

    let database = client.database(&config.database.name);
    let repository = ReviewRepository::new(&database, &config.database.collection);

    // Build the blob store adapter.
    let provider = match config.storage.clone() {
        StorageSettings::S3 {
            bucket,
            region,
            access_key_id,
            secret_access_key,
            endpoint,
        } => StorageProvider::s3(endpoint, bucket, access_key_id, secret_access_key, region),
        StorageSettings::LocalFs {
            root,
            public_base_url,
        } => StorageProvider::local_fs(root, public_base_url),
    };
    let storage = StorageService::from_config(
        StorageConfig::new(provider).with_max_file_size(config.upload.max_file_size),
    )
    .context("Failed to initialize blob storage")?;
    info!(
        provider = storage.provider_name(),
        bucket = storage.bucket(),
        "Blob storage configured"
    );

    // Create application state
    let state = AppState {
        reviews: Arc::new(ReviewService::new(
            Arc::new(repository),
            Arc::new(storage),
        )),
        upload_field: config.upload.field_name.clone(),
        max_body_bytes: usize::try_from(config.upload.max_file_size)
            .unwrap_or(usize::MAX),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
