//! MongoDB layer: connection, review documents, and repositories.

pub mod entities;
pub mod repositories;

use mongodb::{Client, bson::doc};

pub use repositories::ReviewRepository;

/// Connect to MongoDB and verify the deployment is reachable.
///
/// The returned [`Client`] holds an internal connection pool and is cheap to
/// clone; call this once at startup and share the result. A connect failure
/// is fatal: the server must not begin serving without a working store.
///
/// # Errors
///
/// Returns an error if the URI is invalid or the deployment does not answer
/// a ping.
pub async fn connect(uri: &str) -> Result<Client, mongodb::error::Error> {
    let client = Client::with_uri_str(uri).await?;
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;
    Ok(client)
}
