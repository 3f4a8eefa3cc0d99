/**
 * Server Initialization
 *
 * This module builds the Axum application from a `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite store and run migrations
 * 2. Make sure the upload directory exists
 * 3. Build the token keys from the configured secret
 * 4. Create the router with all routes configured
 *
 * Any failure aborts startup.
 */

use axum::Router;
use thiserror::Error;

use crate::backend::auth::sessions::TokenKeys;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ConfigError, ServerConfig};
use crate::backend::server::state::AppState;
use crate::backend::upload::ImageStore;

/// Errors that stop the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("upload directory error: {0}")]
    Io(#[from] std::io::Error),
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing Inkpost backend server");

    let db_pool = load_database(&config.database_url).await?;

    let images = ImageStore::new(&config.upload_dir);
    images.ensure_root().await?;
    tracing::info!("Serving uploads from {}", config.upload_dir.display());

    let tokens = TokenKeys::new(&config.jwt_secret, config.token_ttl);
    tracing::info!("Issuing tokens valid for {}s", tokens.ttl().as_secs());
    let app_state = AppState::new(db_pool, tokens, images, config.bcrypt_cost);

    let app = create_router(app_state, config.max_upload_bytes);
    tracing::info!("Router configured");

    Ok(app)
}
