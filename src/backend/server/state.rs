/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the only state the server holds:
 * - SQLite connection pool
 * - Token signing/verification keys
 * - Image store for uploads
 * - bcrypt cost factor
 *
 * Everything in it is cheap to clone and immutable after startup, so
 * handlers never lock anything.
 *
 * # Example
 *
 * ```rust,no_run
 * use inkpost::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let _pool = &state.db_pool;
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenKeys;
use crate::backend::upload::ImageStore;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Keys used to issue and verify bearer tokens
    pub tokens: TokenKeys,

    /// Where uploaded images are written
    pub images: ImageStore,

    /// bcrypt cost used when hashing new passwords
    pub bcrypt_cost: u32,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, tokens: TokenKeys, images: ImageStore, bcrypt_cost: u32) -> Self {
        Self {
            db_pool,
            tokens,
            images,
            bcrypt_cost,
        }
    }
}

/// Implement FromRef for SqlitePool
///
/// Lets handlers that only touch the database take `State<SqlitePool>`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for TokenKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for ImageStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.images.clone()
    }
}
