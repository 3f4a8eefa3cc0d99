//! Application test fixture
//!
//! Every `TestApp` gets its own in-memory SQLite database and temporary
//! upload directory, so tests never share state.

use std::path::PathBuf;
use std::time::Duration;

use axum_test::TestServer;
use sqlx::SqlitePool;
use tempfile::TempDir;

use inkpost::backend::auth::sessions::TokenKeys;
use inkpost::backend::routes::create_router;
use inkpost::backend::server::config::{memory_database, DEFAULT_MAX_UPLOAD_BYTES};
use inkpost::backend::server::state::AppState;
use inkpost::backend::upload::ImageStore;

/// Secret the test tokens are signed with
pub const TEST_SECRET: &str = "test-secret-do-not-use";

/// Lowest cost bcrypt accepts
pub const TEST_BCRYPT_COST: u32 = 4;

/// Bytes standing in for an uploaded image
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nnot really a png";

/// Running application plus handles on its store and upload directory
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    uploads: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = memory_database().await.expect("Failed to open test database");
        let uploads = tempfile::tempdir().expect("Failed to create upload directory");

        let state = AppState::new(
            pool,
            TokenKeys::new(TEST_SECRET, Duration::from_secs(3600)),
            ImageStore::new(uploads.path()),
            TEST_BCRYPT_COST,
        );
        let server = TestServer::new(create_router(state.clone(), DEFAULT_MAX_UPLOAD_BYTES))
            .expect("Failed to start test server");

        Self {
            server,
            state,
            uploads,
        }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.state.db_pool
    }

    /// File on disk behind a public `/images/...` path
    pub fn upload_path(&self, public_path: &str) -> PathBuf {
        self.state
            .images
            .path_for(public_path)
            .expect("Not an upload path")
    }

    /// Number of files in the upload directory
    pub fn upload_count(&self) -> usize {
        std::fs::read_dir(self.uploads.path())
            .map(|entries| entries.count())
            .unwrap_or(0)
    }

    /// Count rows of a table
    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(self.pool())
            .await
            .expect("Failed to count rows")
    }
}
