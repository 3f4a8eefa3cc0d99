/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration and
 * opening the SQLite store.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables (a `.env` file is loaded
 * by the binary first), with defaults for local development where that is
 * safe. `JWT_SECRET` has no default.
 *
 * # Error Handling
 *
 * Unlike optional services, the store and the token secret are required:
 * configuration errors abort startup.
 */

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;
/// Default store location
pub const DEFAULT_DATABASE_URL: &str = "sqlite://inkpost.db";
/// Default directory for uploaded images
pub const DEFAULT_UPLOAD_DIR: &str = "public/images";
/// Default token lifetime (one hour)
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 60 * 60;
/// Default request body cap (5 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// SQLite connection URL
    pub database_url: String,
    /// Secret used to sign and verify tokens
    pub jwt_secret: String,
    /// Listen port
    pub port: u16,
    /// Directory uploaded images are written to and served from
    pub upload_dir: PathBuf,
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
    /// bcrypt cost factor
    pub bcrypt_cost: u32,
    /// Maximum accepted request body size in bytes
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
        let token_ttl_secs = parse_or("TOKEN_TTL_SECS", get("TOKEN_TTL_SECS"), DEFAULT_TOKEN_TTL_SECS)?;
        let bcrypt_cost = parse_or("BCRYPT_COST", get("BCRYPT_COST"), bcrypt::DEFAULT_COST)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                name: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }
        let max_upload_bytes = parse_or("MAX_UPLOAD_BYTES", get("MAX_UPLOAD_BYTES"), DEFAULT_MAX_UPLOAD_BYTES)?;

        Ok(Self {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret,
            port,
            upload_dir: get("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            token_ttl: Duration::from_secs(token_ttl_secs),
            bcrypt_cost,
            max_upload_bytes,
        })
    }
}

fn parse_or<T: FromStr>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}

/// Open the store at `database_url` and bring its schema up to date
///
/// The database file is created if it does not exist yet.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    tracing::info!("Database connection pool created successfully");

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Open a private in-memory store with the schema applied
///
/// The pool holds a single connection that is never recycled, since an
/// in-memory SQLite database lives exactly as long as its connection.
pub async fn memory_database() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Apply pending migrations from `migrations/`
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}
