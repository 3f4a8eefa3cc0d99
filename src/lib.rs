//! Inkpost - Main Library
//!
//! Inkpost is the backend of a small blogging platform: users sign up and
//! log in with bearer tokens, publish blog posts with a cover image, and
//! discuss them in threaded comments.
//!
//! # Module Structure
//!
//! - **`shared`** - Validation rules and errors that do not depend on HTTP
//! - **`backend`** - Axum server, handlers and SQLite persistence
//!
//! # Usage
//!
//! ```rust,no_run
//! use inkpost::backend::server::{config::ServerConfig, create_app};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::from_env()?;
//!     let app = create_app(&config).await?;
//!     let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

/// Types shared across the backend
pub mod shared;

/// Server-side code
pub mod backend;
