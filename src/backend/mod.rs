//! Backend Module
//!
//! This module contains all server-side code for Inkpost: an Axum HTTP
//! server exposing users, blogs and threaded comments over a REST API.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Router assembly and the OpenAPI document
//! - **`auth`** - Signup, login, users table, JWT tokens
//! - **`users`** - User lookups
//! - **`blog`** - Blog posts
//! - **`comment`** - Threaded comments
//! - **`upload`** - Form extraction and image storage
//! - **`middleware`** - Bearer token authentication
//! - **`error`** - Backend error type and its HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── params.rs       - Path id parsing
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── users/          - User lookups
//! ├── blog/           - Blogs
//! ├── comment/        - Comments
//! ├── upload/         - Uploads
//! ├── middleware/     - Request authentication
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! request → extractors (auth, form) → validation → store → JSON response.
//! Handlers return `Result<_, BackendError>`; the error renders itself as a
//! JSON body with the right status.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// User lookups
pub mod users;

/// Blog posts
pub mod blog;

/// Threaded comments
pub mod comment;

/// Form extraction and image storage
pub mod upload;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

/// Path parameter parsing
pub mod params;

/// Re-export commonly used types
pub use error::BackendError;
pub use routes::create_router;
pub use server::create_app;
