//! Middleware Module
//!
//! Request processing that runs before handler logic.
//!
//! - **`auth`** - `AuthUser` extractor guarding protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use inkpost::backend::middleware::AuthUser;
//!
//! async fn protected(AuthUser(user): AuthUser) -> String {
//!     user.email
//! }
//! ```

pub mod auth;

pub use auth::{authenticate, bearer_token, AuthUser, AuthenticatedUser};
