//! Shared Module
//!
//! Types that do not depend on the HTTP server: error values describing bad
//! input and the validation rules that produce them. The backend builds on
//! these when turning requests into responses.

/// Shared error types
pub mod error;

/// Field-level request validation
pub mod validation;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use validation::{FieldError, Validator};
