//! Shared Error Types
//!
//! This module defines error types that are independent of the HTTP layer.
//! They describe input problems that the backend turns into 400 responses.
//!
//! # Usage
//!
//! ```rust
//! use inkpost::shared::error::SharedError;
//! use inkpost::shared::validation::FieldError;
//!
//! let error = SharedError::validation(vec![FieldError::body("email", "Please include a valid email")]);
//! ```
use thiserror::Error;

use crate::shared::validation::FieldError;

/// Shared error types
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// Request data failed validation
    #[error("Validation failed: {}", summarize(.errors))]
    ValidationError {
        /// Every failing field, in the order the rules were checked
        errors: Vec<FieldError>,
    },
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{} ({})", e.msg, e.param))
        .collect::<Vec<_>>()
        .join(", ")
}

impl SharedError {
    /// Create a new validation error from a list of field errors
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::ValidationError { errors }
    }

    /// Create a validation error for a single field
    pub fn invalid_field(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::validation(vec![FieldError::body(param, msg)])
    }
}
