//! Request Validation
//!
//! Field-level validation rules applied to request payloads before any
//! business logic runs. Rules are chained on a [`Validator`]; every failing
//! rule contributes one [`FieldError`], and [`Validator::finish`] turns the
//! collected failures into a [`SharedError::ValidationError`].
//!
//! ```rust
//! use inkpost::shared::validation::Validator;
//!
//! let result = Validator::new()
//!     .email("email", Some("not-an-email"), "Please include a valid email")
//!     .min_length("password", Some("abc"), 6, "Password must be 6 or more characters")
//!     .finish();
//! assert!(result.is_err());
//! ```

use std::str::FromStr;

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::error::SharedError;

/// A single failing field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Human-readable message
    pub msg: String,
    /// Name of the offending field
    pub param: String,
    /// Where the field was read from
    pub location: String,
}

impl FieldError {
    /// Error for a field read from the request body
    pub fn body(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: param.into(),
            location: "body".to_string(),
        }
    }
}

/// Collects field errors across a chain of rules
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `msg` for `param` unless `ok` holds
    pub fn check(mut self, param: &str, ok: bool, msg: &str) -> Self {
        if !ok {
            self.errors.push(FieldError::body(param, msg));
        }
        self
    }

    /// Field must be present and contain something other than whitespace
    pub fn required(self, param: &str, value: Option<&str>, msg: &str) -> Self {
        let ok = value.is_some_and(|v| !v.trim().is_empty());
        self.check(param, ok, msg)
    }

    /// Field must be a syntactically valid email address
    pub fn email(self, param: &str, value: Option<&str>, msg: &str) -> Self {
        let ok = value.is_some_and(is_valid_email);
        self.check(param, ok, msg)
    }

    /// Field must be at least `min` characters long
    pub fn min_length(self, param: &str, value: Option<&str>, min: usize, msg: &str) -> Self {
        let ok = value.is_some_and(|v| v.chars().count() >= min);
        self.check(param, ok, msg)
    }

    pub fn finish(self) -> Result<(), SharedError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(SharedError::validation(self.errors))
        }
    }
}

/// Check an address the way form validators usually do: an RFC 5322
/// address with no display name, on a dotted domain ending in an
/// alphabetic TLD.
pub fn is_valid_email(value: &str) -> bool {
    match EmailAddress::from_str(value) {
        Ok(address) => address.email() == value && has_alphabetic_tld(address.domain()),
        Err(_) => false,
    }
}

fn has_alphabetic_tld(domain: &str) -> bool {
    domain
        .rsplit_once('.')
        .is_some_and(|(_, tld)| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
}
