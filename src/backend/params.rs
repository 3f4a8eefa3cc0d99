//! Path parameter parsing
//!
//! Ids in paths are taken as raw strings so that a malformed id reads as
//! "not found" instead of axum's default 400 path rejection.

use uuid::Uuid;

use crate::backend::error::BackendError;

/// Parse a path id, mapping malformed input to 404 with `not_found`
pub fn parse_id(raw: &str, not_found: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw.trim()).map_err(|_| {
        tracing::debug!("Malformed id in path: {}", raw);
        BackendError::not_found(not_found)
    })
}
