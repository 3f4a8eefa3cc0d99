//! Backend Error Module
//!
//! This module defines the error type used by every HTTP handler and its
//! conversion into a JSON response.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and extractor rejection conversions
//! ```
//!
//! # Status Mapping
//!
//! - validation failures and bad input: 400
//! - missing/invalid token, non-owner writes: 401
//! - unknown resources: 404
//! - everything else: 500, logged server-side only

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
