//! Common test utilities and helpers
//!
//! This module provides shared utilities for the API tests:
//! - Application fixture over an in-memory database
//! - Authentication helpers
//! - Response assertions

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod database;

// Re-export commonly used utilities
#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use auth_helpers::*;
#[allow(unused_imports)]
pub use database::*;
