//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, layers, static images
//! ├── api_routes.rs   - REST endpoints
//! └── docs.rs         - OpenAPI document
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use inkpost::backend::routes::create_router;
//! use inkpost::backend::server::state::AppState;
//!
//! # fn example(app_state: AppState) {
//! let router = create_router(app_state, 5 * 1024 * 1024);
//! # }
//! ```

/// Main router creation
pub mod router;

/// API endpoint wiring
pub mod api_routes;

/// OpenAPI document
pub mod docs;

pub use router::create_router;
