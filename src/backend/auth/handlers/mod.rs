//! Authentication Handlers Module
//!
//! HTTP handlers for the `/api/auth` endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! └── login.rs    - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup - User registration
//! - **`login`** - POST /api/auth/login - User authentication

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

// Re-export commonly used types
pub use types::{LoginRequest, LoginResponse, SignupResponse, UserResponse};

// Re-export handlers
pub use login::login;
pub use signup::signup;
