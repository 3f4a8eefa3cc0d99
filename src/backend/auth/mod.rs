//! Authentication Module
//!
//! This module handles user registration, login and the bearer tokens that
//! protect write operations.
//!
//! # Architecture
//!
//! - **`users`** - User data model and database operations
//! - **`sessions`** - JWT token generation and validation
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email + password (+ optional profile image) → user created → summary returned
//! 2. **Login**: email + password → credentials verified → token returned
//! 3. **Protected calls**: `Authorization: Bearer <token>` → token verified → `AuthUser`
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 JWTs that expire after one hour by default
//! - Unknown email and wrong password are indistinguishable to clients

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, LoginResponse, SignupResponse, UserResponse};
pub use handlers::{login, signup};
pub use sessions::{Claims, TokenKeys};
