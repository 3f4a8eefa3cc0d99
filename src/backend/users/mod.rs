//! Users Module
//!
//! Read-only user lookups under `/api/users`. Registration and login live in
//! `backend::auth`.

pub mod handlers;

pub use handlers::{get_me, get_user};
