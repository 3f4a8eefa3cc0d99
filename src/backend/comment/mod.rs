//! Comment Module
//!
//! Threaded comments on blogs.
//!
//! - **`types`** - Row, request and response types
//! - **`db`** - Database operations
//! - **`handlers`** - HTTP handlers for `/api/comments`

pub mod db;
pub mod handlers;
pub mod types;

pub use handlers::{add_comment, get_comments_for_blog};
pub use types::{Comment, CommentResponse, CommentThreadEntry};
