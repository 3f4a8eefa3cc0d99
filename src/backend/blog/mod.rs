//! Blog Module
//!
//! Blog posts with a cover image, written by authenticated users and
//! readable by anyone.
//!
//! - **`types`** - Row and response types
//! - **`db`** - Database operations
//! - **`handlers`** - HTTP handlers for `/api/blogs`

pub mod db;
pub mod handlers;
pub mod types;

pub use handlers::{create_blog, delete_blog, get_blog_by_id, get_blogs, update_blog};
pub use types::{Blog, BlogResponse, BlogWithAuthor};
