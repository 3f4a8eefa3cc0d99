/**
 * API Route Handlers
 *
 * This module wires the REST endpoints to their handlers.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/signup` - User registration
 * - `POST /api/auth/login` - User login
 *
 * ## Users
 * - `GET /api/users/me` - Current user (requires authentication)
 * - `GET /api/users/{id}` - Any user's summary
 *
 * ## Blogs
 * - `GET|POST /api/blogs` - List / create
 * - `GET|PUT|DELETE /api/blogs/{id}` - Read / update / delete
 *
 * ## Comments
 * - `GET|POST /api/comments/{blog_id}` - List / add
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, signup};
use crate::backend::blog::{create_blog, delete_blog, get_blog_by_id, get_blogs, update_blog};
use crate::backend::comment::{add_comment, get_comments_for_blog};
use crate::backend::server::state::AppState;
use crate::backend::users::{get_me, get_user};

/// Configure API routes
///
/// # Authentication
///
/// Write operations and `/api/users/me` take an `AuthUser` extractor, so
/// public and protected methods can share a path. Everything else is public.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        // User lookups
        .route("/api/users/me", get(get_me))
        .route("/api/users/{id}", get(get_user))
        // Blogs
        .route("/api/blogs", get(get_blogs).post(create_blog))
        .route(
            "/api/blogs/{id}",
            get(get_blog_by_id).put(update_blog).delete(delete_blog),
        )
        // Comments
        .route(
            "/api/comments/{blog_id}",
            get(get_comments_for_blog).post(add_comment),
        )
}
