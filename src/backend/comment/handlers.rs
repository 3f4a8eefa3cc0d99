/**
 * Comment Handlers
 *
 * - `POST /api/comments/{blog_id}` - add a comment or reply (authenticated)
 * - `GET /api/comments/{blog_id}` - list a blog's comments, oldest first
 */

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use crate::backend::blog::db::get_blog;
use crate::backend::blog::handlers::BLOG_NOT_FOUND;
use crate::backend::comment::db;
use crate::backend::comment::types::{AddCommentRequest, CommentAddedResponse, CommentResponse, CommentThreadEntry};
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::params::parse_id;
use crate::backend::server::state::AppState;
use crate::shared::{SharedError, Validator};

/// Add a comment to a blog
///
/// `parentCommentId` makes the comment a reply. It is not checked against
/// existing comments.
#[utoipa::path(
    post,
    path = "/api/comments/{blog_id}",
    tag = "comments",
    params(("blog_id" = String, Path, description = "Blog id")),
    request_body = AddCommentRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Comment added", body = CommentAddedResponse),
        (status = 400, description = "Validation failed", body = crate::backend::routes::docs::ErrorBody),
        (status = 401, description = "Not authenticated", body = crate::backend::routes::docs::ErrorBody),
        (status = 404, description = "Blog not found", body = crate::backend::routes::docs::ErrorBody),
    )
)]
pub async fn add_comment(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(blog_id): Path<String>,
    payload: Result<Json<AddCommentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CommentAddedResponse>), BackendError> {
    let Json(request) = payload?;

    Validator::new()
        .required("content", Some(request.content.as_str()), "Content is required")
        .finish()?;
    let parent_comment_id = parent_id(request.parent_comment_id.as_deref())?;

    let blog_id = parse_id(&blog_id, BLOG_NOT_FOUND)?;
    let blog = get_blog(&state.db_pool, blog_id).await?.ok_or_else(|| {
        tracing::warn!("Comment on missing blog {}", blog_id);
        BackendError::not_found(BLOG_NOT_FOUND)
    })?;

    let comment = db::create_comment(&state.db_pool, blog.id, user.user_id, &request.content, parent_comment_id)
        .await
        .map_err(|e| {
            if db::is_missing_reference(&e) {
                tracing::warn!("Blog {} removed before comment was stored", blog.id);
                BackendError::not_found(BLOG_NOT_FOUND)
            } else {
                BackendError::from(e)
            }
        })?;

    tracing::info!("Comment {} added to blog {} by {}", comment.id, blog.id, user.email);

    Ok((
        StatusCode::CREATED,
        Json(CommentAddedResponse {
            message: "Comment added successfully".to_string(),
            comment: CommentResponse::from(&comment),
        }),
    ))
}

/// List a blog's comments
///
/// An unknown blog has no comments and yields an empty list.
#[utoipa::path(
    get,
    path = "/api/comments/{blog_id}",
    tag = "comments",
    params(("blog_id" = String, Path, description = "Blog id")),
    responses(
        (status = 200, description = "Comments, oldest first", body = [CommentThreadEntry]),
        (status = 404, description = "Malformed blog id", body = crate::backend::routes::docs::ErrorBody),
    )
)]
pub async fn get_comments_for_blog(
    State(state): State<AppState>,
    Path(blog_id): Path<String>,
) -> Result<Json<Vec<CommentThreadEntry>>, BackendError> {
    let blog_id = parse_id(&blog_id, BLOG_NOT_FOUND)?;
    let comments = db::list_for_blog(&state.db_pool, blog_id).await?;
    tracing::debug!("Listing {} comments for blog {}", comments.len(), blog_id);
    Ok(Json(comments))
}

/// Parse an optional parent id; blank means top-level
fn parent_id(raw: Option<&str>) -> Result<Option<Uuid>, SharedError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => Uuid::parse_str(s)
            .map(Some)
            .map_err(|_| SharedError::invalid_field("parentCommentId", "Invalid parent comment id")),
    }
}
