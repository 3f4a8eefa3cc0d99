/**
 * Comment Types
 *
 * Comments form threads through an optional parent reference. The stored
 * parent id is kept as given; when listing, the parent is inlined as its raw
 * comment, or `null` if it no longer resolves.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::backend::auth::handlers::types::UserResponse;

/// Comment row as stored in the `comments` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub blog_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub parent_comment_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Add comment request
///
/// `parentCommentId` may be absent, `null` or blank for a top-level comment.
#[derive(Deserialize, Serialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub parent_comment_id: Option<String>,
}

/// Comment with references as bare ids
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: Uuid,
    /// Blog id
    pub blog: Uuid,
    /// Commenter's user id
    pub user: Uuid,
    pub content: String,
    /// Parent comment id, for replies
    pub parent_comment: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            blog: comment.blog_id,
            user: comment.user_id,
            content: comment.content.clone(),
            parent_comment: comment.parent_comment_id,
            created_at: comment.created_at,
        }
    }
}

/// Comment as listed: commenter and parent inlined
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadEntry {
    pub id: Uuid,
    pub blog: Uuid,
    pub user: UserResponse,
    pub content: String,
    pub parent_comment: Option<CommentResponse>,
    pub created_at: DateTime<Utc>,
}

/// Response for a newly added comment
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CommentAddedResponse {
    pub message: String,
    pub comment: CommentResponse,
}
