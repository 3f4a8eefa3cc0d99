/**
 * Blog Types
 *
 * Database row and response shapes for blog posts. Responses come in two
 * flavours: `BlogResponse` carries the author as an id (create and update),
 * `BlogWithAuthor` inlines the author summary (list and read).
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::backend::auth::handlers::types::UserResponse;

/// Blog row as stored in the `blogs` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Public path of the cover image
    pub image: String,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Blog with the author as a bare id
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    /// Author's user id
    pub author: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Blog> for BlogResponse {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id,
            title: blog.title.clone(),
            description: blog.description.clone(),
            image: blog.image.clone(),
            author: blog.author_id,
            created_at: blog.created_at,
            updated_at: blog.updated_at,
        }
    }
}

/// Blog with the author summary inlined
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogWithAuthor {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
    pub author: UserResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response for create and update
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct BlogSavedResponse {
    pub message: String,
    pub blog: BlogResponse,
}

/// Plain `{"message": ...}` acknowledgement
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
