//! Database operations for comments

use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::comment::types::{Comment, CommentResponse, CommentThreadEntry};

/// Create a new comment
///
/// `parent_comment_id` is stored without checking that it exists.
pub async fn create_comment(
    pool: &SqlitePool,
    blog_id: Uuid,
    user_id: Uuid,
    content: &str,
    parent_comment_id: Option<Uuid>,
) -> Result<Comment, sqlx::Error> {
    let comment = Comment {
        id: Uuid::new_v4(),
        blog_id,
        user_id,
        content: content.to_string(),
        parent_comment_id,
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO comments (id, blog_id, user_id, content, parent_comment_id, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(comment.id)
    .bind(comment.blog_id)
    .bind(comment.user_id)
    .bind(&comment.content)
    .bind(comment.parent_comment_id)
    .bind(comment.created_at)
    .execute(pool)
    .await?;

    Ok(comment)
}

/// Check whether an insert failed because the blog (or user) it points at is gone
pub fn is_missing_reference(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_foreign_key_violation())
}

/// Comments on a blog, oldest first, with commenter and parent inlined
pub async fn list_for_blog(pool: &SqlitePool, blog_id: Uuid) -> Result<Vec<CommentThreadEntry>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT c.id, c.blog_id, c.content, c.created_at,
               u.id AS user_id, u.email AS user_email, u.profile_image AS user_profile_image,
               p.id AS parent_id, p.blog_id AS parent_blog_id, p.user_id AS parent_user_id,
               p.content AS parent_content, p.parent_comment_id AS parent_parent_id,
               p.created_at AS parent_created_at
        FROM comments c
        JOIN users u ON u.id = c.user_id
        LEFT JOIN comments p ON p.id = c.parent_comment_id
        WHERE c.blog_id = ?
        ORDER BY c.created_at ASC, c.rowid ASC
        "#,
    )
    .bind(blog_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(thread_entry).collect()
}

fn thread_entry(row: &SqliteRow) -> Result<CommentThreadEntry, sqlx::Error> {
    let parent_id: Option<Uuid> = row.try_get("parent_id")?;
    let parent_comment = match parent_id {
        Some(id) => Some(CommentResponse {
            id,
            blog: row.try_get("parent_blog_id")?,
            user: row.try_get("parent_user_id")?,
            content: row.try_get("parent_content")?,
            parent_comment: row.try_get("parent_parent_id")?,
            created_at: row.try_get("parent_created_at")?,
        }),
        None => None,
    };

    Ok(CommentThreadEntry {
        id: row.try_get("id")?,
        blog: row.try_get("blog_id")?,
        user: UserResponse {
            id: row.try_get("user_id")?,
            email: row.try_get("user_email")?,
            profile_image: row.try_get("user_profile_image")?,
        },
        content: row.try_get("content")?,
        parent_comment,
        created_at: row.try_get("created_at")?,
    })
}
