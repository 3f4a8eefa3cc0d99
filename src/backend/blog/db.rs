//! Database operations for blogs
//!
//! Listing order is creation time, with `rowid` breaking ties between blogs
//! created within the same timestamp.

use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::blog::types::{Blog, BlogWithAuthor};

const SELECT_WITH_AUTHOR: &str = r#"
    SELECT b.id, b.title, b.description, b.image, b.created_at, b.updated_at,
           u.id AS author_id, u.email AS author_email, u.profile_image AS author_profile_image
    FROM blogs b
    JOIN users u ON u.id = b.author_id
"#;

/// Create a new blog
pub async fn create_blog(
    pool: &SqlitePool,
    title: &str,
    description: &str,
    image: &str,
    author_id: Uuid,
) -> Result<Blog, sqlx::Error> {
    let now = Utc::now();
    let blog = Blog {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        author_id,
        created_at: now,
        updated_at: now,
    };

    sqlx::query(
        r#"
        INSERT INTO blogs (id, title, description, image, author_id, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(blog.id)
    .bind(&blog.title)
    .bind(&blog.description)
    .bind(&blog.image)
    .bind(blog.author_id)
    .bind(blog.created_at)
    .bind(blog.updated_at)
    .execute(pool)
    .await?;

    Ok(blog)
}

/// Get a blog row by id
pub async fn get_blog(pool: &SqlitePool, id: Uuid) -> Result<Option<Blog>, sqlx::Error> {
    sqlx::query_as::<_, Blog>(
        r#"
        SELECT id, title, description, image, author_id, created_at, updated_at
        FROM blogs
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// All blogs in creation order, authors inlined
pub async fn list_blogs(pool: &SqlitePool) -> Result<Vec<BlogWithAuthor>, sqlx::Error> {
    let query = format!("{} ORDER BY b.created_at ASC, b.rowid ASC", SELECT_WITH_AUTHOR);
    let rows = sqlx::query(&query).fetch_all(pool).await?;

    rows.iter().map(blog_with_author).collect()
}

/// One blog with its author inlined
pub async fn get_blog_with_author(pool: &SqlitePool, id: Uuid) -> Result<Option<BlogWithAuthor>, sqlx::Error> {
    let query = format!("{} WHERE b.id = ?", SELECT_WITH_AUTHOR);
    let row = sqlx::query(&query).bind(id).fetch_optional(pool).await?;

    row.as_ref().map(blog_with_author).transpose()
}

/// Write title, description, image and `updated_at` of `blog` back
pub async fn update_blog(pool: &SqlitePool, blog: &Blog) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE blogs
        SET title = ?, description = ?, image = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&blog.title)
    .bind(&blog.description)
    .bind(&blog.image)
    .bind(blog.updated_at)
    .bind(blog.id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a blog and, through the cascade, its comments
///
/// Returns `false` if no blog had that id.
pub async fn delete_blog(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM blogs WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// True if any blog or user still points at the image path
pub async fn image_in_use(pool: &SqlitePool, image: &str) -> Result<bool, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT EXISTS(SELECT 1 FROM blogs WHERE image = ?)
            OR EXISTS(SELECT 1 FROM users WHERE profile_image = ?) AS in_use
        "#,
    )
    .bind(image)
    .bind(image)
    .fetch_one(pool)
    .await?;

    row.try_get::<bool, _>("in_use")
}

fn blog_with_author(row: &SqliteRow) -> Result<BlogWithAuthor, sqlx::Error> {
    Ok(BlogWithAuthor {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        image: row.try_get("image")?,
        author: UserResponse {
            id: row.try_get("author_id")?,
            email: row.try_get("author_email")?,
            profile_image: row.try_get("author_profile_image")?,
        },
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
