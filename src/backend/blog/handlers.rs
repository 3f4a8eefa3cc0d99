/**
 * Blog Handlers
 *
 * HTTP handlers for `/api/blogs`.
 *
 * # Routes
 *
 * - `POST /api/blogs` - create (authenticated, multipart with `blogImage`)
 * - `GET /api/blogs` - list with authors inlined
 * - `GET /api/blogs/{id}` - read with author inlined
 * - `PUT /api/blogs/{id}` - update (author only)
 * - `DELETE /api/blogs/{id}` - delete (author only)
 *
 * # Ownership
 *
 * Update and delete first look the blog up (404 when missing) and then
 * compare its author with the caller (401 when they differ). Nothing is
 * written, uploaded images included, until both checks pass.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::backend::blog::db;
use crate::backend::blog::types::{Blog, BlogResponse, BlogSavedResponse, BlogWithAuthor, MessageResponse};
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::params::parse_id;
use crate::backend::server::state::AppState;
use crate::backend::upload::UploadForm;
use crate::shared::Validator;

pub const BLOG_NOT_FOUND: &str = "Blog not found";
pub const NOT_AUTHORIZED: &str = "User not authorized";
pub const IMAGE_REQUIRED: &str = "Blog image is required";

/// Form field carrying the cover image
pub const BLOG_IMAGE_FIELD: &str = "blogImage";

/// Create a blog owned by the caller
#[utoipa::path(
    post,
    path = "/api/blogs",
    tag = "blogs",
    request_body(content = crate::backend::routes::docs::BlogForm, content_type = "multipart/form-data"),
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Blog created", body = BlogSavedResponse),
        (status = 400, description = "Validation failed or image missing", body = crate::backend::routes::docs::ErrorBody),
        (status = 401, description = "Not authenticated", body = crate::backend::routes::docs::ErrorBody),
    )
)]
pub async fn create_blog(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    mut form: UploadForm,
) -> Result<(StatusCode, Json<BlogSavedResponse>), BackendError> {
    Validator::new()
        .required("title", form.text("title"), "Title is required")
        .required("description", form.text("description"), "Description is required")
        .finish()?;

    let file = form.take_file(BLOG_IMAGE_FIELD).ok_or_else(|| {
        tracing::warn!("Blog created without image by {}", user.email);
        BackendError::bad_request(IMAGE_REQUIRED)
    })?;
    let image = state.images.save(&file).await?;

    let blog = match db::create_blog(
        &state.db_pool,
        form.text("title").unwrap_or_default(),
        form.text("description").unwrap_or_default(),
        &image,
        user.user_id,
    )
    .await
    {
        Ok(blog) => blog,
        Err(e) => {
            discard_image(&state, &image).await;
            return Err(e.into());
        }
    };

    tracing::info!("Blog {} created by {}", blog.id, user.email);

    Ok((
        StatusCode::CREATED,
        Json(BlogSavedResponse {
            message: "Blog created successfully".to_string(),
            blog: BlogResponse::from(&blog),
        }),
    ))
}

/// List every blog, oldest first
#[utoipa::path(
    get,
    path = "/api/blogs",
    tag = "blogs",
    responses((status = 200, description = "All blogs", body = [BlogWithAuthor]))
)]
pub async fn get_blogs(State(state): State<AppState>) -> Result<Json<Vec<BlogWithAuthor>>, BackendError> {
    let blogs = db::list_blogs(&state.db_pool).await?;
    tracing::debug!("Listing {} blogs", blogs.len());
    Ok(Json(blogs))
}

/// Read one blog
#[utoipa::path(
    get,
    path = "/api/blogs/{id}",
    tag = "blogs",
    params(("id" = String, Path, description = "Blog id")),
    responses(
        (status = 200, description = "The blog", body = BlogWithAuthor),
        (status = 404, description = "Blog not found", body = crate::backend::routes::docs::ErrorBody),
    )
)]
pub async fn get_blog_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BlogWithAuthor>, BackendError> {
    let id = parse_id(&id, BLOG_NOT_FOUND)?;

    db::get_blog_with_author(&state.db_pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| BackendError::not_found(BLOG_NOT_FOUND))
}

/// Update a blog the caller owns
///
/// Blank or missing `title`/`description` keep the stored values. The image
/// is a new `blogImage` upload if present, else a non-empty `currentImage`
/// field, else the stored image.
#[utoipa::path(
    put,
    path = "/api/blogs/{id}",
    tag = "blogs",
    params(("id" = String, Path, description = "Blog id")),
    request_body(content = crate::backend::routes::docs::BlogUpdateForm, content_type = "multipart/form-data"),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Blog updated", body = BlogSavedResponse),
        (status = 401, description = "Not authenticated or not the author", body = crate::backend::routes::docs::ErrorBody),
        (status = 404, description = "Blog not found", body = crate::backend::routes::docs::ErrorBody),
    )
)]
pub async fn update_blog(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    mut form: UploadForm,
) -> Result<Json<BlogSavedResponse>, BackendError> {
    let id = parse_id(&id, BLOG_NOT_FOUND)?;
    let mut blog = owned_blog(&state, id, user.user_id).await?;

    let uploaded = match form.take_file(BLOG_IMAGE_FIELD) {
        Some(file) => Some(state.images.save(&file).await?),
        None => None,
    };
    let image = uploaded
        .clone()
        .or_else(|| form.non_empty("currentImage").map(str::to_string));
    let previous_image = blog.image.clone();

    if let Some(title) = form.non_empty("title") {
        blog.title = title.to_string();
    }
    if let Some(description) = form.non_empty("description") {
        blog.description = description.to_string();
    }
    if let Some(image) = image {
        blog.image = image;
    }
    blog.updated_at = Utc::now();

    if let Err(e) = db::update_blog(&state.db_pool, &blog).await {
        if let Some(uploaded) = &uploaded {
            discard_image(&state, uploaded).await;
        }
        return Err(e.into());
    }

    tracing::info!("Blog {} updated by {}", blog.id, user.email);

    if previous_image != blog.image {
        release_image(&state, &previous_image).await?;
    }

    Ok(Json(BlogSavedResponse {
        message: "Blog updated successfully".to_string(),
        blog: BlogResponse::from(&blog),
    }))
}

/// Delete a blog the caller owns, with its comments
///
/// The cover image file is removed too once nothing references it.
#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    tag = "blogs",
    params(("id" = String, Path, description = "Blog id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Blog removed", body = MessageResponse),
        (status = 401, description = "Not authenticated or not the author", body = crate::backend::routes::docs::ErrorBody),
        (status = 404, description = "Blog not found", body = crate::backend::routes::docs::ErrorBody),
    )
)]
pub async fn delete_blog(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    let id = parse_id(&id, BLOG_NOT_FOUND)?;
    let blog = owned_blog(&state, id, user.user_id).await?;

    if !db::delete_blog(&state.db_pool, blog.id).await? {
        return Err(BackendError::not_found(BLOG_NOT_FOUND));
    }
    tracing::info!("Blog {} removed by {}", blog.id, user.email);

    release_image(&state, &blog.image).await?;

    Ok(Json(MessageResponse {
        message: "Blog removed successfully".to_string(),
    }))
}

/// Load a blog and check that `user_id` wrote it
async fn owned_blog(state: &AppState, id: Uuid, user_id: Uuid) -> Result<Blog, BackendError> {
    let blog = db::get_blog(&state.db_pool, id)
        .await?
        .ok_or_else(|| BackendError::not_found(BLOG_NOT_FOUND))?;

    if blog.author_id != user_id {
        tracing::warn!("User {} is not the author of blog {}", user_id, blog.id);
        return Err(BackendError::unauthorized(NOT_AUTHORIZED));
    }

    Ok(blog)
}

/// Remove an image file once no blog or user references it
async fn release_image(state: &AppState, image: &str) -> Result<(), BackendError> {
    if !db::image_in_use(&state.db_pool, image).await? {
        discard_image(state, image).await;
    }
    Ok(())
}

/// Remove an image file, logging failures
async fn discard_image(state: &AppState, image: &str) {
    match state.images.remove(image).await {
        Ok(true) => tracing::debug!("Removed image {}", image),
        Ok(false) => {}
        Err(e) => tracing::warn!("Failed to remove image {}: {}", image, e),
    }
}
