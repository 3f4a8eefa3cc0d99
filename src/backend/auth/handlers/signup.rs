/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate email format and password length
 * 2. Check if user already exists
 * 3. Store the profile image, if one was uploaded
 * 4. Hash password using bcrypt
 * 5. Create user in database
 * 6. Return the user summary (no token; clients log in afterwards)
 *
 * # Validation
 *
 * - Email must be a valid address
 * - Password must be at least 6 characters long
 * - Email must be unique (no existing user with same email)
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::hash;

use crate::backend::auth::handlers::types::{SignupResponse, UserResponse};
use crate::backend::auth::users::{create_user, get_user_by_email, is_duplicate_email};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::upload::UploadForm;
use crate::shared::Validator;

/// Message for an already registered email
pub const USER_EXISTS: &str = "User already exists";

/// Form field carrying the optional profile image
pub const PROFILE_IMAGE_FIELD: &str = "profileImage";

/// Sign up handler
///
/// Accepts `multipart/form-data` (with an optional `profileImage` file),
/// JSON, or URL-encoded fields `email` and `password`.
///
/// # Errors
///
/// * `400 Bad Request` - validation failure, non-image upload, or email already registered
/// * `500 Internal Server Error` - hashing, storage or database failure
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "auth",
    request_body(content = crate::backend::routes::docs::SignupForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "User registered", body = SignupResponse),
        (status = 400, description = "Validation failed or user already exists", body = crate::backend::routes::docs::ErrorBody),
        (status = 500, description = "Server error", body = crate::backend::routes::docs::ErrorBody),
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    mut form: UploadForm,
) -> Result<(StatusCode, Json<SignupResponse>), BackendError> {
    Validator::new()
        .email("email", form.text("email"), "Please include a valid email")
        .min_length("password", form.text("password"), 6, "Password must be 6 or more characters")
        .finish()?;

    let email = form.text("email").unwrap_or_default().to_string();
    let password = form.text("password").unwrap_or_default().to_string();
    tracing::info!("Signup request for email: {}", email);

    if get_user_by_email(&state.db_pool, &email).await?.is_some() {
        tracing::warn!("Email already exists: {}", email);
        return Err(BackendError::bad_request(USER_EXISTS));
    }

    let profile_image = match form.take_file(PROFILE_IMAGE_FIELD) {
        Some(file) => Some(state.images.save(&file).await?),
        None => None,
    };

    let password_hash = hash(&password, state.bcrypt_cost)?;

    let user = create_user(&state.db_pool, &email, &password_hash, profile_image.as_deref())
        .await
        .map_err(|e| {
            if is_duplicate_email(&e) {
                tracing::warn!("Email registered concurrently: {}", email);
                BackendError::bad_request(USER_EXISTS)
            } else {
                e.into()
            }
        })?;

    tracing::info!("User created successfully: {} ({})", user.email, user.id);

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User registered successfully".to_string(),
            user: UserResponse::from(&user),
        }),
    ))
}
