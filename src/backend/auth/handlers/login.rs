/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Read the JSON or URL-encoded body, then validate the email format
 *    and that a password was given
 * 2. Look up user by email
 * 3. Verify password using bcrypt
 * 4. Generate JWT token
 * 5. Return token and user info
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same response
 * - User passwords are never returned in responses
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse, UserResponse};
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::upload::UploadForm;
use crate::shared::Validator;

/// Message for unknown email or wrong password
pub const INVALID_CREDENTIALS: &str = "Invalid Credentials";

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - validation failure or invalid credentials
/// * `500 Internal Server Error` - database, verification or token failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "user@example.com", "password": "secret1" }
/// ```
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body(content = LoginRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 400, description = "Validation failed or invalid credentials", body = crate::backend::routes::docs::ErrorBody),
        (status = 500, description = "Server error", body = crate::backend::routes::docs::ErrorBody),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    form: UploadForm,
) -> Result<Json<LoginResponse>, BackendError> {
    let request = LoginRequest::from(&form);

    Validator::new()
        .email("email", Some(request.email.as_str()), "Please include a valid email")
        .required("password", Some(request.password.as_str()), "Password is required")
        .finish()?;

    tracing::info!("Login request for: {}", request.email);

    let user = get_user_by_email(&state.db_pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.email);
            BackendError::bad_request(INVALID_CREDENTIALS)
        })?;

    if !verify(&request.password, &user.password_hash)? {
        tracing::warn!("Invalid password for user: {}", request.email);
        return Err(BackendError::bad_request(INVALID_CREDENTIALS));
    }

    let token = state.tokens.create_token(user.id)?;

    tracing::info!("User logged in successfully: {}", user.email);

    Ok(Json(LoginResponse {
        message: "Logged in successfully".to_string(),
        token,
        user: UserResponse::from(&user),
    }))
}
