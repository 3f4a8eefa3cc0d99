/**
 * Authentication Extractor
 *
 * Protected handlers take an `AuthUser` argument. Extracting it:
 * 1. reads the `Authorization: Bearer <token>` header
 * 2. verifies the token signature and expiry
 * 3. checks that the user in the token still exists
 *
 * Any failure rejects the request with 401 before the handler runs, and
 * before the request body is read.
 */

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use uuid::Uuid;

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Rejection message when no bearer token was sent
pub const NO_TOKEN: &str = "Not authorized, no token";
/// Rejection message when the token is invalid, expired, or names an unknown user
pub const TOKEN_FAILED: &str = "Not authorized, token failed";

/// Authenticated user data extracted from JWT token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
    pub profile_image: Option<String>,
}

/// Axum extractor for authenticated user
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

/// Token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Resolve the caller from request headers
pub async fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<AuthenticatedUser, BackendError> {
    let token = bearer_token(headers).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        BackendError::unauthorized(NO_TOKEN)
    })?;

    let user_id = state.tokens.user_id_from_token(token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        BackendError::unauthorized(TOKEN_FAILED)
    })?;

    let user = get_user_by_id(&state.db_pool, user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token names unknown user: {}", user_id);
            BackendError::unauthorized(TOKEN_FAILED)
        })?;

    Ok(AuthenticatedUser {
        user_id: user.id,
        email: user.email,
        profile_image: user.profile_image,
    })
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        authenticate(&app_state, &parts.headers).await.map(AuthUser)
    }
}
