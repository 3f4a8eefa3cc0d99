/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the auth and
 * users handlers.
 */

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::upload::UploadForm;

/// Login request
///
/// Read from a JSON or URL-encoded body. Missing fields become empty
/// strings and are reported by validation.
#[derive(Deserialize, Serialize, Debug, Default, ToSchema)]
pub struct LoginRequest {
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// User's password (verified against stored hash)
    #[serde(default)]
    pub password: String,
}

impl From<&UploadForm> for LoginRequest {
    fn from(form: &UploadForm) -> Self {
        Self {
            email: form.text("email").unwrap_or_default().to_string(),
            password: form.text("password").unwrap_or_default().to_string(),
        }
    }
}

/// Signup response
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct SignupResponse {
    pub message: String,
    pub user: UserResponse,
}

/// Login response
///
/// Contains the JWT token and user information.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    /// JWT token for authentication
    pub token: String,
    /// User information (without sensitive data)
    pub user: UserResponse,
}

/// User response (without sensitive data)
///
/// Also used wherever a user is inlined into a blog or comment.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User's unique ID
    pub id: Uuid,
    /// User's email address
    pub email: String,
    /// Public path of the profile image
    pub profile_image: Option<String>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            profile_image: user.profile_image.clone(),
        }
    }
}
