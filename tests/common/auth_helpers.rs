//! Authentication test helpers
//!
//! Provides utilities for creating test users and tokens, either straight
//! through the store or through the HTTP API.

use axum_test::multipart::{MultipartForm, Part};
use serde_json::{json, Value};
use uuid::Uuid;

use inkpost::backend::auth::users::create_user;

use super::database::{TestApp, PNG_BYTES, TEST_BCRYPT_COST};

/// Password every helper-created user has
pub const TEST_PASSWORD: &str = "password123";

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Create a test user in the database and issue a token for it
pub async fn create_test_user(app: &TestApp, email: &str) -> TestUser {
    let password_hash = bcrypt::hash(TEST_PASSWORD, TEST_BCRYPT_COST).expect("Failed to hash password");
    let user = create_user(app.pool(), email, &password_hash, None)
        .await
        .expect("Failed to create test user");
    let token = app
        .state
        .tokens
        .create_token(user.id)
        .expect("Failed to create test token");

    TestUser {
        id: user.id,
        email: user.email,
        password: TEST_PASSWORD.to_string(),
        token,
    }
}

/// Create a test user with a unique email
pub async fn create_unique_test_user(app: &TestApp) -> TestUser {
    let email = format!("test_{}@example.com", Uuid::new_v4().simple());
    create_test_user(app, &email).await
}

/// Log in through the API and return the token
pub async fn login_token(app: &TestApp, email: &str, password: &str) -> String {
    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "email": email, "password": password }))
        .await;
    response.assert_status_ok();

    response.json::<Value>()["token"]
        .as_str()
        .expect("login response without token")
        .to_string()
}

/// Image part for multipart uploads
pub fn image_part(file_name: &str) -> Part {
    Part::bytes(PNG_BYTES).file_name(file_name).mime_type("image/png")
}

/// Create a blog through the API and return the `blog` object
pub async fn create_test_blog(app: &TestApp, token: &str, title: &str) -> Value {
    let form = MultipartForm::new()
        .add_text("title", title)
        .add_text("description", format!("About {}", title))
        .add_part("blogImage", image_part("cover.png"));

    let response = app
        .server
        .post("/api/blogs")
        .authorization_bearer(token)
        .multipart(form)
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    response.json::<Value>()["blog"].clone()
}
