//! Blog API integration tests

mod common;

use axum::http::StatusCode;
use axum_test::multipart::MultipartForm;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use common::*;

#[tokio::test]
async fn test_create_blog_requires_auth() {
    let app = TestApp::new().await;

    let form = MultipartForm::new()
        .add_text("title", "Hello")
        .add_text("description", "World")
        .add_part("blogImage", image_part("cover.png"));
    let response = app.server.post("/api/blogs").multipart(form).await;

    assert_message(&response, StatusCode::UNAUTHORIZED, "Not authorized, no token");
    assert_eq!(app.count("blogs").await, 0);
    assert_eq!(app.upload_count(), 0);
}

#[tokio::test]
async fn test_create_blog_success() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(&app).await;

    let form = MultipartForm::new()
        .add_text("title", "Hello")
        .add_text("description", "World")
        .add_part("blogImage", image_part("cover.jpg"));
    let response = app
        .server
        .post("/api/blogs")
        .authorization_bearer(&user.token)
        .multipart(form)
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], "Blog created successfully");

    let blog = &body["blog"];
    assert_eq!(blog["title"], "Hello");
    assert_eq!(blog["description"], "World");
    assert_eq!(blog["author"], user.id.to_string());
    assert!(blog["createdAt"].is_string());
    assert!(blog["updatedAt"].is_string());

    let image = blog["image"].as_str().unwrap();
    assert!(image.starts_with("/images/blogImage-"));
    assert!(image.ends_with(".jpg"));
    app.server.get(image).await.assert_status_ok();
}

#[tokio::test]
async fn test_create_blog_validation() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(&app).await;

    let form = MultipartForm::new()
        .add_text("title", "  ")
        .add_part("blogImage", image_part("cover.png"));
    let response = app
        .server
        .post("/api/blogs")
        .authorization_bearer(&user.token)
        .multipart(form)
        .await;

    assert_validation_errors(
        &response,
        &[
            ("title", "Title is required"),
            ("description", "Description is required"),
        ],
    );
    assert_eq!(app.upload_count(), 0);
}

#[tokio::test]
async fn test_create_blog_requires_image() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(&app).await;

    let form = MultipartForm::new()
        .add_text("title", "Hello")
        .add_text("description", "World");
    let response = app
        .server
        .post("/api/blogs")
        .authorization_bearer(&user.token)
        .multipart(form)
        .await;

    assert_message(&response, StatusCode::BAD_REQUEST, "Blog image is required");
    assert_eq!(app.count("blogs").await, 0);
}

#[tokio::test]
async fn test_list_blogs_inlines_authors_in_order() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice@example.com").await;
    let bob = create_test_user(&app, "bob@example.com").await;

    create_test_blog(&app, &alice.token, "first").await;
    create_test_blog(&app, &bob.token, "second").await;
    create_test_blog(&app, &alice.token, "third").await;

    let response = app.server.get("/api/blogs").await;
    response.assert_status_ok();

    let blogs: Vec<Value> = response.json();
    let summary: Vec<(&str, &str)> = blogs
        .iter()
        .map(|b| (b["title"].as_str().unwrap(), b["author"]["email"].as_str().unwrap()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("first", "alice@example.com"),
            ("second", "bob@example.com"),
            ("third", "alice@example.com"),
        ]
    );
    assert!(blogs[0]["author"]["profileImage"].is_null());
}

#[tokio::test]
async fn test_list_blogs_empty() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/blogs").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_get_blog_by_id() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(&app).await;
    let blog = create_test_blog(&app, &user.token, "Hello").await;

    let response = app
        .server
        .get(&format!("/api/blogs/{}", blog["id"].as_str().unwrap()))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["title"], "Hello");
    assert_eq!(body["author"]["id"], user.id.to_string());
    assert_eq!(body["author"]["email"], user.email);
}

#[tokio::test]
async fn test_get_blog_not_found() {
    let app = TestApp::new().await;

    let missing = app.server.get(&format!("/api/blogs/{}", Uuid::new_v4())).await;
    assert_message(&missing, StatusCode::NOT_FOUND, "Blog not found");

    let malformed = app.server.get("/api/blogs/not-an-id").await;
    assert_message(&malformed, StatusCode::NOT_FOUND, "Blog not found");
}

#[tokio::test]
async fn test_update_blog_keeps_omitted_fields() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(&app).await;
    let blog = create_test_blog(&app, &user.token, "Hello").await;
    let path = format!("/api/blogs/{}", blog["id"].as_str().unwrap());

    let response = app
        .server
        .put(&path)
        .authorization_bearer(&user.token)
        .json(&json!({ "title": "Renamed", "description": "" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Blog updated successfully");
    assert_eq!(body["blog"]["title"], "Renamed");
    assert_eq!(body["blog"]["description"], blog["description"]);
    assert_eq!(body["blog"]["image"], blog["image"]);
    assert_eq!(body["blog"]["createdAt"], blog["createdAt"]);

    let stored: Value = app.server.get(&path).await.json();
    assert_eq!(stored["title"], "Renamed");
}

#[tokio::test]
async fn test_update_blog_image_sources() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(&app).await;
    let blog = create_test_blog(&app, &user.token, "Hello").await;
    let path = format!("/api/blogs/{}", blog["id"].as_str().unwrap());

    // currentImage replaces the stored path when no file is sent
    let response = app
        .server
        .put(&path)
        .authorization_bearer(&user.token)
        .multipart(MultipartForm::new().add_text("currentImage", "/images/elsewhere.png"))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["blog"]["image"], "/images/elsewhere.png");

    // an uploaded file wins over currentImage
    let form = MultipartForm::new()
        .add_text("currentImage", "/images/ignored.png")
        .add_part("blogImage", image_part("new.gif"));
    let response = app
        .server
        .put(&path)
        .authorization_bearer(&user.token)
        .multipart(form)
        .await;
    response.assert_status_ok();
    let image = response.json::<Value>()["blog"]["image"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(image.starts_with("/images/blogImage-"));
    assert!(image.ends_with(".gif"));
}

#[tokio::test]
async fn test_update_blog_replaces_image_file() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(&app).await;
    let blog = create_test_blog(&app, &user.token, "Hello").await;
    let path = format!("/api/blogs/{}", blog["id"].as_str().unwrap());
    let old_image = app.upload_path(blog["image"].as_str().unwrap());
    assert_eq!(app.upload_count(), 1);

    let response = app
        .server
        .put(&path)
        .authorization_bearer(&user.token)
        .multipart(MultipartForm::new().add_part("blogImage", image_part("fresh.png")))
        .await;

    response.assert_status_ok();
    let new_image = response.json::<Value>()["blog"]["image"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(!old_image.exists());
    assert!(app.upload_path(&new_image).exists());
    assert_eq!(app.upload_count(), 1);
}

#[tokio::test]
async fn test_update_blog_keeps_image_used_elsewhere() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(&app).await;
    let first = create_test_blog(&app, &user.token, "First").await;
    let second = create_test_blog(&app, &user.token, "Second").await;
    let path = format!("/api/blogs/{}", second["id"].as_str().unwrap());
    let shared = first["image"].as_str().unwrap();

    // second now points at first's cover, so its own cover is released
    app.server
        .put(&path)
        .authorization_bearer(&user.token)
        .json(&json!({ "currentImage": shared }))
        .await
        .assert_status_ok();
    assert!(!app.upload_path(second["image"].as_str().unwrap()).exists());
    assert_eq!(app.upload_count(), 1);

    // replacing it again must leave first's cover alone
    app.server
        .put(&path)
        .authorization_bearer(&user.token)
        .multipart(MultipartForm::new().add_part("blogImage", image_part("fresh.png")))
        .await
        .assert_status_ok();
    assert!(app.upload_path(shared).exists());
    assert_eq!(app.upload_count(), 2);
}

#[tokio::test]
async fn test_failed_writes_leave_no_uploads() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(&app).await;
    let blog = create_test_blog(&app, &user.token, "Hello").await;
    let cover = app.upload_path(blog["image"].as_str().unwrap());

    sqlx::query("CREATE TRIGGER reject_blog_insert BEFORE INSERT ON blogs BEGIN SELECT RAISE(ABORT, 'rejected'); END")
        .execute(app.pool())
        .await
        .unwrap();
    sqlx::query("CREATE TRIGGER reject_blog_update BEFORE UPDATE ON blogs BEGIN SELECT RAISE(ABORT, 'rejected'); END")
        .execute(app.pool())
        .await
        .unwrap();

    let form = MultipartForm::new()
        .add_text("title", "Second")
        .add_text("description", "World")
        .add_part("blogImage", image_part("cover.png"));
    let response = app
        .server
        .post("/api/blogs")
        .authorization_bearer(&user.token)
        .multipart(form)
        .await;
    assert_message(&response, StatusCode::INTERNAL_SERVER_ERROR, "Server error");

    let response = app
        .server
        .put(&format!("/api/blogs/{}", blog["id"].as_str().unwrap()))
        .authorization_bearer(&user.token)
        .multipart(MultipartForm::new().add_part("blogImage", image_part("fresh.png")))
        .await;
    assert_message(&response, StatusCode::INTERNAL_SERVER_ERROR, "Server error");

    assert!(cover.exists());
    assert_eq!(app.upload_count(), 1);
}

#[tokio::test]
async fn test_update_blog_by_other_user() {
    let app = TestApp::new().await;
    let owner = create_test_user(&app, "owner@example.com").await;
    let other = create_test_user(&app, "other@example.com").await;
    let blog = create_test_blog(&app, &owner.token, "Mine").await;
    let path = format!("/api/blogs/{}", blog["id"].as_str().unwrap());

    let response = app
        .server
        .put(&path)
        .authorization_bearer(&other.token)
        .json(&json!({ "title": "Stolen" }))
        .await;

    assert_message(&response, StatusCode::UNAUTHORIZED, "User not authorized");
    let stored: Value = app.server.get(&path).await.json();
    assert_eq!(stored["title"], "Mine");
}

#[tokio::test]
async fn test_update_missing_blog() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(&app).await;

    let response = app
        .server
        .put(&format!("/api/blogs/{}", Uuid::new_v4()))
        .authorization_bearer(&user.token)
        .json(&json!({ "title": "Nothing" }))
        .await;

    assert_message(&response, StatusCode::NOT_FOUND, "Blog not found");
}

#[tokio::test]
async fn test_delete_blog_by_other_user() {
    let app = TestApp::new().await;
    let owner = create_test_user(&app, "owner@example.com").await;
    let other = create_test_user(&app, "other@example.com").await;
    let blog = create_test_blog(&app, &owner.token, "Mine").await;

    let response = app
        .server
        .delete(&format!("/api/blogs/{}", blog["id"].as_str().unwrap()))
        .authorization_bearer(&other.token)
        .await;

    assert_message(&response, StatusCode::UNAUTHORIZED, "User not authorized");
    assert_eq!(app.count("blogs").await, 1);
}

#[tokio::test]
async fn test_delete_blog_removes_comments_and_image() {
    let app = TestApp::new().await;
    let owner = create_unique_test_user(&app).await;
    let blog = create_test_blog(&app, &owner.token, "Doomed").await;
    let blog_id = blog["id"].as_str().unwrap();
    let image_path = app.upload_path(blog["image"].as_str().unwrap());

    app.server
        .post(&format!("/api/comments/{}", blog_id))
        .authorization_bearer(&owner.token)
        .json(&json!({ "content": "first!" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = app
        .server
        .delete(&format!("/api/blogs/{}", blog_id))
        .authorization_bearer(&owner.token)
        .await;

    assert_message(&response, StatusCode::OK, "Blog removed successfully");
    assert_eq!(app.count("blogs").await, 0);
    assert_eq!(app.count("comments").await, 0);
    assert!(!image_path.exists());

    let gone = app.server.get(&format!("/api/blogs/{}", blog_id)).await;
    assert_message(&gone, StatusCode::NOT_FOUND, "Blog not found");
}

#[tokio::test]
async fn test_delete_blog_keeps_shared_image() {
    let app = TestApp::new().await;
    let owner = create_unique_test_user(&app).await;
    let first = create_test_blog(&app, &owner.token, "First").await;
    let second = create_test_blog(&app, &owner.token, "Second").await;
    let shared = first["image"].as_str().unwrap();

    app.server
        .put(&format!("/api/blogs/{}", second["id"].as_str().unwrap()))
        .authorization_bearer(&owner.token)
        .json(&json!({ "currentImage": shared }))
        .await
        .assert_status_ok();

    app.server
        .delete(&format!("/api/blogs/{}", first["id"].as_str().unwrap()))
        .authorization_bearer(&owner.token)
        .await
        .assert_status_ok();

    assert!(app.upload_path(shared).exists());
}
