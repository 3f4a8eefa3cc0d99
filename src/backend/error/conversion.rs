/**
 * Error Conversion
 *
 * Converts backend errors into HTTP responses and maps axum extractor
 * rejections into backend errors so handlers can use `?` on them.
 *
 * # Response Format
 *
 * Validation failures:
 * ```json
 * { "errors": [ { "msg": "Title is required", "param": "title", "location": "body" } ] }
 * ```
 *
 * Every other error:
 * ```json
 * { "message": "Blog not found" }
 * ```
 *
 * Internal errors are logged and always answered with
 * `{ "message": "Server error" }`.
 */

use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::backend::error::types::BackendError;
use crate::shared::SharedError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_internal() {
            tracing::error!("Request failed: {}", self);
            return (status, Json(json!({ "message": "Server error" }))).into_response();
        }

        let body = match self {
            BackendError::SharedError(SharedError::ValidationError { errors }) => {
                tracing::debug!("Validation failed for {} field(s)", errors.len());
                json!({ "errors": errors })
            }
            other => json!({ "message": other.message() }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected JSON body: {}", rejection.body_text());
        BackendError::handler(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl From<FormRejection> for BackendError {
    fn from(rejection: FormRejection) -> Self {
        tracing::warn!("Rejected form body: {}", rejection.body_text());
        BackendError::handler(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl From<MultipartRejection> for BackendError {
    fn from(rejection: MultipartRejection) -> Self {
        tracing::warn!("Rejected multipart body: {}", rejection.body_text());
        BackendError::handler(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl From<MultipartError> for BackendError {
    fn from(err: MultipartError) -> Self {
        tracing::warn!("Malformed multipart stream: {}", err.body_text());
        BackendError::handler(err.status(), err.body_text())
    }
}
