//! Response assertions
//!
//! Error bodies come in two shapes: `{"message": ...}` and
//! `{"errors": [{"msg", "param", "location"}]}`.

use axum::http::StatusCode;
use axum_test::TestResponse;
use serde_json::Value;

/// Assert the status and the `message` of an error response
pub fn assert_message(response: &TestResponse, status: StatusCode, message: &str) {
    response.assert_status(status);
    let body: Value = response.json();
    assert_eq!(body["message"], message, "unexpected body: {body}");
}

/// Assert a 400 validation response reporting exactly `expected` as (param, msg)
pub fn assert_validation_errors(response: &TestResponse, expected: &[(&str, &str)]) {
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    let errors = body["errors"].as_array().expect("no errors array");

    let actual: Vec<(&str, &str)> = errors
        .iter()
        .map(|e| {
            assert_eq!(e["location"], "body");
            (
                e["param"].as_str().unwrap_or_default(),
                e["msg"].as_str().unwrap_or_default(),
            )
        })
        .collect();
    assert_eq!(actual, expected);
}
