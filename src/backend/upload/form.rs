/**
 * Upload Form Extractor
 *
 * Endpoints that accept an image also accept plain fields, and clients send
 * them either as `multipart/form-data` (with or without a file part), as
 * JSON, or URL-encoded. `UploadForm` reads any of the three into one shape:
 * a map of text fields plus a map of uploaded files keyed by field name.
 *
 * Requests without a recognised content type produce an empty form, which
 * then fails validation like any other missing input.
 */

use std::collections::HashMap;

use axum::{
    extract::{Form, FromRequest, Json, Multipart, Request},
    http::header::CONTENT_TYPE,
};
use bytes::Bytes;

use crate::backend::error::BackendError;

/// A file part received in a multipart request
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Form field the file was sent under
    pub field: String,
    /// Client-supplied file name
    pub file_name: String,
    /// Client-supplied content type
    pub content_type: Option<String>,
    /// File contents
    pub data: Bytes,
}

/// Text fields and files of a form submission
#[derive(Debug, Default)]
pub struct UploadForm {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl UploadForm {
    /// Raw value of a text field
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Value of a text field, or `None` if it is missing or blank
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.text(name).filter(|v| !v.trim().is_empty())
    }

    /// Remove and return the file sent under `name`
    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self, BackendError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let content_type = field.content_type().map(str::to_string);
                    let data = field.bytes().await?;
                    // browsers send an empty part when no file was picked
                    if file_name.is_empty() && data.is_empty() {
                        continue;
                    }
                    form.files.insert(
                        name.clone(),
                        UploadedFile {
                            field: name,
                            file_name,
                            content_type,
                            data,
                        },
                    );
                }
                None => {
                    let value = field.text().await?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }

    fn from_json(values: HashMap<String, serde_json::Value>) -> Self {
        let fields = values
            .into_iter()
            .filter_map(|(name, value)| match value {
                serde_json::Value::String(s) => Some((name, s)),
                serde_json::Value::Number(n) => Some((name, n.to_string())),
                serde_json::Value::Bool(b) => Some((name, b.to_string())),
                _ => None,
            })
            .collect();

        Self {
            fields,
            files: HashMap::new(),
        }
    }
}

impl<S> FromRequest<S> for UploadForm
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state).await?;
            Self::from_multipart(multipart).await
        } else if content_type.starts_with("application/json") {
            let Json(values) = Json::<HashMap<String, serde_json::Value>>::from_request(req, state).await?;
            Ok(Self::from_json(values))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state).await?;
            Ok(Self {
                fields,
                files: HashMap::new(),
            })
        } else {
            tracing::debug!("No form body (content type: {:?})", content_type);
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;

    async fn extract(content_type: &str, body: impl Into<Body>) -> Result<UploadForm, BackendError> {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, content_type)
            .body(body.into())
            .unwrap();
        UploadForm::from_request(request, &()).await
    }

    #[tokio::test]
    async fn test_json_body() {
        let form = extract(
            "application/json",
            r#"{"title":"Hello","views":3,"draft":false,"tags":["a"],"missing":null}"#,
        )
        .await
        .unwrap();

        assert_eq!(form.text("title"), Some("Hello"));
        assert_eq!(form.text("views"), Some("3"));
        assert_eq!(form.text("draft"), Some("false"));
        assert_eq!(form.text("tags"), None);
        assert_eq!(form.text("missing"), None);
    }

    #[tokio::test]
    async fn test_urlencoded_body() {
        let form = extract("application/x-www-form-urlencoded", "email=a%40b.co&password=secret1")
            .await
            .unwrap();
        assert_eq!(form.text("email"), Some("a@b.co"));
        assert_eq!(form.non_empty("password"), Some("secret1"));
    }

    #[tokio::test]
    async fn test_multipart_body() {
        let body = concat!(
            "--XBOUNDARY\r\n",
            "Content-Disposition: form-data; name=\"title\"\r\n\r\n",
            "Hello\r\n",
            "--XBOUNDARY\r\n",
            "Content-Disposition: form-data; name=\"blogImage\"; filename=\"cat.png\"\r\n",
            "Content-Type: image/png\r\n\r\n",
            "PNGDATA\r\n",
            "--XBOUNDARY\r\n",
            "Content-Disposition: form-data; name=\"profileImage\"; filename=\"\"\r\n",
            "Content-Type: application/octet-stream\r\n\r\n",
            "\r\n",
            "--XBOUNDARY--\r\n",
        );

        let mut form = extract("multipart/form-data; boundary=XBOUNDARY", body).await.unwrap();
        assert_eq!(form.text("title"), Some("Hello"));
        assert!(form.take_file("profileImage").is_none());

        let file = form.take_file("blogImage").unwrap();
        assert_eq!(file.file_name, "cat.png");
        assert_eq!(file.content_type.as_deref(), Some("image/png"));
        assert_eq!(&file.data[..], b"PNGDATA");
        assert!(form.take_file("blogImage").is_none());
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let err = extract("application/json", "{ nope").await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_content_type_is_empty() {
        let form = extract("text/plain", "whatever").await.unwrap();
        assert_eq!(form.non_empty("title"), None);
    }
}
