/**
 * Image Store
 *
 * Writes accepted image uploads into the upload directory under a generated
 * name and hands back the public path they are served from (`/images/...`).
 */

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::upload::form::UploadedFile;

/// URL prefix the upload directory is served under
pub const PUBLIC_PREFIX: &str = "/images";

/// Accepted image extensions
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

const REJECTED_MESSAGE: &str = "Images only (jpg, jpeg, png, gif, webp)";

/// Directory-backed store for uploaded images
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory files are written to
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the upload directory if it is missing
    pub async fn ensure_root(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }

    /// Persist `file` and return its public path
    ///
    /// Non-image files are rejected with 400 before anything is written.
    pub async fn save(&self, file: &UploadedFile) -> Result<String, BackendError> {
        let extension = image_extension(file)?;

        let prefix: String = file
            .field
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        let name = format!("{}-{}.{}", prefix, Uuid::new_v4().simple(), extension);

        self.ensure_root().await?;
        tokio::fs::write(self.root.join(&name), &file.data).await?;

        tracing::debug!("Stored upload {} ({} bytes) as {}", file.file_name, file.data.len(), name);
        Ok(format!("{}/{}", PUBLIC_PREFIX, name))
    }

    /// Map a public path produced by [`ImageStore::save`] back to the file on disk
    pub fn path_for(&self, public_path: &str) -> Option<PathBuf> {
        let name = public_path.strip_prefix(PUBLIC_PREFIX)?.strip_prefix('/')?;
        if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
            return None;
        }
        Some(self.root.join(name))
    }

    /// Delete the file behind a public path
    ///
    /// Returns `false` when the path is not one of ours or the file is
    /// already gone.
    pub async fn remove(&self, public_path: &str) -> std::io::Result<bool> {
        let Some(path) = self.path_for(public_path) else {
            return Ok(false);
        };
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// Validate that `file` looks like an image and return its normalised extension
pub fn image_extension(file: &UploadedFile) -> Result<&'static str, BackendError> {
    let declared_image = file
        .content_type
        .as_deref()
        .map_or(true, |ct| ct.to_ascii_lowercase().starts_with("image/"));

    let extension = file
        .file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .and_then(|ext| ALLOWED_EXTENSIONS.iter().copied().find(|allowed| *allowed == ext));

    match extension {
        Some(ext) if declared_image => Ok(ext),
        _ => {
            tracing::warn!(
                "Rejected upload {} ({:?})",
                file.file_name,
                file.content_type
            );
            Err(BackendError::bad_request(REJECTED_MESSAGE))
        }
    }
}
