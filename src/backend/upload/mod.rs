//! Upload Module
//!
//! Receiving and storing image uploads.
//!
//! - **`form`** - `UploadForm` extractor reading multipart, JSON or
//!   URL-encoded bodies into text fields and files
//! - **`store`** - `ImageStore` writing accepted images to the upload
//!   directory served under `/images`

pub mod form;
pub mod store;

pub use form::{UploadForm, UploadedFile};
pub use store::{ImageStore, PUBLIC_PREFIX};
