//! The upload operation shared by every front-end
//!
//! A front-end collects an [`UploadForm`], then calls [`upload`] with a
//! [`ContentsProvider`]:
//! - the form is validated first, so missing fields never reach the network
//! - the file is base64-encoded and sent in a single `PUT` to the contents API
//! - a 201 yields the file and download URLs, anything else an error carrying
//!   GitHub's own message

pub mod client;
pub mod request;
pub mod token;
pub mod types;

pub use client::{ClientSettings, ContentsClient, ContentsProvider};
pub use request::{FileInput, UploadForm, UploadRequest, DEFAULT_BRANCH};
pub use token::GitHubToken;
pub use types::{UploadResponse, UploadedFile};

use crate::core::GhupResult;

/// Validate `form` and create the file through `provider`. One attempt, no retry.
pub async fn upload(provider: &dyn ContentsProvider, form: UploadForm) -> GhupResult<UploadedFile> {
    let request = form.validate()?;

    tracing::info!(
        owner = request.owner(),
        repo = request.repo(),
        branch = request.branch(),
        path = request.path(),
        bytes = request.content().len(),
        "Uploading file to GitHub"
    );

    match provider.create_file(&request).await {
        Ok(file) => {
            tracing::info!(url = %file.html_url, "Upload complete");
            Ok(file)
        }
        Err(e) => {
            tracing::warn!("Upload failed: {}", e);
            Err(e)
        }
    }
}
