//! Contents API payloads and the result envelope shared by the front-ends

use serde::{Deserialize, Serialize};

/// Body of `PUT /repos/{owner}/{repo}/contents/{path}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentsRequest {
    pub message: String,
    /// Base64-encoded file content
    pub content: String,
    pub branch: String,
}

/// 201 Created response (only the parts we read)
#[derive(Debug, Clone, Deserialize)]
pub struct ContentsResponse {
    pub content: ContentsFile,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentsFile {
    pub html_url: String,
    pub download_url: String,
}

/// Error body GitHub returns with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubErrorBody {
    pub message: Option<String>,
}

/// A file GitHub confirmed as created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub html_url: String,
    pub download_url: String,
}

impl From<ContentsResponse> for UploadedFile {
    fn from(response: ContentsResponse) -> Self {
        Self {
            html_url: response.content.html_url,
            download_url: response.content.download_url,
        }
    }
}

/// `{success, url?, download_url?, error?}` as returned by the form-submit server
/// and printed by `ghup upload --json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadResponse {
    pub fn success(file: &UploadedFile) -> Self {
        Self {
            success: true,
            url: Some(file.html_url.clone()),
            download_url: Some(file.download_url.clone()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            url: None,
            download_url: None,
            error: Some(error.into()),
        }
    }
}
