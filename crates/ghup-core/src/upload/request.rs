use crate::core::{GhupError, GhupResult};
use crate::upload::token::GitHubToken;
use crate::upload::types::ContentsRequest;
use base64::Engine;
use std::path::Path;

/// Branch used when the caller leaves it blank
pub const DEFAULT_BRANCH: &str = "main";

/// The file as received from the user: original name plus raw bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInput {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl FileInput {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a local file, keeping its file name as the default repository path
    pub fn read(path: &Path) -> GhupResult<Self> {
        let name = path
            .file_name()
            .ok_or_else(|| GhupError::Path(format!("Not a file: {}", path.display())))?
            .to_str()
            .ok_or_else(|| {
                GhupError::Path(format!(
                    "File name is not valid UTF-8: {}",
                    path.display()
                ))
            })?
            .to_string();

        let bytes = std::fs::read(path).map_err(|e| {
            GhupError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", path.display(), e),
            ))
        })?;

        Ok(Self { name, bytes })
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Unvalidated input collected by a front-end.
///
/// Blank strings are treated the same as missing ones.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub token: Option<String>,
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub branch: Option<String>,
    pub path: Option<String>,
    pub commit_message: Option<String>,
    pub file: Option<FileInput>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn required(value: &Option<String>, field: &str) -> GhupResult<String> {
    present(value)
        .map(str::to_string)
        .ok_or_else(|| GhupError::missing_field(field))
}

impl UploadForm {
    /// Check every field and build the request. Performs no I/O.
    pub fn validate(self) -> GhupResult<UploadRequest> {
        let file = self.file.ok_or_else(|| GhupError::missing_field("file"))?;

        let token = present(&self.token).ok_or_else(|| GhupError::missing_field("githubToken"))?;
        let token = GitHubToken::parse(token)?;

        let owner = required(&self.owner, "githubUser")?;
        let repo = required(&self.repo, "githubRepo")?;
        let commit_message = required(&self.commit_message, "commitMessage")?;

        let branch = present(&self.branch).unwrap_or(DEFAULT_BRANCH).to_string();

        // The file name is used verbatim, only explicit paths are normalized
        let path = match present(&self.path) {
            Some(path) => path.trim_start_matches('/').to_string(),
            None => file.name.clone(),
        };
        if path.is_empty() {
            return Err(GhupError::missing_field("filePath"));
        }

        Ok(UploadRequest {
            token,
            owner,
            repo,
            branch,
            path,
            commit_message,
            content: file.bytes,
        })
    }
}

/// A validated, immutable upload. Built once per submission.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    token: GitHubToken,
    owner: String,
    repo: String,
    branch: String,
    path: String,
    commit_message: String,
    content: Vec<u8>,
}

impl UploadRequest {
    pub fn token(&self) -> &GitHubToken {
        &self.token
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Repository path, unescaped
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn commit_message(&self) -> &str {
        &self.commit_message
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Repository path escaped for use in the URL, one segment at a time
    pub fn contents_path(&self) -> String {
        self.path
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Standard (padded) base64 of the file content
    pub fn encoded_content(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.content)
    }

    pub fn body(&self) -> ContentsRequest {
        ContentsRequest {
            message: self.commit_message.clone(),
            content: self.encoded_content(),
            branch: self.branch.clone(),
        }
    }
}
