use thiserror::Error;

pub type GhupResult<T> = Result<T, GhupError>;

#[derive(Error, Debug)]
pub enum GhupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Credential error: {0}")]
    Credential(String),

    /// A required field is missing or malformed. Raised before any network I/O.
    #[error("{0}")]
    Validation(String),

    /// GitHub answered with something other than 201 Created.
    #[error("GitHub API error (HTTP {status}): {message}")]
    Upstream { status: u16, message: String },

    /// The request never got an HTTP answer (DNS, TLS, connect, timeout).
    #[error("Failed to reach GitHub: {0}")]
    Transport(String),
}

impl GhupError {
    pub fn validation(message: impl Into<String>) -> Self {
        GhupError::Validation(message.into())
    }

    /// `Field <name> is required`, shared by every front-end.
    pub fn missing_field(field: &str) -> Self {
        GhupError::Validation(format!("Field {} is required", field))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, GhupError::Validation(_))
    }

    /// HTTP status of the upstream failure, if GitHub answered at all.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            GhupError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message that may be shown to a remote caller.
    ///
    /// Only validation text and GitHub's own message pass through; everything
    /// else collapses to a fixed string so local details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            GhupError::Validation(message) => message.clone(),
            GhupError::Upstream { message, .. } => message.clone(),
            GhupError::Transport(_) => "Failed to reach GitHub".to_string(),
            GhupError::Io(_) => "File upload error".to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}
