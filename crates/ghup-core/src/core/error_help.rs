//! Human-facing suggestions attached to errors printed by the CLI.

use crate::core::error::GhupError;

/// Suggests what the user can do about an error.
pub trait ErrorHelp {
    fn help(&self) -> Option<String>;
}

impl ErrorHelp for GhupError {
    fn help(&self) -> Option<String> {
        match self {
            GhupError::Upstream { status, .. } => match status {
                401 => Some(
                    "GitHub rejected the token. Run 'ghup login' again or pass --token."
                        .to_string(),
                ),
                403 => Some(
                    "The token is valid but lacks permission. It needs 'contents: write' on this repository."
                        .to_string(),
                ),
                404 => Some(
                    "Repository or branch not found, or not visible to this token. Check --owner, --repo and --branch."
                        .to_string(),
                ),
                409 | 422 => Some(
                    "A file probably already exists at this path on this branch. Overwriting is not supported; choose another --path."
                        .to_string(),
                ),
                _ => None,
            },
            GhupError::Transport(_) => {
                Some("Check your network connection and --api-url.".to_string())
            }
            GhupError::Validation(message) if message.contains("githubToken") => Some(
                "Pass --token, set GITHUB_TOKEN, or store one with 'ghup login'.".to_string(),
            ),
            GhupError::Credential(_) => Some(
                "The OS keychain is unavailable. Pass --token or set GITHUB_TOKEN instead."
                    .to_string(),
            ),
            GhupError::Yaml(_) | GhupError::Config(_) => {
                Some("Run 'ghup config clear' to reset the config file.".to_string())
            }
            _ => None,
        }
    }
}

/// Render an error with its suggestion, if any.
pub fn format_error_with_help(error: &GhupError) -> String {
    match error.help() {
        Some(help) => format!("error: {}\n  help: {}", error, help),
        None => format!("error: {}", error),
    }
}
