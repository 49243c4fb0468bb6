//! GitHub token handling

use crate::core::{GhupError, GhupResult};
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::sync::LazyLock;

/// Prefixes GitHub puts in front of the tokens it issues.
///
/// `ghp_` classic personal access token, `github_pat_` fine-grained token,
/// `gho_` OAuth, `ghu_` user-to-server, `ghs_` server-to-server, `ghr_` refresh.
pub const TOKEN_PREFIXES: [&str; 6] = ["ghp_", "github_pat_", "gho_", "ghu_", "ghs_", "ghr_"];

static TOKEN_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(ghp|github_pat|gho|ghu|ghs|ghr)_[A-Za-z0-9_]+$").expect("valid token regex")
});

/// A GitHub token whose shape has been checked.
///
/// The value is only reachable through [`GitHubToken::expose`]; `Debug` is redacted.
#[derive(Clone)]
pub struct GitHubToken(SecretString);

impl GitHubToken {
    pub fn parse(raw: &str) -> GhupResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(GhupError::missing_field("githubToken"));
        }

        if !TOKEN_SHAPE.is_match(trimmed) {
            return Err(GhupError::validation(format!(
                "Invalid githubToken format. GitHub tokens start with one of: {}",
                TOKEN_PREFIXES.join(", ")
            )));
        }

        Ok(Self(SecretString::new(trimmed.to_string())))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for GitHubToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GitHubToken([REDACTED])")
    }
}
