use ghup_core::core::credentials::{SecretStore, TOKEN_KEY};

/// Environment variable consulted when `--token` is not given
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Where a token came from, for the "Uploading..." line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Flag,
    Environment,
    Keychain,
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenSource::Flag => write!(f, "--token"),
            TokenSource::Environment => write!(f, "{}", TOKEN_ENV),
            TokenSource::Keychain => write!(f, "keychain"),
        }
    }
}

/// Pick the token: `--token`, then `GITHUB_TOKEN`, then the keychain.
///
/// Blank values are skipped. A keychain that cannot be read counts as empty;
/// validation then reports the token as missing.
pub fn resolve_token(
    flag: Option<String>,
    env: Option<String>,
    store: &dyn SecretStore,
) -> Option<(String, TokenSource)> {
    let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

    if let Some(token) = non_blank(flag) {
        return Some((token, TokenSource::Flag));
    }
    if let Some(token) = non_blank(env) {
        return Some((token, TokenSource::Environment));
    }

    match store.retrieve(TOKEN_KEY) {
        Ok(token) => non_blank(token).map(|t| (t, TokenSource::Keychain)),
        Err(e) => {
            tracing::debug!("Keychain lookup failed: {}", e);
            None
        }
    }
}
