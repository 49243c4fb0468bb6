use crate::core::{GhupError, GhupResult};
use keyring::Entry;

/// Service name for keyring entries
const KEYRING_SERVICE: &str = "ghup";

/// Keyring account under which the GitHub token is kept
pub const TOKEN_KEY: &str = "github_token";

/// Opt-in storage for secrets the user asked us to remember.
///
/// Nothing is stored unless the user runs `ghup login`; the config file never
/// holds a token.
pub trait SecretStore: Send + Sync {
    /// Store a secret, replacing any previous value
    fn store(&self, key: &str, value: &str) -> GhupResult<()>;

    /// Retrieve a secret, `Ok(None)` when nothing is stored under `key`
    fn retrieve(&self, key: &str) -> GhupResult<Option<String>>;

    /// Delete a secret. Deleting a missing entry is not an error.
    fn delete(&self, key: &str) -> GhupResult<()>;

    /// Check if a secret exists
    fn exists(&self, key: &str) -> bool {
        matches!(self.retrieve(key), Ok(Some(_)))
    }
}

/// Secret storage backed by the OS keychain
///
/// Platform support:
/// - macOS: Keychain
/// - Windows: Credential Manager
/// - Linux: Secret Service (libsecret)
#[derive(Debug, Default, Clone, Copy)]
pub struct KeychainStore;

impl KeychainStore {
    fn entry(key: &str) -> GhupResult<Entry> {
        Entry::new(KEYRING_SERVICE, key)
            .map_err(|e| GhupError::Credential(format!("Failed to create keyring entry: {}", e)))
    }
}

impl SecretStore for KeychainStore {
    fn store(&self, key: &str, value: &str) -> GhupResult<()> {
        Self::entry(key)?.set_password(value).map_err(|e| {
            GhupError::Credential(format!("Failed to store credential in keychain: {}", e))
        })
    }

    fn retrieve(&self, key: &str) -> GhupResult<Option<String>> {
        match Self::entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(GhupError::Credential(format!(
                "Failed to retrieve credential from keychain: {}",
                e
            ))),
        }
    }

    fn delete(&self, key: &str) -> GhupResult<()> {
        match Self::entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(GhupError::Credential(format!(
                "Failed to delete credential from keychain: {}",
                e
            ))),
        }
    }
}
