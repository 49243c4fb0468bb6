//! Mock implementations of the provider traits for testing

use crate::core::credentials::SecretStore;
use crate::core::{GhupError, GhupResult};
use crate::upload::client::ContentsProvider;
use crate::upload::request::UploadRequest;
use crate::upload::types::UploadedFile;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock contents provider
///
/// Records every request it receives and answers with a canned result.
///
/// # Example
///
/// ```
/// use ghup_core::mocks::MockContentsProvider;
///
/// let provider = MockContentsProvider::succeeding("https://github.com/o/r/blob/main/a", "https://raw/a");
/// assert_eq!(provider.call_count(), 0);
/// ```
pub struct MockContentsProvider {
    outcome: Result<UploadedFile, (u16, String)>,
    requests: Mutex<Vec<UploadRequest>>,
}

impl MockContentsProvider {
    pub fn succeeding(html_url: &str, download_url: &str) -> Self {
        Self {
            outcome: Ok(UploadedFile {
                html_url: html_url.to_string(),
                download_url: download_url.to_string(),
            }),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            outcome: Err((status, message.to_string())),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn last_request(&self) -> Option<UploadRequest> {
        self.requests.lock().ok().and_then(|r| r.last().cloned())
    }
}

#[async_trait]
impl ContentsProvider for MockContentsProvider {
    async fn create_file(&self, request: &UploadRequest) -> GhupResult<UploadedFile> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        match &self.outcome {
            Ok(file) => Ok(file.clone()),
            Err((status, message)) => Err(GhupError::Upstream {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

/// In-memory secret store
#[derive(Default)]
pub struct MemorySecretStore {
    secrets: Mutex<HashMap<String, String>>,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_secret(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut secrets) = store.secrets.lock() {
            secrets.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl SecretStore for MemorySecretStore {
    fn store(&self, key: &str, value: &str) -> GhupResult<()> {
        self.secrets
            .lock()
            .map_err(|_| GhupError::Credential("Secret store poisoned".to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn retrieve(&self, key: &str) -> GhupResult<Option<String>> {
        Ok(self
            .secrets
            .lock()
            .map_err(|_| GhupError::Credential("Secret store poisoned".to_string()))?
            .get(key)
            .cloned())
    }

    fn delete(&self, key: &str) -> GhupResult<()> {
        self.secrets
            .lock()
            .map_err(|_| GhupError::Credential("Secret store poisoned".to_string()))?
            .remove(key);
        Ok(())
    }
}
