//! GitHub contents API client implementation

use crate::config::Config;
use crate::core::{GhupError, GhupResult};
use crate::upload::request::UploadRequest;
use crate::upload::types::{ContentsResponse, GitHubErrorBody, UploadedFile};
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient, StatusCode};
use std::time::Duration;

/// Something that can create a file in a repository.
///
/// Implementations make exactly one attempt per call.
#[async_trait]
pub trait ContentsProvider: Send + Sync {
    async fn create_file(&self, request: &UploadRequest) -> GhupResult<UploadedFile>;
}

/// Connection settings for [`ContentsClient`]
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub api_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl ClientSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            api_url: config.api_url.clone(),
            user_agent: config.user_agent.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// GitHub contents API client
pub struct ContentsClient {
    http_client: HttpClient,
    api_url: String,
}

impl ContentsClient {
    /// Create a new client. The token is per request, not per client.
    pub fn new(settings: &ClientSettings) -> GhupResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&settings.user_agent)
                .map_err(|e| GhupError::Config(format!("Invalid user agent: {}", e)))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .timeout(settings.timeout)
            .build()
            .map_err(|e| GhupError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_url: settings.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the contents endpoint for a request
    pub fn contents_url(&self, request: &UploadRequest) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_url,
            urlencoding::encode(request.owner()),
            urlencoding::encode(request.repo()),
            request.contents_path()
        )
    }

    /// `PUT` the file. Succeeds only on 201 Created.
    pub async fn put_file(&self, request: &UploadRequest) -> GhupResult<UploadedFile> {
        let url = self.contents_url(request);
        let mut authorization =
            header::HeaderValue::from_str(&format!("token {}", request.token().expose()))
                .map_err(|_| GhupError::validation("Invalid githubToken format"))?;
        authorization.set_sensitive(true);

        let response = self
            .http_client
            .put(&url)
            .header(header::AUTHORIZATION, authorization)
            .json(&request.body())
            .send()
            .await
            .map_err(|e| GhupError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| GhupError::Transport(e.to_string()))?;

        if status == StatusCode::CREATED {
            let created: ContentsResponse = serde_json::from_slice(&body).map_err(|e| {
                tracing::warn!("Unparseable 201 response from {}: {}", url, e);
                GhupError::Upstream {
                    status: status.as_u16(),
                    message: "Unexpected response from GitHub".to_string(),
                }
            })?;
            return Ok(created.into());
        }

        let message = serde_json::from_slice::<GitHubErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

        Err(GhupError::Upstream {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ContentsProvider for ContentsClient {
    async fn create_file(&self, request: &UploadRequest) -> GhupResult<UploadedFile> {
        self.put_file(request).await
    }
}
