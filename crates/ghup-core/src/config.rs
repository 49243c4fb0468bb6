use crate::core::path::{config_file, ensure_dir};
use crate::core::{GhupError, GhupResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Non-sensitive settings and form defaults.
///
/// The GitHub token is never written here; see `core::credentials`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// GitHub REST API base URL (override for GitHub Enterprise or testing)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// User-Agent header sent with every request (GitHub rejects requests without one)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Default repository owner (user or organization)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Default repository name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,

    /// Default branch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_user_agent() -> String {
    format!("ghup/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            owner: None,
            repo: None,
            branch: None,
        }
    }
}

impl Config {
    /// Load config from the platform-specific config directory, creating a default one if missing
    ///
    /// Config locations:
    /// - Windows: %APPDATA%\ghup\config.yaml
    /// - Linux: ~/.config/ghup/config.yaml
    /// - macOS: ~/Library/Application Support/ghup/config.yaml
    pub fn load() -> GhupResult<Self> {
        Self::load_from(&config_file()?)
    }

    /// Save config to the platform-specific config directory
    pub fn save(&self) -> GhupResult<()> {
        self.save_to(&config_file()?)
    }

    pub fn load_from(config_path: &Path) -> GhupResult<Self> {
        if !config_path.exists() {
            let config = Self::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(config_path)?;
        let config: Config = serde_yaml::from_str(&content)?;

        Ok(config)
    }

    pub fn save_to(&self, config_path: &Path) -> GhupResult<()> {
        let config_dir = config_path
            .parent()
            .ok_or_else(|| GhupError::Path("Invalid config path".to_string()))?;
        ensure_dir(config_dir)?;

        let content = serde_yaml::to_string(self)?;

        fs::write(config_path, content)?;
        Ok(())
    }
}
