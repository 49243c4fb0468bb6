use colored::Colorize;
use ghup::core::credentials::TOKEN_KEY;
use ghup::core::path::config_file;
use ghup::{Config, GhupError, GhupResult, KeychainStore, SecretStore};

#[derive(Debug, Default)]
pub struct ConfigUpdate {
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub branch: Option<String>,
    pub api_url: Option<String>,
}

impl ConfigUpdate {
    fn is_empty(&self) -> bool {
        self.owner.is_none() && self.repo.is_none() && self.branch.is_none() && self.api_url.is_none()
    }

    /// Apply to `config`. An empty string clears an optional default.
    pub fn apply(self, config: &mut Config) {
        let clearable = |v: String| if v.trim().is_empty() { None } else { Some(v) };

        if let Some(owner) = self.owner {
            config.owner = clearable(owner);
        }
        if let Some(repo) = self.repo {
            config.repo = clearable(repo);
        }
        if let Some(branch) = self.branch {
            config.branch = clearable(branch);
        }
        if let Some(api_url) = self.api_url {
            config.api_url = api_url;
        }
    }
}

pub fn set(update: ConfigUpdate) -> GhupResult<()> {
    if update.is_empty() {
        return Err(GhupError::validation(
            "Nothing to set. Pass at least one of --owner, --repo, --branch, --api-url",
        ));
    }

    let mut config = Config::load()?;
    update.apply(&mut config);
    config.save()?;

    println!("{} Defaults saved to {}", "✓".green(), config_file()?.display());
    Ok(())
}

pub fn show() -> GhupResult<()> {
    let config = Config::load()?;
    let has_token = KeychainStore.exists(TOKEN_KEY);

    println!("Config file: {}", config_file()?.display());
    print!("{}", render(&config, has_token));
    Ok(())
}

pub fn clear() -> GhupResult<()> {
    Config::default().save()?;
    println!("{} Config reset to defaults", "✓".green());
    Ok(())
}

fn render(config: &Config, has_token: bool) -> String {
    let or_unset = |v: &Option<String>| v.clone().unwrap_or_else(|| "(not set)".to_string());

    format!(
        "  api_url:      {}\n  user_agent:   {}\n  timeout_secs: {}\n  owner:        {}\n  repo:         {}\n  branch:       {}\n  token:        {}\n",
        config.api_url,
        config.user_agent,
        config.timeout_secs,
        or_unset(&config.owner),
        or_unset(&config.repo),
        config.branch.clone().unwrap_or_else(|| "main (default)".to_string()),
        if has_token { "stored in keychain" } else { "not stored" },
    )
}
