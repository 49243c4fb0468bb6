use colored::Colorize;
use dialoguer::Password;
use ghup::core::credentials::TOKEN_KEY;
use ghup::upload::GitHubToken;
use ghup::{GhupError, GhupResult, KeychainStore, SecretStore};

pub async fn run(token: Option<String>) -> GhupResult<()> {
    let token = match token {
        Some(token) => token,
        None => {
            println!("GitHub Login");
            println!("Paste a personal access token with 'contents: write' access.");
            println!();
            Password::new()
                .with_prompt("Token")
                .interact()
                .map_err(|e| GhupError::Io(std::io::Error::other(e.to_string())))?
        }
    };

    store_token(&token, &KeychainStore)?;

    println!();
    println!("{} Token stored in the OS keychain", "✓".green());
    println!(
        "{} Anyone with access to this user account can use it. Remove it with 'ghup logout'.",
        "warning:".yellow()
    );

    Ok(())
}

/// Check the token shape and remember it.
pub fn store_token(token: &str, store: &dyn SecretStore) -> GhupResult<()> {
    let token = GitHubToken::parse(token)?;
    store.store(TOKEN_KEY, token.expose())
}
