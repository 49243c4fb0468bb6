use colored::Colorize;
use ghup::core::credentials::TOKEN_KEY;
use ghup::{GhupResult, KeychainStore, SecretStore};

pub fn run() -> GhupResult<()> {
    let removed = forget_token(&KeychainStore)?;
    if removed {
        println!("{} Token removed from the OS keychain", "✓".green());
    } else {
        println!("No stored token");
    }
    Ok(())
}

/// Delete the stored token. Returns whether one was present.
pub fn forget_token(store: &dyn SecretStore) -> GhupResult<bool> {
    let existed = store.exists(TOKEN_KEY);
    store.delete(TOKEN_KEY)?;
    Ok(existed)
}
