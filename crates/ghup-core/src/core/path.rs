use crate::core::error::{GhupError, GhupResult};
use std::path::{Path, PathBuf};

/// Get the Ghup home directory
///
/// Platform-specific locations:
/// - Windows: %APPDATA%\ghup
/// - Linux: ~/.config/ghup
/// - macOS: ~/Library/Application Support/ghup
pub fn ghup_home() -> GhupResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| GhupError::Path("Could not determine config directory".to_string()))?;
    Ok(config_dir.join("ghup"))
}

/// Get the config file path (`<ghup_home>/config.yaml`)
pub fn config_file() -> GhupResult<PathBuf> {
    Ok(ghup_home()?.join("config.yaml"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> GhupResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
