//! Platform-specific location of the switch config file.
//!
//! - Linux: `~/.config/twinswitch/switch.toml`
//! - macOS: `~/Library/Application Support/twinswitch/switch.toml`
//! - Windows: `%APPDATA%\twinswitch\switch.toml`
//!
//! The `TWINSWITCH_CONFIG` environment variable overrides the lookup.

use std::path::PathBuf;

/// Application name used for directory paths.
const APP_NAME: &str = "twinswitch";

/// Config file name inside the config directory.
const CONFIG_FILE: &str = "switch.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TWINSWITCH_CONFIG";

/// Returns the user-specific configuration directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the default config file path inside [`user_config_dir`].
pub fn default_config_path() -> PathBuf {
    user_config_dir().join(CONFIG_FILE)
}

/// Find the config file to load.
///
/// Searches in the following order:
/// 1. The path in `TWINSWITCH_CONFIG`, if set and a file
/// 2. [`default_config_path`], if it is a file
pub fn find_config() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).map(PathBuf::from)
        && path.is_file()
    {
        return Some(path);
    }

    let path = default_config_path();
    path.is_file().then_some(path)
}

/// Ensure the user config directory exists.
///
/// Creates the directory and any parent directories if they don't exist.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_user_config_dir() -> Result<PathBuf, crate::ConfigError> {
    let dir = user_config_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| crate::ConfigError::create_dir(&dir, e))?;
    }

    Ok(dir)
}
