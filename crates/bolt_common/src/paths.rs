//! Path helpers for Bolt
//!
//! Config: $BOLT_CONFIG, then ~/.config/bolt/config.toml, then /etc/bolt/config.toml
//! Data:   ~/.local/share/bolt/knowledge.db (XDG data dir)

use std::path::PathBuf;

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "BOLT_CONFIG";

const APP_DIR: &str = "bolt";
const CONFIG_FILE: &str = "config.toml";
const DATABASE_FILE: &str = "knowledge.db";

/// Explicit config override from the environment, if set
pub fn config_override() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// User config path: $XDG_CONFIG_HOME/bolt/config.toml
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// System config path
pub fn system_config_path() -> PathBuf {
    PathBuf::from("/etc/bolt").join(CONFIG_FILE)
}

/// Default knowledge database location
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(DATABASE_FILE)
}
