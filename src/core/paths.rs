//! Centralized path helpers for the config directory.

use std::path::PathBuf;

use crate::core::app;

/// Env var that overrides the config directory (used by tests and packaged installs).
pub const CONFIG_DIR_ENV: &str = "CHITSHARE_CONFIG_DIR";

/// Project directories from the standard platform locations.
pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("io", app::VENDOR, app::NAME)
}

/// Config directory (~/.config/chitshare-content/), or `CHITSHARE_CONFIG_DIR` when set.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV)
        && !dir.is_empty()
    {
        return Some(PathBuf::from(dir));
    }
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Path of the optional JSON config file.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.json"))
}
