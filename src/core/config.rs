//! Rendering configuration: config file, environment, defaults.
//!
//! Precedence (highest first): CLI flags (applied by the caller), environment
//! variables (including `.env`), `config.json` in the config directory, defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::content::DEFAULT_PREVIEW_LEN;
use crate::core::paths;

pub const DEFAULT_THEME: &str = "base16-ocean.dark";
pub const DEFAULT_WRAP_WIDTH: usize = 100;

pub const THEME_ENV: &str = "CHITSHARE_THEME";
pub const WRAP_WIDTH_ENV: &str = "CHITSHARE_WRAP_WIDTH";
pub const PREVIEW_LENGTH_ENV: &str = "CHITSHARE_PREVIEW_LENGTH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// syntect theme name used for code blocks.
    pub theme: String,
    /// Terminal wrap width for text segments.
    pub wrap_width: usize,
    /// Maximum preview length in characters.
    pub preview_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            wrap_width: DEFAULT_WRAP_WIDTH,
            preview_length: DEFAULT_PREVIEW_LEN,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid value for {key}: '{value}' (expected a positive number)")]
    InvalidValue { key: String, value: String },
}

/// Config file contents. Every key is optional; unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    theme: Option<String>,
    wrap_width: Option<usize>,
    preview_length: Option<usize>,
}

/// Load configuration from the default config file and the process environment.
pub fn load() -> Result<Config, ConfigError> {
    let path = paths::config_file();
    load_from(path.as_deref(), |key| std::env::var(key).ok())
}

/// Load configuration from `path` (if it exists) and `env` lookups.
pub fn load_from<F>(path: Option<&Path>, env: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let file = match path {
        Some(p) if p.exists() => {
            log::debug!("reading config from {}", p.display());
            let content = fs::read_to_string(p)?;
            serde_json::from_str::<FileConfig>(&content)?
        }
        _ => FileConfig::default(),
    };

    let mut config = Config::default();
    if let Some(theme) = file.theme.filter(|t| !t.trim().is_empty()) {
        config.theme = theme;
    }
    if let Some(width) = file.wrap_width {
        config.wrap_width = width;
    }
    if let Some(len) = file.preview_length {
        config.preview_length = len;
    }

    if let Some(theme) = env(THEME_ENV).filter(|t| !t.trim().is_empty()) {
        log::debug!("theme from {}", THEME_ENV);
        config.theme = theme;
    }
    if let Some(width) = env_number(&env, WRAP_WIDTH_ENV)? {
        config.wrap_width = width;
    }
    if let Some(len) = env_number(&env, PREVIEW_LENGTH_ENV)? {
        config.preview_length = len;
    }
    Ok(config)
}

fn env_number<F>(env: &F, key: &str) -> Result<Option<usize>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = env(key).filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => {
            log::debug!("{} = {}", key, n);
            Ok(Some(n))
        }
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw,
        }),
    }
}
