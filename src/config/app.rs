// src/config/app.rs
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

use super::defaults::*;
use crate::consts::{CONFIG_DIR_NAME, CONFIG_ENV, CONFIG_FILE_NAME, DELAY_ENV};
use crate::enums::Algorithm;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: Defaults,
    pub ui: Ui,
}

/// Values the form pre-selects
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub algorithm: Algorithm,
    pub shift: i64,
}

/// Presentation-only knobs; none of these change transform output
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Ui {
    pub delay_ms: u64,
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: default_defaults(),
            ui: default_ui(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        default_defaults()
    }
}

impl Default for Ui {
    fn default() -> Self {
        default_ui()
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Apply `TEXTCRYPT_DELAY_MS` on top of whatever the file said
    fn apply_env_overrides(&mut self) {
        let Ok(raw) = std::env::var(DELAY_ENV) else {
            return;
        };
        match raw.trim().parse::<u64>() {
            Ok(ms) => self.ui.delay_ms = ms,
            Err(_) => {
                #[cfg(feature = "logging")]
                warn!(value = %raw, "ignoring non-numeric {DELAY_ENV}");
            }
        }
    }
}

/// `$TEXTCRYPT_CONFIG`, else `<config dir>/textcrypt/config.toml`
pub fn config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(explicit));
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config once per process: falls back to defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(load_uncached)
}

/// Resolve and read the config file now, bypassing the cache
pub fn load_uncached() -> Config {
    let mut conf = match config_path() {
        Some(path) if path.exists() => match Config::from_path(&path) {
            Ok(conf) => {
                #[cfg(feature = "logging")]
                debug!(path = %path.display(), "loaded config");
                conf
            }
            Err(_err) => {
                #[cfg(feature = "logging")]
                warn!(error = %_err, "using built-in defaults");
                Config::default()
            }
        },
        _ => Config::default(),
    };

    conf.apply_env_overrides();
    conf
}
