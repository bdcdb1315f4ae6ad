// src/config/app.rs
use super::defaults::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, warn};

use crate::consts::{CONFIG_DIR_NAME, CONFIG_ENV_VAR, LOCAL_CONFIG_FILE};
use crate::core::Result;
use crate::enums::{Algorithm, Direction};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: Defaults,
    pub input: InputPolicy,
}

/// Request parameters used when the caller does not give them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub algorithm: Algorithm,
    pub direction: Direction,
    pub shift: Option<i64>,
    pub keyword: Option<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        default_defaults()
    }
}

/// Caller-side message checks applied before transforming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputPolicy {
    /// Strip surrounding whitespace from the message
    pub trim: bool,
    /// Reject anything but letters and whitespace
    pub strict: bool,
}

impl Default for InputPolicy {
    fn default() -> Self {
        default_input()
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Where the config lives: `$CIPHER_CONFIG`, then `./cipher.toml`,
/// then `<config dir>/classical-cipher/config.toml`
///
/// Returns `None` when no candidate exists (the env var is returned as-is).
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join("config.toml"))
        .filter(|path| path.exists())
}

/// Read and parse one config file; missing keys take their defaults
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Ok(toml::from_str(&content)?)
}

/// Load config once — falls back to built-in defaults if missing or broken
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| match config_path() {
        Some(path) => match load_from(&path) {
            Ok(conf) => {
                debug!(path = %path.display(), "loaded config");
                conf
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "ignoring config, using built-in defaults");
                Config::default()
            }
        },
        None => Config::default(),
    })
}
