//! User configuration
//!
//! Read once at start-up from `~/.config/rollcall/config.toml`. Every setting
//! has a default, so a missing file is not an error and a broken one only
//! produces a warning.

mod types;

pub use types::{BotsConfig, ClipboardBackend, ClipboardConfig, Config, DataConfig, DirectoryConfig};

use std::fs;
use std::path::{Path, PathBuf};

/// Loaded configuration plus a message to show if the file was unusable
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

impl ConfigResult {
    fn defaults(warning: Option<String>) -> Self {
        Self {
            config: Config::default(),
            warning,
        }
    }
}

pub fn load_config() -> ConfigResult {
    load_config_from_path(&config_path())
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", path);

    if !path.exists() {
        return ConfigResult::defaults(None);
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(warning) => {
            #[cfg(debug_assertions)]
            log::error!("Config {:?} not used: {}", path, warning);
            ConfigResult::defaults(Some(warning))
        }
    }
}

fn read_config(path: &Path) -> Result<Config, String> {
    let contents =
        fs::read_to_string(path).map_err(|e| format!("Failed to read config: {}", e))?;
    toml::from_str(&contents).map_err(|e| format!("Invalid config: {}", e))
}

/// `~/.config/rollcall/config.toml` on every platform
fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("rollcall")
        .join("config.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
