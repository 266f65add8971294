// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::directory::{LayoutMode, SortKey};

const DEFAULT_DATA_DIR: &str = "data/leaderboard";

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Where the leaderboard files live
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            dir: default_data_dir(),
        }
    }
}

/// Initial presentation of the contributor list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub layout: LayoutMode,
    #[serde(default)]
    pub sort: SortKey,
}

/// Additional bot username fragments on top of the built-in ones
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BotsConfig {
    #[serde(default)]
    pub extra_patterns: Vec<String>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub bots: BotsConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}
