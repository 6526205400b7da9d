//! `bingo.toml` configuration.
//!
//! Every key is optional. Command line flags win over the file, and the file
//! wins over the built-in defaults.

use crate::deck::AssetMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "bingo.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub paths: PathsConfig,
    pub cards: CardsConfig,
    pub pdf: PdfConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Song data file (YAML, JSON or TOML)
    pub data: PathBuf,
    /// Directory whose templates replace the built-in ones
    pub templates: Option<PathBuf>,
    /// Root of the generated cards and sheets
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            data: PathBuf::from("data/songs.yaml"),
            templates: None,
            output: PathBuf::from("output"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CardsConfig {
    pub title: String,
    pub background_color: String,
    /// How many cards to generate
    pub count: usize,
    /// Random seed, so the same deck can be printed again
    pub seed: u64,
    /// Decorative images shown beside the title
    pub images: Vec<PathBuf>,
    pub asset_mode: AssetMode,
}

impl Default for CardsConfig {
    fn default() -> Self {
        CardsConfig {
            title: "BINGO MUSICAL".to_string(),
            background_color: "#FFEAB3".to_string(),
            count: 30,
            seed: 42,
            images: Vec::new(),
            asset_mode: AssetMode::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// File name pattern used when converting a directory
    pub glob: String,
}

impl Default for PdfConfig {
    fn default() -> Self {
        PdfConfig {
            glob: "*.html".to_string(),
        }
    }
}

impl Configuration {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, `bingo.toml` in the working
    /// directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Configuration> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !path.is_file() {
                    log::debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
                    return Ok(Configuration::default());
                }
                path
            }
        };

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to load {} contents", path.display()))?;
        let config: Configuration = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse TOML in {}", path.display()))?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
