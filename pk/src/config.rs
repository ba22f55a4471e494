//! Configuration for promptkit

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the JSON template catalog
    #[serde(rename = "catalog-path")]
    pub catalog_path: PathBuf,

    /// Where generated prompts are saved by default
    #[serde(rename = "output-path")]
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(crate::DEFAULT_CATALOG_FILE),
            output_path: PathBuf::from(crate::DEFAULT_OUTPUT_FILE),
        }
    }
}

impl Config {
    /// Load config with fallback chain
    ///
    /// An explicit path must load. Otherwise `./promptkit.yml`, then
    /// `<config dir>/promptkit/promptkit.yml`, then defaults.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let default_paths = [
            Some(PathBuf::from("promptkit.yml")),
            dirs::config_dir().map(|p| p.join("promptkit").join("promptkit.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                match Self::load_from_file(path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load the catalog this config points at, empty if unreadable
    pub fn catalog(&self) -> Catalog {
        Catalog::load(&self.catalog_path)
    }

    /// Save a prompt to the configured output path
    pub fn save_prompt(&self, prompt: &str) -> Result<()> {
        crate::persist::save_prompt(prompt, &self.output_path)
    }
}
