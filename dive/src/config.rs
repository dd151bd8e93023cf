//! Configuration for dive

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::parser::DirectionPolicy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Command file to read, relative to the working directory
    pub input: PathBuf,

    /// Handling of lines whose direction is not forward/down/up
    #[serde(rename = "unknown-directions")]
    pub unknown_directions: DirectionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(crate::DEFAULT_INPUT),
            unknown_directions: DirectionPolicy::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Project-local .dive.yml, then ~/.config/dive/dive.yml
        let candidates = [
            Some(PathBuf::from(".dive.yml")),
            dirs::config_dir().map(|p| p.join("dive").join("dive.yml")),
        ];

        for path in candidates.iter().flatten().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => return Ok(config),
                Err(e) => tracing::warn!("Failed to load config from {}: {}", path.display(), e),
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::debug!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}
