//! Configuration module

use anyhow::{Context, Result};
use rslp_core::{Accents, MatchStrategy};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Stemming configuration
    #[serde(default)]
    pub stemming: StemmingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Stemming-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct StemmingConfig {
    /// Matching strategy ("scan" or "walk")
    pub strategy: String,

    /// Strip accents from the final stem
    pub remove_accents: bool,
}

impl Default for StemmingConfig {
    fn default() -> Self {
        Self {
            strategy: MatchStrategy::default().name().to_string(),
            remove_accents: false,
        }
    }
}

impl StemmingConfig {
    /// Parsed strategy
    pub fn strategy(&self) -> Result<MatchStrategy> {
        self.strategy
            .parse()
            .map_err(|e: rslp_core::StemmerError| CliError::ConfigError(e.to_string()).into())
    }

    pub fn accents(&self) -> Accents {
        Accents::from(self.remove_accents)
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format ("text" or "json")
    pub format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&source)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        log::debug!("loaded CLI config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
