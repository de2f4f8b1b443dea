//! Rule set loader
//!
//! The Portuguese tables ship inside the binary and are parsed once on first
//! access. External files use the same schema and validation.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use super::config::RuleFileConfig;
use super::set::RuleSet;
use crate::error::{Result, StemmerError};

/// Built-in rule data
pub const EMBEDDED_RULES: &str = include_str!("../../configs/rules/portuguese.toml");

static EMBEDDED: OnceLock<Arc<RuleSet>> = OnceLock::new();

impl RuleSet {
    /// The built-in Portuguese rule set, parsed and validated once
    pub fn embedded() -> Result<Arc<RuleSet>> {
        if let Some(rules) = EMBEDDED.get() {
            return Ok(Arc::clone(rules));
        }

        // A concurrent first call may parse twice; the first stored copy wins.
        let parsed = Arc::new(RuleSet::from_toml_str(EMBEDDED_RULES, "<embedded>")?);
        Ok(Arc::clone(EMBEDDED.get_or_init(|| parsed)))
    }

    /// Parse and validate rules from TOML text. `origin` labels errors.
    pub fn from_toml_str(source: &str, origin: &str) -> Result<RuleSet> {
        let config: RuleFileConfig =
            toml::from_str(source).map_err(|e| StemmerError::RuleFile {
                origin: origin.to_string(),
                reason: e.to_string(),
            })?;
        RuleSet::from_config(&config)
    }

    /// Load and validate rules from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<RuleSet> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        log::debug!("loading rule file {}", path.display());
        RuleSet::from_toml_str(&source, &path.display().to_string())
    }
}
