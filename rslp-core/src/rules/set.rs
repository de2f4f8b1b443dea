//! Validated rule set
//!
//! Bridges the TOML configuration and the tables the matchers run on.

use std::fmt;
use std::sync::Arc;

use super::config::{RuleEntry, RuleFileConfig};
use super::exceptions::ExceptionSet;
use super::rule::StrippingRule;
use super::table::RuleTable;
use crate::error::{Result, StemmerError};
use crate::phase::Phase;

/// All phase tables plus the vowel-removal exceptions
#[derive(Clone)]
pub struct RuleSet {
    code: String,
    name: String,
    /// Indexed by [`Phase::index`]
    tables: Vec<Arc<RuleTable>>,
    vowel_exceptions: ExceptionSet,
}

impl RuleSet {
    /// Create from configuration, validating every table
    pub fn from_config(config: &RuleFileConfig) -> Result<Self> {
        let mut tables = Vec::with_capacity(Phase::ALL.len());
        for phase in Phase::ALL {
            let rules = config
                .entries(phase)
                .iter()
                .map(|entry| build_rule(phase, entry))
                .collect::<Result<Vec<_>>>()?;
            tables.push(Arc::new(RuleTable::new(phase, rules)?));
        }

        let vowel_exceptions = ExceptionSet::new(config.vowel.exceptions.clone())
            .map_err(|source| StemmerError::invalid_exceptions("vowel", "", source))?;

        log::debug!(
            "loaded rule set '{}' ({} rules)",
            config.metadata.code,
            tables.iter().map(|table| table.len()).sum::<usize>()
        );

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            tables,
            vowel_exceptions,
        })
    }

    /// Rule set code, e.g. "pt"
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Table for a phase
    pub fn table(&self, phase: Phase) -> &Arc<RuleTable> {
        &self.tables[phase.index()]
    }

    /// Words the vowel-removal fallback leaves alone
    pub fn vowel_exceptions(&self) -> &ExceptionSet {
        &self.vowel_exceptions
    }

    /// Total number of rules across all phases
    pub fn rule_count(&self) -> usize {
        self.tables.iter().map(|table| table.len()).sum()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("code", &self.code)
            .field("name", &self.name)
            .field("rules", &self.rule_count())
            .finish()
    }
}

fn build_rule(phase: Phase, entry: &RuleEntry) -> Result<StrippingRule> {
    let mut rule = StrippingRule::new(
        entry.suffix.clone(),
        entry.min_stem,
        entry.replacement.clone(),
    );

    if let Some(words) = &entry.exceptions {
        let exceptions = ExceptionSet::new(words.clone())
            .map_err(|source| StemmerError::invalid_exceptions(phase, entry.suffix.clone(), source))?;
        rule = rule.with_exceptions(exceptions);
    }

    if entry.replace_all {
        rule = rule.with_replace_all();
    }

    if let Some((word, stem)) = &entry.example {
        rule = rule.with_example(word.clone(), stem.clone());
    }

    Ok(rule)
}
