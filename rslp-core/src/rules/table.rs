//! Ordered rule list for one phase

use super::rule::StrippingRule;
use crate::error::{Result, StemmerError};
use crate::phase::Phase;

/// The rules of one phase, in evaluation order.
///
/// Validated on construction; immutable afterwards.
#[derive(Debug, Clone)]
pub struct RuleTable {
    phase: Phase,
    rules: Vec<StrippingRule>,
}

impl RuleTable {
    /// Build and validate a table.
    ///
    /// Rejects:
    /// - an empty table or an empty suffix
    /// - an exception that does not end with its rule's suffix
    /// - an all-occurrence rule with a minimum stem, which the size check
    ///   could not guarantee
    /// - a rule that can never be selected because an earlier rule's suffix
    ///   ends it (shorter suffix listed before a longer overlapping one)
    pub fn new(phase: Phase, rules: Vec<StrippingRule>) -> Result<Self> {
        if rules.is_empty() {
            return Err(StemmerError::invalid_table(phase, "", "phase has no rules"));
        }

        for (position, rule) in rules.iter().enumerate() {
            if rule.suffix().is_empty() {
                return Err(StemmerError::invalid_table(phase, "", "suffix is empty"));
            }

            if rule.replaces_all() && rule.min_stem() > 0 {
                return Err(StemmerError::invalid_table(
                    phase,
                    rule.suffix(),
                    "a rule replacing every occurrence must have min_stem 0",
                ));
            }

            if let Some(stray) = rule
                .exceptions()
                .and_then(|set| set.iter().find(|word| !rule.matches(word)))
            {
                return Err(StemmerError::invalid_table(
                    phase,
                    rule.suffix(),
                    format!("exception {stray:?} does not end with the suffix"),
                ));
            }

            if let Some(earlier) = rules[..position]
                .iter()
                .find(|earlier| earlier.matches(rule.suffix()))
            {
                return Err(StemmerError::invalid_table(
                    phase,
                    rule.suffix(),
                    format!(
                        "unreachable: earlier rule {:?} already matches every word it would",
                        earlier.suffix()
                    ),
                ));
            }
        }

        log::trace!("validated {} rule table with {} rules", phase, rules.len());
        Ok(Self { phase, rules })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[StrippingRule] {
        &self.rules
    }

    pub fn get(&self, index: usize) -> Option<&StrippingRule> {
        self.rules.get(index)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
