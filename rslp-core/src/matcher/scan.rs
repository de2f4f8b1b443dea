//! Ordered rule scan: the reference semantics

use std::sync::Arc;

use super::{evaluate, Outcome, Reduction, SuffixMatcher};
use crate::phase::{MatchStrategy, Phase};
use crate::rules::RuleTable;

/// Tries each rule in table order; the first suffix that ends the word is the
/// only rule evaluated. A rule blocked by its stem size or an exception does
/// not fall through to later rules.
#[derive(Debug, Clone)]
pub struct RuleScanMatcher {
    table: Arc<RuleTable>,
}

impl RuleScanMatcher {
    pub fn new(table: Arc<RuleTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }
}

impl SuffixMatcher for RuleScanMatcher {
    fn phase(&self) -> Phase {
        self.table.phase()
    }

    fn strategy(&self) -> MatchStrategy {
        MatchStrategy::RuleScan
    }

    fn reduce(&self, word: &str) -> Reduction {
        for (index, rule) in self.table.rules().iter().enumerate() {
            if rule.matches(word) {
                return evaluate(index, rule, word);
            }
        }
        Reduction::unchanged(word, Outcome::NoMatch)
    }
}
