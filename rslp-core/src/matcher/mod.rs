//! Matching strategies for a single phase
//!
//! Both strategies select the same rule for every word and then evaluate it
//! through [`evaluate`], so the stem-size and exception checks exist once.

use std::sync::Arc;

use crate::phase::{MatchStrategy, Phase};
use crate::rules::{RuleTable, StrippingRule};
use crate::word::char_len;

pub mod scan;
pub mod walk;

pub use scan::RuleScanMatcher;
pub use walk::{State, StateId, StateWalkMatcher};

/// What happened to a word in one phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No rule's suffix ends the word
    NoMatch,
    /// The selected rule would leave a stem shorter than its minimum
    StemTooShort {
        /// Index of the rule in its table
        rule: usize,
    },
    /// The word is in the selected rule's exception list
    Exception {
        /// Index of the rule in its table
        rule: usize,
    },
    /// The suffix was replaced
    Applied {
        /// Index of the rule in its table
        rule: usize,
    },
}

impl Outcome {
    /// Index of the selected rule, if any rule matched
    pub fn rule(&self) -> Option<usize> {
        match *self {
            Outcome::NoMatch => None,
            Outcome::StemTooShort { rule }
            | Outcome::Exception { rule }
            | Outcome::Applied { rule } => Some(rule),
        }
    }
}

/// Word after one phase, plus how it got there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// Word after the phase; the input itself unless a rule applied
    pub word: String,
    /// Which rule was selected and whether it fired
    pub outcome: Outcome,
}

impl Reduction {
    /// The word passes through untouched
    pub fn unchanged(word: &str, outcome: Outcome) -> Self {
        Self {
            word: word.to_string(),
            outcome,
        }
    }

    /// Whether a rule actually replaced a suffix
    #[inline]
    pub fn is_reduced(&self) -> bool {
        matches!(self.outcome, Outcome::Applied { .. })
    }

    /// Take the reduced word, dropping the outcome
    pub fn into_word(self) -> String {
        self.word
    }
}

/// Applies one phase's rule table to a word
pub trait SuffixMatcher: Send + Sync {
    /// Phase this matcher was built for
    fn phase(&self) -> Phase;

    /// Strategy implemented by this matcher
    fn strategy(&self) -> MatchStrategy;

    /// Reduce `word`. Never fails; an unmatched word comes back unchanged.
    fn reduce(&self, word: &str) -> Reduction;
}

/// Check the selected rule against `word` and apply it if allowed.
///
/// `word` must end with the rule's suffix. The stem-size check runs before
/// the exception lookup.
pub(crate) fn evaluate(index: usize, rule: &StrippingRule, word: &str) -> Reduction {
    debug_assert!(rule.matches(word));

    if !rule.fits(char_len(word)) {
        return Reduction::unchanged(word, Outcome::StemTooShort { rule: index });
    }
    if rule.is_exception(word) {
        return Reduction::unchanged(word, Outcome::Exception { rule: index });
    }

    Reduction {
        word: rule.strip(word),
        outcome: Outcome::Applied { rule: index },
    }
}

/// Build the matcher for `table` with the requested strategy
pub fn build_matcher(strategy: MatchStrategy, table: Arc<RuleTable>) -> Box<dyn SuffixMatcher> {
    match strategy {
        MatchStrategy::RuleScan => Box::new(RuleScanMatcher::new(table)),
        MatchStrategy::StateWalk => Box::new(StateWalkMatcher::compile(table)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_applies_replacement() {
        let rule = StrippingRule::new("ns", 1, "m");
        let reduction = evaluate(0, &rule, "bons");
        assert_eq!(reduction.word, "bom");
        assert_eq!(reduction.outcome, Outcome::Applied { rule: 0 });
        assert!(reduction.is_reduced());
    }

    #[test]
    fn test_size_check_precedes_exception_check() {
        let exceptions =
            crate::rules::ExceptionSet::new(vec!["as".to_string()]).unwrap();
        let rule = StrippingRule::new("s", 2, "").with_exceptions(exceptions);
        let reduction = evaluate(4, &rule, "as");
        assert_eq!(reduction.outcome, Outcome::StemTooShort { rule: 4 });
        assert_eq!(reduction.word, "as");
        assert!(!reduction.is_reduced());
    }

    #[test]
    fn test_outcome_rule_index() {
        assert_eq!(Outcome::NoMatch.rule(), None);
        assert_eq!(Outcome::Exception { rule: 3 }.rule(), Some(3));
    }
}
