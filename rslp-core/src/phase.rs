//! Reduction phases, matching strategies and accent handling

use crate::error::StemmerError;
use std::fmt;
use std::str::FromStr;

/// A rule-driven reduction step of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    /// Plural endings ("-s", "-ns", "-ões", ...)
    Plural,
    /// Feminine endings ("-a", "-ona", "-eira", ...)
    Feminine,
    /// Augmentative and diminutive endings
    Degree,
    /// The adverbial "-mente"
    Adverb,
    /// Nominal suffixes
    Noun,
    /// Verbal suffixes
    Verb,
}

impl Phase {
    /// All phases in pipeline order
    pub const ALL: [Phase; 6] = [
        Phase::Plural,
        Phase::Feminine,
        Phase::Degree,
        Phase::Adverb,
        Phase::Noun,
        Phase::Verb,
    ];

    /// Position of the phase in [`Phase::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Phase::Plural => 0,
            Phase::Feminine => 1,
            Phase::Degree => 2,
            Phase::Adverb => 3,
            Phase::Noun => 4,
            Phase::Verb => 5,
        }
    }

    /// Lowercase name, also used as the table key in rule files
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Plural => "plural",
            Phase::Feminine => "feminine",
            Phase::Degree => "degree",
            Phase::Adverb => "adverb",
            Phase::Noun => "noun",
            Phase::Verb => "verb",
        }
    }

    /// Whether a real reduction in this phase counts as "suffix removed"
    pub const fn marks_suffix_removed(self) -> bool {
        matches!(self, Phase::Noun | Phase::Verb)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Phase {
    type Err = StemmerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::ALL
            .into_iter()
            .find(|phase| phase.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StemmerError::UnknownPhase(s.to_string()))
    }
}

/// How a rule table is matched against a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStrategy {
    /// Ordered scan over the rule list; the reference semantics
    #[default]
    RuleScan,
    /// Backward walk over a suffix trie compiled from the rule list
    StateWalk,
}

impl MatchStrategy {
    /// Both strategies
    pub const ALL: [MatchStrategy; 2] = [MatchStrategy::RuleScan, MatchStrategy::StateWalk];

    /// Short name
    pub const fn name(self) -> &'static str {
        match self {
            MatchStrategy::RuleScan => "scan",
            MatchStrategy::StateWalk => "walk",
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatchStrategy {
    type Err = StemmerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scan" | "rule-scan" | "list" => Ok(MatchStrategy::RuleScan),
            "walk" | "state-walk" | "automata" => Ok(MatchStrategy::StateWalk),
            _ => Err(StemmerError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Whether the final stem keeps its diacritics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accents {
    /// Return the stem as produced by the reduction phases
    #[default]
    Keep,
    /// Run the accent normalizer on the stem
    Remove,
}

impl From<bool> for Accents {
    /// `true` means "remove accents"
    fn from(remove: bool) -> Self {
        if remove {
            Accents::Remove
        } else {
            Accents::Keep
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_order_matches_index() {
        for (position, phase) in Phase::ALL.iter().enumerate() {
            assert_eq!(phase.index(), position);
        }
    }

    #[test]
    fn test_phase_from_str() {
        assert_eq!("plural".parse::<Phase>().unwrap(), Phase::Plural);
        assert_eq!("Verb".parse::<Phase>().unwrap(), Phase::Verb);
        assert!(matches!(
            "vowel".parse::<Phase>(),
            Err(StemmerError::UnknownPhase(_))
        ));
    }

    #[test]
    fn test_only_noun_and_verb_mark_removal() {
        let marking: Vec<Phase> = Phase::ALL
            .into_iter()
            .filter(|p| p.marks_suffix_removed())
            .collect();
        assert_eq!(marking, vec![Phase::Noun, Phase::Verb]);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!(
            "walk".parse::<MatchStrategy>().unwrap(),
            MatchStrategy::StateWalk
        );
        assert_eq!(
            "rule-scan".parse::<MatchStrategy>().unwrap(),
            MatchStrategy::RuleScan
        );
        assert!("trie".parse::<MatchStrategy>().is_err());
        assert_eq!(MatchStrategy::default(), MatchStrategy::RuleScan);
    }

    #[test]
    fn test_accents_from_bool() {
        assert_eq!(Accents::from(true), Accents::Remove);
        assert_eq!(Accents::from(false), Accents::Keep);
    }
}
