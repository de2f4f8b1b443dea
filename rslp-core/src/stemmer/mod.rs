//! Reduction pipeline
//!
//! Phases run in a fixed order. Plural and feminine are gated on the word's
//! last letter, degree and adverb always run, and verb plus the vowel
//! fallback only run when the previous phase left the word unreduced.

use std::fmt;
use std::sync::Arc;

use crate::accents::remove_accents;
use crate::error::Result;
use crate::matcher::{build_matcher, Outcome, Reduction, SuffixMatcher};
use crate::phase::{Accents, MatchStrategy, Phase};
use crate::rules::RuleSet;
use crate::word::{char_len, validate_word};

pub mod trace;

pub use trace::{Stage, StemTrace, Step};

/// Portuguese stemmer.
///
/// Holds one matcher per phase over an immutable rule set. Every call works
/// on its own values, so a single instance can be shared across threads.
pub struct Stemmer {
    rules: Arc<RuleSet>,
    strategy: MatchStrategy,
    /// Indexed by [`Phase::index`]
    matchers: Vec<Box<dyn SuffixMatcher>>,
}

impl Stemmer {
    /// Stemmer over the built-in rules, using the rule scan
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Configure strategy and rule set
    pub fn builder() -> StemmerBuilder {
        StemmerBuilder::new()
    }

    fn with_rules(rules: Arc<RuleSet>, strategy: MatchStrategy) -> Self {
        let matchers = Phase::ALL
            .iter()
            .map(|&phase| build_matcher(strategy, Arc::clone(rules.table(phase))))
            .collect();

        Self {
            rules,
            strategy,
            matchers,
        }
    }

    pub fn rules(&self) -> &Arc<RuleSet> {
        &self.rules
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Run the full pipeline on one lowercase word
    pub fn stem(&self, word: &str, accents: Accents) -> Result<String> {
        validate_word(word)?;
        Ok(self.run(word, accents, None))
    }

    /// Like [`Stemmer::stem`], recording every stage that ran
    pub fn trace(&self, word: &str, accents: Accents) -> Result<StemTrace> {
        validate_word(word)?;
        let mut steps = Vec::new();
        let stem = self.run(word, accents, Some(&mut steps));
        Ok(StemTrace { stem, steps })
    }

    /// Apply a single phase
    pub fn reduce(&self, phase: Phase, word: &str) -> Result<Reduction> {
        validate_word(word)?;
        Ok(self.matcher(phase).reduce(word))
    }

    pub fn plural_reduction(&self, word: &str) -> Result<Reduction> {
        self.reduce(Phase::Plural, word)
    }

    pub fn feminine_reduction(&self, word: &str) -> Result<Reduction> {
        self.reduce(Phase::Feminine, word)
    }

    pub fn degree_reduction(&self, word: &str) -> Result<Reduction> {
        self.reduce(Phase::Degree, word)
    }

    pub fn adverb_reduction(&self, word: &str) -> Result<Reduction> {
        self.reduce(Phase::Adverb, word)
    }

    pub fn noun_reduction(&self, word: &str) -> Result<Reduction> {
        self.reduce(Phase::Noun, word)
    }

    pub fn verb_reduction(&self, word: &str) -> Result<Reduction> {
        self.reduce(Phase::Verb, word)
    }

    /// Drop a final "a", "e" or "o" from words longer than two characters,
    /// unless the word is a vowel-removal exception
    pub fn remove_vowel(&self, word: &str) -> Result<String> {
        validate_word(word)?;
        Ok(self.strip_final_vowel(word))
    }

    #[inline]
    fn matcher(&self, phase: Phase) -> &dyn SuffixMatcher {
        self.matchers[phase.index()].as_ref()
    }

    fn strip_final_vowel(&self, word: &str) -> String {
        if char_len(word) > 2
            && !self.rules.vowel_exceptions().contains(word)
            && word.ends_with(['a', 'e', 'o'])
        {
            // a, e and o are single-byte
            word[..word.len() - 1].to_string()
        } else {
            word.to_string()
        }
    }

    fn run(&self, word: &str, accents: Accents, mut steps: Option<&mut Vec<Step>>) -> String {
        let mut current = word.to_string();

        if current.ends_with('s') {
            current = self.apply(Phase::Plural, current, &mut steps).into_word();
        }
        if current.ends_with(['a', 'ã']) {
            current = self.apply(Phase::Feminine, current, &mut steps).into_word();
        }
        current = self.apply(Phase::Degree, current, &mut steps).into_word();
        current = self.apply(Phase::Adverb, current, &mut steps).into_word();

        let noun = self.apply(Phase::Noun, current, &mut steps);
        let reduced = noun.is_reduced();
        current = noun.into_word();

        if !reduced {
            let verb = self.apply(Phase::Verb, current, &mut steps);
            let reduced = verb.is_reduced();
            current = verb.into_word();

            if !reduced {
                let output = self.strip_final_vowel(&current);
                record(&mut steps, Stage::VowelRemoval, current, &output, None);
                current = output;
            }
        }

        if accents == Accents::Remove {
            let output = remove_accents(&current);
            record(&mut steps, Stage::AccentRemoval, current, &output, None);
            current = output;
        }

        log::trace!("stem {:?} -> {:?}", word, current);
        current
    }

    fn apply(&self, phase: Phase, word: String, steps: &mut Option<&mut Vec<Step>>) -> Reduction {
        let reduction = self.matcher(phase).reduce(&word);
        log::trace!("{}: {:?} -> {:?} ({:?})", phase, word, reduction.word, reduction.outcome);
        record(
            steps,
            Stage::Reduction(phase),
            word,
            &reduction.word,
            Some(reduction.outcome),
        );
        reduction
    }
}

fn record(
    steps: &mut Option<&mut Vec<Step>>,
    stage: Stage,
    input: String,
    output: &str,
    outcome: Option<Outcome>,
) {
    if let Some(steps) = steps.as_mut() {
        steps.push(Step {
            stage,
            input,
            output: output.to_string(),
            outcome,
        });
    }
}

impl fmt::Debug for Stemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stemmer")
            .field("rules", &self.rules)
            .field("strategy", &self.strategy)
            .finish()
    }
}

/// Builder for [`Stemmer`]
#[derive(Debug, Default)]
pub struct StemmerBuilder {
    strategy: MatchStrategy,
    rules: Option<Arc<RuleSet>>,
}

impl StemmerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the matching strategy
    pub fn strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Use an external rule set instead of the built-in one
    pub fn rules(mut self, rules: impl Into<Arc<RuleSet>>) -> Self {
        self.rules = Some(rules.into());
        self
    }

    /// Build the stemmer
    pub fn build(self) -> Result<Stemmer> {
        let rules = match self.rules {
            Some(rules) => rules,
            None => RuleSet::embedded()?,
        };
        Ok(Stemmer::with_rules(rules, self.strategy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StemmerError;

    fn stemmer() -> Stemmer {
        Stemmer::new().unwrap()
    }

    #[test]
    fn test_stemmer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Stemmer>();
    }

    #[test]
    fn test_full_pipeline() {
        let stemmer = stemmer();
        assert_eq!(stemmer.stem("bons", Accents::Keep).unwrap(), "bom");
        assert_eq!(stemmer.stem("cantando", Accents::Keep).unwrap(), "cant");
        assert_eq!(stemmer.stem("felizmente", Accents::Keep).unwrap(), "feliz");
        assert_eq!(stemmer.stem("gatinhas", Accents::Keep).unwrap(), "gat");
        assert_eq!(stemmer.stem("normalmente", Accents::Keep).unwrap(), "norm");
    }

    #[test]
    fn test_accent_removal_is_last() {
        let stemmer = stemmer();
        assert_eq!(stemmer.stem("coração", Accents::Keep).unwrap(), "coraçã");
        assert_eq!(stemmer.stem("coração", Accents::Remove).unwrap(), "coraça");
        assert_eq!(stemmer.stem("lápis", Accents::Remove).unwrap(), "lapis");
    }

    #[test]
    fn test_vowel_fallback() {
        let stemmer = stemmer();
        assert_eq!(stemmer.remove_vowel("livro").unwrap(), "livr");
        assert_eq!(stemmer.remove_vowel("bebê").unwrap(), "bebê");
        // exception
        assert_eq!(stemmer.remove_vowel("ásia").unwrap(), "ásia");
        assert_eq!(stemmer.remove_vowel("lua").unwrap(), "lu");
        // too short
        assert_eq!(stemmer.remove_vowel("ao").unwrap(), "ao");
    }

    #[test]
    fn test_single_phases() {
        let stemmer = stemmer();
        let plural = stemmer.plural_reduction("casas").unwrap();
        assert_eq!(plural.word, "casa");
        assert!(plural.is_reduced());

        let feminine = stemmer.feminine_reduction("menina").unwrap();
        assert_eq!(feminine.word, "menino");

        let adverb = stemmer.adverb_reduction("experimente").unwrap();
        assert_eq!(adverb.word, "experimente");
        assert_eq!(adverb.outcome, Outcome::Exception { rule: 0 });

        assert_eq!(stemmer.verb_reduction("falavam").unwrap().word, "fal");
        assert_eq!(stemmer.noun_reduction("felicidade").unwrap().word, "felic");
    }

    #[test]
    fn test_trace_skips_gated_stages() {
        let stemmer = stemmer();

        // noun reduces: verb and vowel fallback never run
        let trace = stemmer.trace("felicidade", Accents::Keep).unwrap();
        assert_eq!(trace.stem, "felic");
        assert!(!trace.ran(Stage::Reduction(Phase::Plural)));
        assert!(!trace.ran(Stage::Reduction(Phase::Verb)));
        assert!(!trace.ran(Stage::VowelRemoval));

        // nothing reduces: every ungated stage is recorded, even when unchanged
        let trace = stemmer.trace("casa", Accents::Keep).unwrap();
        let stages: Vec<&str> = trace.steps.iter().map(|s| s.stage.name()).collect();
        assert_eq!(
            stages,
            vec!["feminine", "degree", "adverb", "noun", "verb", "vowel"]
        );
        assert_eq!(trace.stem, "cas");
    }

    #[test]
    fn test_adverb_removes_every_mente() {
        let stemmer = stemmer();
        let adverb = stemmer.adverb_reduction("veementemente").unwrap();
        assert_eq!(adverb.word, "vee");
        assert_eq!(adverb.outcome, Outcome::Applied { rule: 0 });
        assert_eq!(stemmer.adverb_reduction("dementemente").unwrap().word, "de");

        assert_eq!(stemmer.stem("veementemente", Accents::Keep).unwrap(), "ve");
        assert_eq!(stemmer.stem("dementemente", Accents::Keep).unwrap(), "de");
        assert_eq!(stemmer.stem("clementemente", Accents::Keep).unwrap(), "cl");
    }

    #[test]
    fn test_bare_suffix_becomes_empty() {
        let stemmer = stemmer();
        assert_eq!(stemmer.stem("mente", Accents::Keep).unwrap(), "");
    }

    #[test]
    fn test_rejects_invalid_input() {
        let stemmer = stemmer();
        assert!(matches!(
            stemmer.stem("", Accents::Keep),
            Err(StemmerError::InvalidInput { .. })
        ));
        assert!(stemmer.trace("Casas", Accents::Keep).is_err());
        assert!(stemmer.reduce(Phase::Noun, "casa!").is_err());
        assert!(stemmer.remove_vowel("").is_err());
    }

    #[test]
    fn test_builder_strategy() {
        let walk = Stemmer::builder()
            .strategy(MatchStrategy::StateWalk)
            .build()
            .unwrap();
        assert_eq!(walk.strategy(), MatchStrategy::StateWalk);
        assert_eq!(walk.stem("cães", Accents::Keep).unwrap(), "cã");
        assert!(Arc::ptr_eq(walk.rules(), stemmer().rules()));
    }
}
