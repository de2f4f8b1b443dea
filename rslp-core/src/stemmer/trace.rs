//! Step-by-step record of one pipeline run

use std::fmt;

use crate::matcher::Outcome;
use crate::phase::Phase;

/// A pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// A rule-table phase
    Reduction(Phase),
    /// The final-vowel fallback
    VowelRemoval,
    /// The accent normalizer
    AccentRemoval,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Reduction(phase) => phase.name(),
            Stage::VowelRemoval => "vowel",
            Stage::AccentRemoval => "accents",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One stage that actually ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub stage: Stage,
    pub input: String,
    pub output: String,
    /// Set for rule-table phases only
    pub outcome: Option<Outcome>,
}

impl Step {
    /// Whether the stage changed the word
    pub fn changed(&self) -> bool {
        self.input != self.output
    }
}

/// Final stem plus every stage invoked, in order. Skipped stages are absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemTrace {
    pub stem: String,
    pub steps: Vec<Step>,
}

impl StemTrace {
    /// Whether `stage` was invoked
    pub fn ran(&self, stage: Stage) -> bool {
        self.steps.iter().any(|step| step.stage == stage)
    }

    /// The step recorded for `stage`, if it ran
    pub fn step(&self, stage: Stage) -> Option<&Step> {
        self.steps.iter().find(|step| step.stage == stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names() {
        assert_eq!(Stage::Reduction(Phase::Noun).to_string(), "noun");
        assert_eq!(Stage::VowelRemoval.to_string(), "vowel");
        assert_eq!(Stage::AccentRemoval.to_string(), "accents");
    }

    #[test]
    fn test_lookup() {
        let trace = StemTrace {
            stem: "bom".to_string(),
            steps: vec![Step {
                stage: Stage::Reduction(Phase::Plural),
                input: "bons".to_string(),
                output: "bom".to_string(),
                outcome: Some(Outcome::Applied { rule: 0 }),
            }],
        };
        assert!(trace.ran(Stage::Reduction(Phase::Plural)));
        assert!(!trace.ran(Stage::VowelRemoval));
        assert!(trace.step(Stage::Reduction(Phase::Plural)).unwrap().changed());
    }
}
