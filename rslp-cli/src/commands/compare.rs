//! Compare command implementation

use anyhow::Result;
use clap::Args;
use rslp_core::{validate_word, Accents, MatchStrategy, Phase, RuleSet, Stemmer};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use super::{build_stemmer, load_rules, read_sources, Source};
use crate::error::CliError;
use crate::input::words;

/// Arguments for the compare command
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Input files or patterns (supports glob); standard input if omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// External rule file
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,
}

/// A word on which the two strategies disagree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divergence {
    pub word: String,
    /// Phase name, or "full" / "full+accents" for the pipeline
    pub stage: String,
    pub scan: String,
    pub walk: String,
}

/// Totals of one compare run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub compared: usize,
    pub skipped: usize,
    pub divergences: usize,
}

impl Tally {
    /// `CliError::Divergence` if any word diverged
    pub fn into_result(self) -> Result<()> {
        if self.divergences > 0 {
            return Err(CliError::Divergence(self.divergences).into());
        }
        Ok(())
    }
}

/// A pair of stemmers checked against each other
pub struct Comparison {
    scan: Stemmer,
    walk: Stemmer,
}

impl Comparison {
    /// Both strategies over the same rule set
    pub fn new(rules: Arc<RuleSet>) -> Result<Self> {
        Ok(Self::between(
            build_stemmer(Arc::clone(&rules), MatchStrategy::RuleScan)?,
            build_stemmer(rules, MatchStrategy::StateWalk)?,
        ))
    }

    /// Any two stemmers; `scan` and `walk` only label the report columns
    pub fn between(scan: Stemmer, walk: Stemmer) -> Self {
        Self { scan, walk }
    }

    /// Every phase and both pipeline modes for one valid word
    pub fn check(&self, word: &str) -> Result<Vec<Divergence>> {
        let mut divergences = Vec::new();

        for phase in Phase::ALL {
            let scan = self.scan.reduce(phase, word)?;
            let walk = self.walk.reduce(phase, word)?;
            if scan != walk {
                divergences.push(Divergence {
                    word: word.to_string(),
                    stage: phase.to_string(),
                    scan: format!("{} ({:?})", scan.word, scan.outcome),
                    walk: format!("{} ({:?})", walk.word, walk.outcome),
                });
            }
        }

        for (stage, accents) in [("full", Accents::Keep), ("full+accents", Accents::Remove)] {
            let scan = self.scan.stem(word, accents)?;
            let walk = self.walk.stem(word, accents)?;
            if scan != walk {
                divergences.push(Divergence {
                    word: word.to_string(),
                    stage: stage.to_string(),
                    scan,
                    walk,
                });
            }
        }

        Ok(divergences)
    }
}

impl Comparison {
    /// Check every valid word of `sources`, one line per divergence to `out`
    pub fn run(&self, sources: &[Source], out: &mut impl Write) -> Result<Tally> {
        let mut tally = Tally::default();
        for source in sources {
            for word in words(&source.text) {
                if let Err(e) = validate_word(&word) {
                    log::warn!("{}: {e}; skipping", source.label);
                    tally.skipped += 1;
                    continue;
                }

                for divergence in self.check(&word)? {
                    writeln!(
                        out,
                        "{}\t{}\tscan={}\twalk={}",
                        divergence.stage, divergence.word, divergence.scan, divergence.walk
                    )?;
                    tally.divergences += 1;
                }
                tally.compared += 1;
            }
        }
        Ok(tally)
    }
}

impl CompareArgs {
    /// Execute the compare command
    pub fn execute(&self) -> Result<()> {
        let comparison = Comparison::new(load_rules(self.rules.as_deref())?)?;
        let sources = read_sources(&self.input)?;

        let tally = comparison.run(&sources, &mut io::stdout().lock())?;
        eprintln!(
            "Compared {} words ({} skipped): {} divergence(s)",
            tally.compared, tally.skipped, tally.divergences
        );
        tally.into_result()
    }
}
