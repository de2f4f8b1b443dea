//! Trace command implementation

use anyhow::Result;
use clap::Args;
use rslp_core::{Accents, Outcome, Stage, StemTrace, Stemmer};
use std::path::PathBuf;

use super::{build_stemmer, load_rules, StrategyArg};

/// Arguments for the trace command
#[derive(Debug, Args)]
pub struct TraceArgs {
    /// Word to stem
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Strip accents from the final stem
    #[arg(long)]
    pub remove_accents: bool,

    /// Matching strategy
    #[arg(short, long, value_enum, default_value = "scan")]
    pub strategy: StrategyArg,

    /// External rule file
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,
}

impl TraceArgs {
    /// Execute the trace command
    pub fn execute(&self) -> Result<()> {
        let stemmer = build_stemmer(load_rules(self.rules.as_deref())?, self.strategy.into())?;
        let trace = stemmer.trace(&self.word, Accents::from(self.remove_accents))?;
        print!("{}", render(&stemmer, &trace));
        Ok(())
    }
}

/// One line per stage that ran, then the stem
pub fn render(stemmer: &Stemmer, trace: &StemTrace) -> String {
    let mut out = String::new();
    for step in &trace.steps {
        let detail = match (step.stage, step.outcome) {
            (Stage::Reduction(phase), Some(outcome)) => {
                let suffix = outcome
                    .rule()
                    .and_then(|index| stemmer.rules().table(phase).get(index))
                    .map(|rule| rule.suffix().to_string())
                    .unwrap_or_default();
                match outcome {
                    Outcome::NoMatch => "no rule matched".to_string(),
                    Outcome::StemTooShort { .. } => format!("-{suffix}: stem too short"),
                    Outcome::Exception { .. } => format!("-{suffix}: exception"),
                    Outcome::Applied { .. } => format!("-{suffix} removed"),
                }
            }
            _ if step.changed() => "changed".to_string(),
            _ => "unchanged".to_string(),
        };
        out.push_str(&format!(
            "{:<9} {} -> {}  ({})\n",
            step.stage.name(),
            step.input,
            step.output,
            detail
        ));
    }
    out.push_str(&format!("stem: {}\n", trace.stem));
    out
}
