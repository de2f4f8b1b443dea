//! Dump-rules command implementation

use anyhow::Result;
use clap::Args;
use rslp_core::{Phase, RuleSet, StrippingRule};
use std::fmt::Write as _;
use std::path::PathBuf;

use super::{load_rules, PhaseArg};

/// Arguments for the dump-rules command
#[derive(Debug, Args)]
pub struct DumpRulesArgs {
    /// Only this phase's table
    #[arg(long, value_enum)]
    pub phase: Option<PhaseArg>,

    /// External rule file instead of the built-in rules
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,
}

impl DumpRulesArgs {
    /// Execute the dump-rules command
    pub fn execute(&self) -> Result<()> {
        let rules = load_rules(self.rules.as_deref())?;
        let phases: Vec<Phase> = match self.phase {
            Some(phase) => vec![phase.into()],
            None => Phase::ALL.to_vec(),
        };
        print!("{}", render(&rules, &phases, self.phase.is_none()));
        Ok(())
    }
}

fn render_rule(out: &mut String, index: usize, rule: &StrippingRule) {
    let _ = write!(
        out,
        "{:>3}  -{} -> -{}  min {}",
        index,
        rule.suffix(),
        rule.replacement(),
        rule.min_stem()
    );
    if let Some(exceptions) = rule.exceptions() {
        let _ = write!(out, "  exceptions {}", exceptions.len());
    }
    if rule.replaces_all() {
        out.push_str("  all occurrences");
    }
    if let Some((word, stem)) = rule.example() {
        let _ = write!(out, "  e.g. {word} -> {stem}");
    }
    out.push('\n');
}

/// Rule tables as text; `with_vowel` appends the vowel exceptions
pub fn render(rules: &RuleSet, phases: &[Phase], with_vowel: bool) -> String {
    let mut out = String::new();
    for (position, &phase) in phases.iter().enumerate() {
        if position > 0 {
            out.push('\n');
        }
        let table = rules.table(phase);
        let _ = writeln!(out, "[{}] {} rules", phase, table.len());
        for (index, rule) in table.rules().iter().enumerate() {
            render_rule(&mut out, index, rule);
        }
    }

    if with_vowel {
        let exceptions: Vec<&str> = rules.vowel_exceptions().iter().collect();
        let _ = writeln!(out, "\n[vowel] exceptions: {}", exceptions.join(", "));
    }
    out
}
