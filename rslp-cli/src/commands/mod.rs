//! CLI command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use rslp_core::{MatchStrategy, Phase, RuleSet, Stemmer};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::input::{resolve_patterns, FileReader};

pub mod compare;
pub mod dump_rules;
pub mod stem;
pub mod trace;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Stem newline-separated word lists
    Stem(stem::StemArgs),

    /// Run both matching strategies and report every divergence
    Compare(compare::CompareArgs),

    /// Show each pipeline step for one word
    Trace(trace::TraceArgs),

    /// Load and validate an external rule file
    Validate(validate::ValidateArgs),

    /// Print the effective rule tables
    DumpRules(dump_rules::DumpRulesArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List pipeline stages usable with `stem --phase`
    Phases,

    /// List matching strategies
    Strategies,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Phases => {
                for stage in stem::StageArg::ALL {
                    println!("{:<10} {}", stage.name(), stage.description());
                }
            }
            ListCommands::Strategies => {
                for strategy in MatchStrategy::ALL {
                    let description = match strategy {
                        MatchStrategy::RuleScan => "ordered scan over each rule table (default)",
                        MatchStrategy::StateWalk => "backward walk over a compiled suffix trie",
                    };
                    println!("{:<10} {}", strategy.name(), description);
                }
            }
        }
        Ok(())
    }
}

/// Matching strategy argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StrategyArg {
    /// Ordered rule scan
    Scan,
    /// State walk over the suffix trie
    Walk,
}

impl From<StrategyArg> for MatchStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Scan => MatchStrategy::RuleScan,
            StrategyArg::Walk => MatchStrategy::StateWalk,
        }
    }
}

/// Phase argument for commands that filter by rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PhaseArg {
    Plural,
    Feminine,
    Degree,
    Adverb,
    Noun,
    Verb,
}

impl From<PhaseArg> for Phase {
    fn from(arg: PhaseArg) -> Self {
        match arg {
            PhaseArg::Plural => Phase::Plural,
            PhaseArg::Feminine => Phase::Feminine,
            PhaseArg::Degree => Phase::Degree,
            PhaseArg::Adverb => Phase::Adverb,
            PhaseArg::Noun => Phase::Noun,
            PhaseArg::Verb => Phase::Verb,
        }
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

/// The embedded rules, or the rule file at `path`
pub fn load_rules(path: Option<&Path>) -> Result<Arc<RuleSet>> {
    match path {
        Some(path) => {
            let rules = RuleSet::from_file(path)
                .with_context(|| format!("Failed to load rules from {}", path.display()))?;
            log::info!("using rule file {} ({} rules)", path.display(), rules.rule_count());
            Ok(Arc::new(rules))
        }
        None => Ok(RuleSet::embedded()?),
    }
}

/// Build a stemmer over `rules` with `strategy`
pub fn build_stemmer(rules: Arc<RuleSet>, strategy: MatchStrategy) -> Result<Stemmer> {
    Ok(Stemmer::builder().rules(rules).strategy(strategy).build()?)
}

/// A named block of input text
#[derive(Debug)]
pub struct Source {
    /// File path, or "<stdin>"
    pub label: String,
    pub text: String,
}

/// Resolve `-i` patterns to sources; standard input when there are none
pub fn read_sources(inputs: &[String]) -> Result<Vec<Source>> {
    if inputs.is_empty() {
        return Ok(vec![Source {
            label: "<stdin>".to_string(),
            text: FileReader::read_stdin()?,
        }]);
    }

    resolve_patterns(inputs)?
        .into_iter()
        .map(|path: PathBuf| {
            Ok(Source {
                label: path.display().to_string(),
                text: FileReader::read_text(&path)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_strategy_arg_conversion() {
        assert_eq!(MatchStrategy::from(StrategyArg::Scan), MatchStrategy::RuleScan);
        assert_eq!(MatchStrategy::from(StrategyArg::Walk), MatchStrategy::StateWalk);
    }

    #[test]
    fn test_phase_arg_conversion() {
        assert_eq!(Phase::from(PhaseArg::Plural), Phase::Plural);
        assert_eq!(Phase::from(PhaseArg::Verb), Phase::Verb);
    }

    #[test]
    fn test_load_rules_embedded_and_missing() {
        assert_eq!(load_rules(None).unwrap().code(), "pt");
        let error = load_rules(Some(Path::new("/nonexistent/rules.toml"))).unwrap_err();
        assert!(error.to_string().contains("Failed to load rules"));
    }

    #[test]
    fn test_read_sources_from_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "bons\n").unwrap();
        fs::write(temp_dir.path().join("b.txt"), "casas\n").unwrap();

        let pattern = format!("{}/*.txt", temp_dir.path().display());
        let sources = read_sources(&[pattern]).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].text, "bons\n");
        assert!(sources[1].label.ends_with("b.txt"));
    }

    #[test]
    fn test_list_commands_execute() {
        assert!(ListCommands::Phases.execute().is_ok());
        assert!(ListCommands::Strategies.execute().is_ok());
    }
}
