//! Stem command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use rslp_core::{remove_accents, validate_word, Accents, Phase, Stemmer};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use super::{build_stemmer, load_rules, read_sources, StrategyArg};
use crate::config::CliConfig;
use crate::input::words;
use crate::output::{create_formatter, OutputFormat, Sink};
use crate::progress::ProgressReporter;

/// Arguments for the stem command
#[derive(Debug, Args)]
pub struct StemArgs {
    /// Input files or patterns (supports glob); standard input if omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pipeline stage to run
    #[arg(long, value_enum, default_value = "full")]
    pub phase: StageArg,

    /// Matching strategy
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Strip accents from the final stem (full pipeline only)
    #[arg(long)]
    pub remove_accents: bool,

    /// External rule file
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Stem each file's words in parallel
    #[arg(short, long)]
    pub parallel: bool,
}

/// Stage selectable with `--phase`
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StageArg {
    /// Complete pipeline
    Full,
    /// Plural reduction only
    Plural,
    /// Feminine reduction only
    Feminine,
    /// Augmentative/diminutive reduction only
    Degree,
    /// Adverb reduction only
    Adverb,
    /// Noun suffix reduction only
    Noun,
    /// Verb suffix reduction only
    Verb,
    /// Final vowel removal only
    Vowel,
    /// Accent removal only
    Accents,
}

impl StageArg {
    pub const ALL: [StageArg; 9] = [
        StageArg::Full,
        StageArg::Plural,
        StageArg::Feminine,
        StageArg::Degree,
        StageArg::Adverb,
        StageArg::Noun,
        StageArg::Verb,
        StageArg::Vowel,
        StageArg::Accents,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StageArg::Full => "full",
            StageArg::Vowel => "vowel",
            StageArg::Accents => "accents",
            other => other.phase().map_or("", Phase::name),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StageArg::Full => "complete pipeline",
            StageArg::Plural => "plural endings",
            StageArg::Feminine => "feminine endings",
            StageArg::Degree => "augmentative and diminutive endings",
            StageArg::Adverb => "the adverbial -mente",
            StageArg::Noun => "nominal suffixes",
            StageArg::Verb => "verbal suffixes",
            StageArg::Vowel => "final a/e/o removal",
            StageArg::Accents => "diacritic removal",
        }
    }

    /// Rule-table phase, if this stage is one
    pub fn phase(self) -> Option<Phase> {
        match self {
            StageArg::Plural => Some(Phase::Plural),
            StageArg::Feminine => Some(Phase::Feminine),
            StageArg::Degree => Some(Phase::Degree),
            StageArg::Adverb => Some(Phase::Adverb),
            StageArg::Noun => Some(Phase::Noun),
            StageArg::Verb => Some(Phase::Verb),
            StageArg::Full | StageArg::Vowel | StageArg::Accents => None,
        }
    }
}

/// Run one stage on one word. Words the stemmer rejects are echoed unchanged.
pub fn stem_word(stemmer: &Stemmer, stage: StageArg, word: &str, accents: Accents) -> String {
    let result = match stage {
        StageArg::Full => stemmer.stem(word, accents),
        StageArg::Vowel => stemmer.remove_vowel(word),
        StageArg::Accents => validate_word(word).map(|()| remove_accents(word)),
        other => match other.phase() {
            Some(phase) => stemmer.reduce(phase, word).map(|reduction| reduction.word),
            None => Ok(word.to_string()),
        },
    };

    result.unwrap_or_else(|e| {
        log::warn!("{e}; passing the word through unchanged");
        word.to_string()
    })
}

impl StemArgs {
    /// Execute the stem command. `quiet` suppresses the progress bar.
    pub fn execute(&self, quiet: bool) -> Result<()> {
        log::info!("Starting stemming");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let strategy = match self.strategy {
            Some(arg) => arg.into(),
            None => config.stemming.strategy()?,
        };
        let accents = if self.remove_accents {
            Accents::Remove
        } else {
            config.stemming.accents()
        };
        let format = match self.format {
            Some(format) => format,
            None => config.output.format.parse()?,
        };

        let stemmer = build_stemmer(load_rules(self.rules.as_deref())?, strategy)?;
        let sources = read_sources(&self.input)?;

        let writer: Sink = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(BufWriter::new(io::stdout())),
        };
        let mut formatter = create_formatter(format, writer, config.output.pretty_json);

        let mut progress = ProgressReporter::new(quiet);
        if sources.len() > 1 {
            progress.init_files(sources.len() as u64);
        }

        let mut total = 0;
        for source in &sources {
            let words = words(&source.text);
            let stems: Vec<String> = if self.parallel {
                words
                    .par_iter()
                    .map(|word| stem_word(&stemmer, self.phase, word, accents))
                    .collect()
            } else {
                words
                    .iter()
                    .map(|word| stem_word(&stemmer, self.phase, word, accents))
                    .collect()
            };

            for (word, stem) in words.iter().zip(&stems) {
                formatter.format_stem(word, stem)?;
            }

            total += words.len();
            progress.file_completed(&source.label, words.len());
        }

        formatter.finish()?;
        progress.finish();
        log::info!(
            "stemmed {} words from {} source(s) using {}",
            total,
            sources.len(),
            strategy
        );
        Ok(())
    }
}
