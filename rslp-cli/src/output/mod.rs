//! Output formatting module

use anyhow::Result;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one input word with its stem
    fn format_stem(&mut self, word: &str, stem: &str) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One stem per line
    Text,
    /// JSON array of word/stem pairs
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = crate::error::CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(crate::error::CliError::ConfigError(format!(
                "unknown output format '{other}'"
            ))),
        }
    }
}

/// Writer the formatters write to
pub type Sink = Box<dyn Write + Send + Sync>;

/// Build the formatter for `format`
pub fn create_formatter(
    format: OutputFormat,
    writer: Sink,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
    }
}
