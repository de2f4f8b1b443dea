//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs word/stem pairs as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    stems: Vec<StemData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct StemData {
    /// The input word
    pub word: String,
    /// Its stem
    pub stem: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            stems: Vec::new(),
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_stem(&mut self, word: &str, stem: &str) -> Result<()> {
        self.stems.push(StemData {
            word: word.to_string(),
            stem: stem.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.stems)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.stems)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
