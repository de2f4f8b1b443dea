//! rslp CLI library
//!
//! Batch front end for the `rslp-core` stemmer: word lists in, stems out.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
