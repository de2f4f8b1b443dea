//! Error types for the stemmer

use thiserror::Error;

/// Errors raised by rule loading and by the public stemming entry points.
///
/// Expected stemming outcomes (no rule matched, a rule was blocked by an
/// exception) are values, never errors.
#[derive(Error, Debug)]
pub enum StemmerError {
    /// The word cannot be stemmed (empty, uppercase, non-letter characters)
    #[error("invalid input {word:?}: {reason}")]
    InvalidInput {
        /// The rejected word
        word: String,
        /// Why the word was rejected
        reason: &'static str,
    },

    /// A rule table failed load-time validation
    #[error("invalid {phase} rule table at suffix {suffix:?}: {reason}")]
    InvalidRuleTable {
        /// Name of the phase the table belongs to
        phase: String,
        /// Suffix of the offending rule
        suffix: String,
        /// What is wrong with it
        reason: String,
    },

    /// An exception list is out of order
    #[error("invalid {phase} rule table at suffix {suffix:?}: {source}")]
    InvalidExceptionList {
        /// Name of the phase, or "vowel"
        phase: String,
        /// Suffix of the rule owning the list
        suffix: String,
        #[source]
        source: ExceptionListError,
    },

    /// A rule file could not be parsed
    #[error("failed to parse rule file {origin}: {reason}")]
    RuleFile {
        /// Path or label of the rule source
        origin: String,
        /// Parser message
        reason: String,
    },

    /// Unknown phase name
    #[error("unknown phase '{0}'")]
    UnknownPhase(String),

    /// Unknown matching strategy name
    #[error("unknown matching strategy '{0}'")]
    UnknownStrategy(String),

    /// I/O error while reading a rule file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Ordering fault in an exception list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExceptionListError {
    /// The same word appears twice in a row
    #[error("exception {0:?} is listed twice")]
    Duplicate(String),

    /// A word sorts before the one listed ahead of it
    #[error("exception list is not sorted: {previous:?} precedes {next:?}")]
    Unsorted { previous: String, next: String },
}

impl StemmerError {
    pub(crate) fn invalid_table(
        phase: impl ToString,
        suffix: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        StemmerError::InvalidRuleTable {
            phase: phase.to_string(),
            suffix: suffix.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_exceptions(
        phase: impl ToString,
        suffix: impl Into<String>,
        source: ExceptionListError,
    ) -> Self {
        StemmerError::InvalidExceptionList {
            phase: phase.to_string(),
            suffix: suffix.into(),
            source,
        }
    }
}

/// Result type for stemmer operations
pub type Result<T> = std::result::Result<T, StemmerError>;
