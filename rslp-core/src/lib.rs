//! RSLP suffix-stripping stemmer for Portuguese
//!
//! Words are reduced by successive rule tables (plural, feminine, degree,
//! adverb, noun, verb) followed by a final-vowel fallback and, optionally,
//! accent removal. Each rule carries a suffix, a minimum stem size, a
//! replacement and an exception list.
//!
//! Two matching strategies implement every phase:
//! - [`RuleScanMatcher`] scans the table in order and evaluates the first
//!   rule whose suffix ends the word;
//! - [`StateWalkMatcher`] walks the word backwards through a suffix trie
//!   compiled from the same table, rolling back to the deepest accepting
//!   state.
//!
//! Both select the same rule for every word, so the stems are identical.
//!
//! # Example
//!
//! ```rust
//! use rslp_core::{Accents, MatchStrategy, Stemmer};
//!
//! let stemmer = Stemmer::new().unwrap();
//! assert_eq!(stemmer.stem("bons", Accents::Keep).unwrap(), "bom");
//! assert_eq!(stemmer.stem("cantando", Accents::Keep).unwrap(), "cant");
//!
//! let walk = Stemmer::builder()
//!     .strategy(MatchStrategy::StateWalk)
//!     .build()
//!     .unwrap();
//! assert_eq!(walk.stem("felizmente", Accents::Keep).unwrap(), "feliz");
//! ```

#![warn(missing_debug_implementations)]

pub mod accents;
pub mod error;
pub mod matcher;
pub mod phase;
pub mod rules;
pub mod stemmer;
pub mod word;

pub use accents::remove_accents;
pub use error::{ExceptionListError, Result, StemmerError};
pub use matcher::{
    build_matcher, Outcome, Reduction, RuleScanMatcher, StateWalkMatcher, SuffixMatcher,
};
pub use phase::{Accents, MatchStrategy, Phase};
pub use rules::{ExceptionSet, RuleSet, RuleTable, StrippingRule};
pub use stemmer::{Stage, StemTrace, Stemmer, StemmerBuilder, Step};
pub use word::validate_word;
