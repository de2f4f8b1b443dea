//! A single suffix-stripping rule

use super::exceptions::{is_exception, ExceptionSet};
use crate::word::char_len;

/// Suffix, minimum stem size, replacement and optional exceptions.
///
/// Lengths are cached in characters; the stem-size check compares characters,
/// not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrippingRule {
    suffix: String,
    suffix_len: usize,
    min_stem: usize,
    replacement: String,
    replacement_len: usize,
    exceptions: Option<ExceptionSet>,
    example: Option<(String, String)>,
    replace_all: bool,
}

impl StrippingRule {
    /// Rule without exceptions
    pub fn new(suffix: impl Into<String>, min_stem: usize, replacement: impl Into<String>) -> Self {
        let suffix = suffix.into();
        let replacement = replacement.into();
        Self {
            suffix_len: char_len(&suffix),
            replacement_len: char_len(&replacement),
            suffix,
            min_stem,
            replacement,
            exceptions: None,
            example: None,
            replace_all: false,
        }
    }

    /// Attach an exception list
    pub fn with_exceptions(mut self, exceptions: ExceptionSet) -> Self {
        self.exceptions = Some(exceptions);
        self
    }

    /// Attach a documented example (inflected word, expected stem)
    pub fn with_example(mut self, word: impl Into<String>, stem: impl Into<String>) -> Self {
        self.example = Some((word.into(), stem.into()));
        self
    }

    /// Replace every occurrence of the suffix, not only the trailing one.
    /// The rule is still selected by the word's ending.
    pub fn with_replace_all(mut self) -> Self {
        self.replace_all = true;
        self
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn min_stem(&self) -> usize {
        self.min_stem
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn exceptions(&self) -> Option<&ExceptionSet> {
        self.exceptions.as_ref()
    }

    pub fn replaces_all(&self) -> bool {
        self.replace_all
    }

    pub fn example(&self) -> Option<(&str, &str)> {
        self.example
            .as_ref()
            .map(|(word, stem)| (word.as_str(), stem.as_str()))
    }

    /// Whether `word` ends with this rule's suffix
    #[inline]
    pub fn matches(&self, word: &str) -> bool {
        word.ends_with(self.suffix.as_str())
    }

    /// Stem-size check: the reduced word (stem plus replacement) must keep at
    /// least `min_stem` characters.
    #[inline]
    pub fn fits(&self, word_len: usize) -> bool {
        word_len + self.replacement_len >= self.suffix_len + self.min_stem
    }

    /// Whether `word` is listed as an exception to this rule
    #[inline]
    pub fn is_exception(&self, word: &str) -> bool {
        is_exception(word, self.exceptions.as_ref())
    }

    /// Replace the suffix with the replacement. `word` must match the rule.
    pub(crate) fn strip(&self, word: &str) -> String {
        if self.replace_all {
            return word.replace(self.suffix.as_str(), &self.replacement);
        }

        let stem = &word[..word.len() - self.suffix.len()];
        let mut reduced = String::with_capacity(stem.len() + self.replacement.len());
        reduced.push_str(stem);
        reduced.push_str(&self.replacement);
        reduced
    }
}
