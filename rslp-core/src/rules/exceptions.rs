//! Exception store
//!
//! A sorted word list per rule, queried by binary search. Ordering is the
//! plain `str` ordering, i.e. by Unicode code point.

use crate::error::ExceptionListError;

/// Sorted, duplicate-free list of words a rule must not reduce
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExceptionSet {
    words: Vec<String>,
}

impl ExceptionSet {
    /// Build from a list that must already be strictly ascending.
    ///
    /// Sorting is a load-time invariant of the rule data, so an out-of-order
    /// or duplicated entry is reported rather than fixed silently.
    pub fn new(words: Vec<String>) -> Result<Self, ExceptionListError> {
        if let Some(pair) = words.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(if pair[0] == pair[1] {
                ExceptionListError::Duplicate(pair[0].clone())
            } else {
                ExceptionListError::Unsorted {
                    previous: pair[0].clone(),
                    next: pair[1].clone(),
                }
            });
        }
        Ok(Self { words })
    }

    /// Exact membership test
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|candidate| candidate.as_str().cmp(word))
            .is_ok()
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in lookup order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// `true` only if `exceptions` is present and holds `word` exactly.
///
/// A missing list never exempts anything.
#[inline]
pub fn is_exception(word: &str, exceptions: Option<&ExceptionSet>) -> bool {
    exceptions.is_some_and(|set| set.contains(word))
}
