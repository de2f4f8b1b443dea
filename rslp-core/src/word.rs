//! Input validation for the public entry points

use crate::error::{Result, StemmerError};

/// Reject anything that is not a non-empty, lowercase, letters-only token.
///
/// The pipeline itself never indexes into the word, but the rule set is only
/// meaningful for isolated lowercase words, so callers get a clear error
/// instead of an arbitrary result.
pub fn validate_word(word: &str) -> Result<()> {
    if word.is_empty() {
        return Err(StemmerError::InvalidInput {
            word: String::new(),
            reason: "word is empty",
        });
    }

    for ch in word.chars() {
        if !ch.is_alphabetic() {
            return Err(StemmerError::InvalidInput {
                word: word.to_string(),
                reason: "word contains a non-letter character",
            });
        }
        if ch.is_uppercase() {
            return Err(StemmerError::InvalidInput {
                word: word.to_string(),
                reason: "word must be lowercase",
            });
        }
    }

    Ok(())
}

/// Length in characters, which is what every stem-size check counts
#[inline]
pub(crate) fn char_len(word: &str) -> usize {
    word.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_accented_lowercase() {
        assert!(validate_word("coração").is_ok());
        assert!(validate_word("freqüente").is_ok());
        assert!(validate_word("a").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        let err = validate_word("").unwrap_err();
        assert!(err.to_string().contains("word is empty"));
    }

    #[test]
    fn test_rejects_uppercase_and_punctuation() {
        assert!(matches!(
            validate_word("Casa"),
            Err(StemmerError::InvalidInput { .. })
        ));
        assert!(validate_word("guarda-chuva").is_err());
        assert!(validate_word("casa ").is_err());
        assert!(validate_word("casa1").is_err());
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(char_len("ão"), 2);
        assert_eq!("ão".len(), 3);
    }
}
