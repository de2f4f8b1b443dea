//! Accent normalizer
//!
//! A fixed substitution over the whole word. `ú` is deleted rather than
//! mapped to `u`; stems produced by the rule set rely on that.

/// Replacement for an accented vowel, `None` if the character is kept as is.
///
/// `Some("")` deletes the character.
#[inline]
fn plain(ch: char) -> Option<&'static str> {
    match ch {
        'à' | 'ã' | 'á' | 'â' => Some("a"),
        'é' | 'ê' => Some("e"),
        'í' => Some("i"),
        'ó' | 'õ' | 'ô' => Some("o"),
        'ú' => Some(""),
        _ => None,
    }
}

/// Strip the diacritics the rule set knows about.
///
/// Idempotent: the output never contains a character this function rewrites.
pub fn remove_accents(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for ch in word.chars() {
        match plain(ch) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowels_are_flattened() {
        assert_eq!(remove_accents("àãáâ"), "aaaa");
        assert_eq!(remove_accents("éê"), "ee");
        assert_eq!(remove_accents("í"), "i");
        assert_eq!(remove_accents("óõô"), "ooo");
    }

    #[test]
    fn test_u_acute_is_deleted() {
        assert_eq!(remove_accents("público"), "pblico");
        assert_eq!(remove_accents("cúmplice"), "cmplice");
    }

    #[test]
    fn test_other_characters_untouched() {
        assert_eq!(remove_accents("coração"), "coraçao");
        assert_eq!(remove_accents("freqüente"), "freqüente");
        assert_eq!(remove_accents("casa"), "casa");
        assert_eq!(remove_accents(""), "");
    }

    #[test]
    fn test_idempotent() {
        for word in ["país", "órfão", "úúa", "chinês", "lençóis"] {
            let once = remove_accents(word);
            assert_eq!(remove_accents(&once), once);
        }
    }
}
