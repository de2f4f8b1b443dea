//! Configuration structures for rule files
//!
//! This module defines the TOML schema the rule tables are written in.

use serde::{Deserialize, Serialize};

use crate::phase::Phase;

/// Root rule file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleFileConfig {
    pub metadata: Metadata,
    pub plural: Vec<RuleEntry>,
    pub feminine: Vec<RuleEntry>,
    pub degree: Vec<RuleEntry>,
    pub adverb: Vec<RuleEntry>,
    pub noun: Vec<RuleEntry>,
    pub verb: Vec<RuleEntry>,
    #[serde(default)]
    pub vowel: VowelConfig,
}

/// Rule set metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// One `[[phase]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleEntry {
    pub suffix: String,
    pub min_stem: usize,
    #[serde(default)]
    pub replacement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exceptions: Option<Vec<String>>,
    /// Remove every occurrence of the suffix once the word ends with it
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub replace_all: bool,
    /// Inflected word and its expected stem
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<(String, String)>,
}

/// Vowel-removal fallback settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VowelConfig {
    #[serde(default)]
    pub exceptions: Vec<String>,
}

impl RuleFileConfig {
    /// Entries for a phase
    pub fn entries(&self, phase: Phase) -> &[RuleEntry] {
        match phase {
            Phase::Plural => &self.plural,
            Phase::Feminine => &self.feminine,
            Phase::Degree => &self.degree,
            Phase::Adverb => &self.adverb,
            Phase::Noun => &self.noun,
            Phase::Verb => &self.verb,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[metadata]
code = "xx"
name = "Minimal"

[[plural]]
suffix = "s"
min_stem = 2
exceptions = ["lápis"]
example = ["casas", "casa"]

[[feminine]]
suffix = "ora"
min_stem = 3
replacement = "or"

[[degree]]
suffix = "inho"
min_stem = 3

[[adverb]]
suffix = "mente"
min_stem = 0

[[noun]]
suffix = "eza"
min_stem = 3

[[verb]]
suffix = "ando"
min_stem = 2
"#;

    #[test]
    fn test_parse_minimal() {
        let config: RuleFileConfig = toml::from_str(MINIMAL).unwrap();
        assert_eq!(config.metadata.code, "xx");
        assert_eq!(config.entries(Phase::Plural).len(), 1);

        let plural = &config.entries(Phase::Plural)[0];
        assert_eq!(plural.replacement, "");
        assert_eq!(plural.exceptions.as_deref(), Some(&["lápis".to_string()][..]));
        assert_eq!(
            plural.example,
            Some(("casas".to_string(), "casa".to_string()))
        );

        assert!(!plural.replace_all);
        assert!(config.entries(Phase::Adverb)[0].replace_all);

        assert_eq!(config.entries(Phase::Feminine)[0].replacement, "or");
        assert!(config.vowel.exceptions.is_empty());
    }

    #[test]
    fn test_negative_stem_size_is_rejected() {
        let broken = MINIMAL.replace("min_stem = 2", "min_stem = -1");
        assert!(toml::from_str::<RuleFileConfig>(&broken).is_err());
    }

    #[test]
    fn test_missing_phase_is_rejected() {
        let broken = MINIMAL.replace("[[verb]]", "[[verbs]]");
        assert!(toml::from_str::<RuleFileConfig>(&broken).is_err());
    }
}
