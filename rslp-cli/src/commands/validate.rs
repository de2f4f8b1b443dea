//! Validate command implementation

use anyhow::Result;
use clap::Args;
use rslp_core::{Phase, RuleSet};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the rule file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub rules: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating rule file: {}", self.rules.display());

        match RuleSet::from_file(&self.rules) {
            Ok(rules) => {
                println!("✓ Rule file is valid!");
                println!("  Code: {}", rules.code());
                println!("  Name: {}", rules.name());
                for phase in Phase::ALL {
                    println!("  {:<9} {} rules", phase.name(), rules.table(phase).len());
                }
                println!(
                    "  {:<9} {} exceptions",
                    "vowel",
                    rules.vowel_exceptions().len()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Rule file is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const VALID: &str = r#"
[metadata]
code = "test"
name = "Test Rules"

[[plural]]
suffix = "s"
min_stem = 2

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
    fn test_validate_valid_rules() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", VALID).unwrap();

        let args = ValidateArgs {
            rules: temp_file.path().to_path_buf(),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_shadowed_rule() {
        let broken = VALID.replace(
            "[[plural]]\nsuffix = \"s\"\nmin_stem = 2\n",
            "[[plural]]\nsuffix = \"s\"\nmin_stem = 2\n\n[[plural]]\nsuffix = \"ns\"\nmin_stem = 1\nreplacement = \"m\"\n",
        );
        assert_ne!(broken, VALID);

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", broken).unwrap();

        let args = ValidateArgs {
            rules: temp_file.path().to_path_buf(),
        };
        let error = args.execute().unwrap_err();
        assert!(error.to_string().contains("unreachable"));
    }
}
