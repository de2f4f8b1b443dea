//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

use crate::error::CliError;

/// Resolve file patterns to actual file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::FileNotFound(patterns.join(", ")).into());
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolves_and_dedups() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "casas\n").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "bons\n").unwrap();
        fs::create_dir(temp_dir.path().join("dir.txt")).unwrap();

        let pattern = format!("{}/*.txt", temp_dir.path().display());
        let exact = format!("{}/a.txt", temp_dir.path().display());
        let files = resolve_patterns(&[pattern, exact]).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_no_match_is_file_not_found() {
        let error = resolve_patterns(&["/nonexistent/*.txt".to_string()]).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        let error = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }
}
