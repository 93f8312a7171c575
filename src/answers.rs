use crate::error::{RecheckError, Result};
use crate::types::assessment::{OptionIndex, Selection};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct AnswersFile {
    #[serde(default)]
    answers: BTreeMap<String, OptionIndex>,
}

/// Reads an answers file of the form `[answers]\nDQ1 = 2`.
pub fn load_answers(path: &Path) -> Result<Selection> {
    if !path.exists() {
        return Err(RecheckError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let file: AnswersFile = toml::from_str(&content)
        .map_err(|e| RecheckError::InvalidAnswer(format!("{}: {}", path.display(), e)))?;
    Ok(file.answers.into_iter().collect())
}

/// Later entries win, so flags override the file.
pub fn build_selection(
    file: Option<Selection>,
    overrides: &[(String, OptionIndex)],
) -> Selection {
    let mut selection = file.unwrap_or_default();
    for (id, index) in overrides {
        selection.select(id.clone(), *index);
    }
    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_answers_reads_table() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("answers.toml");
        fs::write(&path, "[answers]\nDQ1 = 2\nRS4 = 1\n").expect("answers should write");

        let selection = load_answers(&path).expect("answers should load");
        assert_eq!(selection.get("DQ1"), Some(2));
        assert_eq!(selection.get("RS4"), Some(1));
        assert_eq!(selection.get("DQ2"), None);
    }

    #[test]
    fn load_answers_rejects_non_integer_index() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("answers.toml");
        fs::write(&path, "[answers]\nDQ1 = \"high\"\n").expect("answers should write");

        let err = load_answers(&path).expect_err("string index should fail");
        assert!(matches!(err, RecheckError::InvalidAnswer(_)));
    }

    #[test]
    fn load_answers_reports_missing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_answers(&dir.path().join("nope.toml")).expect_err("missing file");
        assert!(matches!(err, RecheckError::PathNotFound(_)));
    }

    #[test]
    fn flags_override_file_entries() {
        let file: Selection = [("DQ1", 0), ("DQ2", 1)].into_iter().collect();
        let selection = build_selection(Some(file), &[("DQ1".to_string(), 2)]);
        assert_eq!(selection.get("DQ1"), Some(2));
        assert_eq!(selection.get("DQ2"), Some(1));
    }
}
