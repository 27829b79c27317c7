//! Loading catalogues and answer sheets from disk.

use crate::error::{ErrorContext, Result};
use crate::model::{AnswerSheet, AnswerStore, Catalogue, OrganisationProfile};
use std::borrow::Cow;
use std::io::Read;
use std::path::Path;

/// Answers read from a sheet, ready for scoring.
#[derive(Debug, Clone, Default)]
pub struct LoadedAnswers {
    pub organisation: OrganisationProfile,
    pub answers: AnswerStore,
}

/// Whether a path names a JSON document, by extension.
fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Read a file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    std::fs::read_to_string(path).map_err(|e| crate::error::AssessmentError::io(path, e))
}

/// Load the catalogue at `path`, or the built-in catalogue when `None`.
pub fn load_catalogue(path: Option<&Path>) -> Result<Cow<'static, Catalogue>> {
    let Some(path) = path else {
        return Ok(Cow::Borrowed(Catalogue::builtin()));
    };

    let content = read_input(path)?;
    let catalogue = if is_json(path) {
        Catalogue::from_json_str(&content)
    } else {
        Catalogue::from_yaml_str(&content)
    }
    .with_context(|| format!("loading catalogue from {}", path.display()))?;

    tracing::debug!(
        "Loaded catalogue '{}' with {} sections and {} questions",
        catalogue.name(),
        catalogue.sections().len(),
        catalogue.question_count()
    );
    Ok(Cow::Owned(catalogue))
}

/// Parse an answer sheet file. JSON by extension, YAML otherwise.
pub fn load_answer_sheet(path: &Path) -> Result<AnswerSheet> {
    let content = read_input(path)?;
    if is_json(path) {
        AnswerSheet::from_json_str(&content)
    } else {
        AnswerSheet::from_yaml_str(&content)
    }
    .with_context(|| format!("loading answers from {}", path.display()))
}

/// Load an answer sheet and check its ids against `catalogue`.
///
/// With `strict`, an unknown question id is an error; otherwise it is
/// logged and ignored by scoring.
pub fn load_answers(path: &Path, catalogue: &Catalogue, strict: bool) -> Result<LoadedAnswers> {
    let sheet = load_answer_sheet(path)?;
    let (organisation, answers) = sheet
        .into_store(catalogue, strict)
        .with_context(|| format!("applying answers from {}", path.display()))?;

    tracing::debug!(
        "Loaded {} answers ({} matching the catalogue)",
        answers.len(),
        answers.answered_in(catalogue)
    );
    Ok(LoadedAnswers {
        organisation,
        answers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AnswerErrorKind, AssessmentError};
    use crate::model::AnswerValue;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_catalogue_by_default() {
        let catalogue = load_catalogue(None).unwrap();
        assert!(matches!(catalogue, Cow::Borrowed(_)));
        assert_eq!(catalogue.question_count(), 41);
    }

    #[test]
    fn test_load_yaml_and_json_answers() {
        let tmp = TempDir::new().unwrap();
        let yaml = tmp.path().join("answers.yaml");
        std::fs::write(&yaml, "answers:\n  gov-1: yes\n  gov-2: partial\n").unwrap();
        let json = tmp.path().join("answers.JSON");
        std::fs::write(&json, r#"{"answers": {"gov-1": "no"}}"#).unwrap();

        let catalogue = Catalogue::builtin();
        let loaded = load_answers(&yaml, catalogue, true).unwrap();
        assert_eq!(loaded.answers.get("gov-1"), Some(AnswerValue::Compliant));
        assert_eq!(loaded.answers.len(), 2);

        let loaded = load_answers(&json, catalogue, true).unwrap();
        assert_eq!(loaded.answers.get("gov-1"), Some(AnswerValue::NonCompliant));
    }

    #[test]
    fn test_strict_error_carries_path_context() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("answers.yaml");
        std::fs::write(&path, "answers:\n  gov-01: yes\n").unwrap();

        match load_answers(&path, Catalogue::builtin(), true) {
            Err(AssessmentError::Answers { context, source }) => {
                assert!(context.starts_with("applying answers from"), "{context}");
                assert!(matches!(source, AnswerErrorKind::UnknownQuestion { .. }));
            }
            other => panic!("Expected Answers error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_answer_sheet(Path::new("/nonexistent/answers.yaml"));
        assert!(matches!(result, Err(AssessmentError::Io { .. })));
    }
}
