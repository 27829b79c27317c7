//! Unified error types for dsar-readiness.
//!
//! The scoring engine itself is total and never fails. Errors only arise
//! at the edges: loading catalogues and answer sheets, guarding
//! `set_answer` against unknown identifiers, and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dsar-readiness operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AssessmentError {
    /// Errors while loading or validating a question catalogue
    #[error("Invalid catalogue: {context}")]
    Catalogue {
        context: String,
        #[source]
        source: CatalogueErrorKind,
    },

    /// Errors while loading or applying answers
    #[error("Invalid answers: {context}")]
    Answers {
        context: String,
        #[source]
        source: AnswerErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific catalogue error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogueErrorKind {
    #[error("Duplicate section id: {0}")]
    DuplicateSection(String),

    #[error("Duplicate question id: {0}")]
    DuplicateQuestion(String),

    #[error("Question '{question}' references unknown section '{section}'")]
    UnknownSection { question: String, section: String },

    #[error("Section '{section}' references unknown question '{question}'")]
    UnknownQuestion { section: String, question: String },

    #[error("Question '{question}' is listed in more than one section ({first}, {second})")]
    QuestionInMultipleSections {
        question: String,
        first: String,
        second: String,
    },

    #[error("Question '{question}' declares section '{declared}' but is listed under '{listed}'")]
    SectionMismatch {
        question: String,
        declared: String,
        listed: String,
    },

    #[error("Question '{question}' is not listed by any section")]
    OrphanQuestion { question: String },

    #[error("Question '{question}' has weight {weight} (expected 1, 2 or 3)")]
    InvalidWeight { question: String, weight: u8 },

    #[error("Empty {field} on '{id}'")]
    EmptyText { id: String, field: &'static str },

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),
}

/// Specific answer error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerErrorKind {
    #[error("Unknown question id '{id}'{}", suggestion_hint(.suggestion))]
    UnknownQuestion {
        id: String,
        suggestion: Option<String>,
    },

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{s}'?)"))
        .unwrap_or_default()
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for dsar-readiness operations
pub type Result<T> = std::result::Result<T, AssessmentError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl AssessmentError {
    /// Create a catalogue error with context
    pub fn catalogue(context: impl Into<String>, source: CatalogueErrorKind) -> Self {
        Self::Catalogue {
            context: context.into(),
            source,
        }
    }

    /// Create an answers error with context
    pub fn answers(context: impl Into<String>, source: AnswerErrorKind) -> Self {
        Self::Answers {
            context: context.into(),
            source,
        }
    }

    /// Create an unknown-question error, optionally naming the closest match
    pub fn unknown_question(id: impl Into<String>, suggestion: Option<String>) -> Self {
        Self::answers(
            "set answer",
            AnswerErrorKind::UnknownQuestion {
                id: id.into(),
                suggestion,
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for AssessmentError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are prepended to the existing context, so a failure
/// three layers deep reads `"outer: middle: inner"`.
///
/// ```ignore
/// use dsar_readiness::error::ErrorContext;
///
/// let catalogue = load_catalogue(&path)
///     .with_context(|| format!("loading catalogue from {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<AssessmentError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: AssessmentError, new_ctx: &str) -> AssessmentError {
    match err {
        AssessmentError::Catalogue {
            context: existing,
            source,
        } => AssessmentError::Catalogue {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AssessmentError::Answers {
            context: existing,
            source,
        } => AssessmentError::Answers {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AssessmentError::Io {
            path,
            message,
            source,
        } => AssessmentError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        AssessmentError::Config(msg) => AssessmentError::Config(chain_context(new_ctx, &msg)),
        AssessmentError::Validation(msg) => {
            AssessmentError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Chain two context strings together as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_question_display_includes_suggestion() {
        let err = AssessmentError::unknown_question("gov-9", Some("gov-1".to_string()));
        let AssessmentError::Answers { source, .. } = &err else {
            panic!("Expected Answers error");
        };
        let display = source.to_string();
        assert!(display.contains("gov-9"), "{display}");
        assert!(display.contains("did you mean 'gov-1'"), "{display}");
    }

    #[test]
    fn test_unknown_question_display_without_suggestion() {
        let kind = AnswerErrorKind::UnknownQuestion {
            id: "zzz".to_string(),
            suggestion: None,
        };
        assert_eq!(kind.to_string(), "Unknown question id 'zzz'");
    }

    #[test]
    fn test_io_error_mentions_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = AssessmentError::io("/path/to/answers.yaml", io_err);
        assert!(err.to_string().contains("/path/to/answers.yaml"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(AssessmentError::catalogue(
                "base",
                CatalogueErrorKind::DuplicateSection("governance".to_string()),
            ))
        }

        fn middle() -> Result<()> {
            inner().context("middle layer")
        }

        fn outer() -> Result<()> {
            middle().context("outer layer")
        }

        match outer() {
            Err(AssessmentError::Catalogue { context, source }) => {
                assert_eq!(context, "outer layer: middle layer: base");
                assert_eq!(
                    source,
                    CatalogueErrorKind::DuplicateSection("governance".to_string())
                );
            }
            other => panic!("Expected Catalogue error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(AssessmentError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
