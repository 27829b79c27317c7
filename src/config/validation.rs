//! Configuration validation for dsar-readiness.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, BehaviorConfig, CatalogueConfig, OutputConfig, ReportOptions};
use crate::error::AssessmentError;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validate, folding every problem into a single error.
    fn ensure_valid(&self) -> crate::error::Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(());
        }
        for error in &errors {
            tracing::error!("{error}");
        }
        let problems: Vec<String> = errors.iter().map(ToString::to_string).collect();
        Err(AssessmentError::validation(problems.join("; ")))
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.catalogue.validate());
        errors.extend(self.output.validate());
        errors.extend(self.report.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for CatalogueConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(ref path) = self.path {
            if !path.exists() {
                errors.push(ConfigError {
                    field: "catalogue.path".to_string(),
                    message: format!("Catalogue file not found: {}", path.display()),
                });
            }
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError {
                        field: "output.file".to_string(),
                        message: format!("Parent directory does not exist: {}", parent.display()),
                    });
                }
            }
        }

        errors
    }
}

impl Validatable for ReportOptions {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.max_findings == Some(0) {
            errors.push(ConfigError {
                field: "report.max_findings".to_string(),
                message: "Max findings must be at least 1".to_string(),
            });
        }
        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(score) = self.min_score {
            if score > 100 {
                errors.push(ConfigError {
                    field: "behavior.min_score".to_string(),
                    message: format!("Minimum score must be between 0 and 100, got {score}"),
                });
            }
        }
        errors
    }
}

// ============================================================================
// Tests
// ============================================================================
