//! Configuration types for dsar-readiness.
//!
//! Provides structured configuration for assessments and report rendering.

use crate::model::Severity;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments override file settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Question catalogue selection
    pub catalogue: CatalogueConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Report content options
    pub report: ReportOptions,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Use a catalogue file instead of the built-in catalogue.
    pub fn catalogue_path(mut self, path: Option<PathBuf>) -> Self {
        self.config.catalogue.path = path;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Cap the number of action plan items.
    pub const fn max_findings(mut self, max: Option<usize>) -> Self {
        self.config.report.max_findings = max;
        self
    }

    /// Hide action plan items below this severity.
    pub const fn min_severity(mut self, severity: Option<Severity>) -> Self {
        self.config.report.min_severity = severity;
        self
    }

    /// Show sections with no answered questions.
    pub const fn include_unanswered_sections(mut self, include: bool) -> Self {
        self.config.report.include_unanswered_sections = include;
        self
    }

    /// Set the report title.
    pub fn title(mut self, title: Option<String>) -> Self {
        self.config.report.title = title;
        self
    }

    /// Exit with code 1 when the overall score is below this value.
    pub const fn min_score(mut self, score: Option<u8>) -> Self {
        self.config.behavior.min_score = score;
        self
    }

    /// Exit with code 2 when urgent critical gaps are present.
    pub const fn fail_on_critical(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_critical = fail;
        self
    }

    /// Treat unknown answer ids as errors.
    pub const fn strict_answers(mut self, strict: bool) -> Self {
        self.config.behavior.strict_answers = strict;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Question catalogue selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CatalogueConfig {
    /// Path to a YAML or JSON catalogue (built-in catalogue when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Report content options. These never change scores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ReportOptions {
    /// Maximum number of action plan items to render
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_findings: Option<usize>,
    /// Hide action plan items below this severity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_severity: Option<Severity>,
    /// Show sections that have no answers yet
    pub include_unanswered_sections: bool,
    /// Custom report title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Behavior flags for assessments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 if the overall score is below this percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<u8>,
    /// Exit with code 2 if any critical question is answered non-compliant
    pub fail_on_critical: bool,
    /// Reject answers for question ids not in the catalogue
    pub strict_answers: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}
