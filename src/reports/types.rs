//! Report type definitions.

use crate::config::ReportOptions;
use crate::model::Severity;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect from the output file extension, summary otherwise
    #[default]
    Auto,
    /// Terminal summary with action plan
    Summary,
    /// Structured JSON output
    Json,
    /// Human-readable Markdown
    #[value(alias = "md")]
    Markdown,
    /// CSV action plan for spreadsheet import
    Csv,
}

impl ReportFormat {
    /// Resolve `Auto` using the output file extension.
    #[must_use]
    pub fn resolve(self, output_file: Option<&Path>) -> Self {
        if self != Self::Auto {
            return self;
        }
        let extension = output_file
            .and_then(Path::extension)
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Self::Json,
            Some("md" | "markdown") => Self::Markdown,
            Some("csv") => Self::Csv,
            _ => Self::Summary,
        }
    }

    /// Whether the format can carry ANSI colour codes.
    #[must_use]
    pub const fn supports_color(self) -> bool {
        matches!(self, Self::Auto | Self::Summary)
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Maximum action plan items
    pub max_findings: Option<usize>,
    /// Hide action plan items below this severity
    pub min_severity: Option<Severity>,
    /// Render sections with no answers
    pub include_unanswered_sections: bool,
}

impl ReportConfig {
    /// Title to render, defaulting to the catalogue name.
    #[must_use]
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(fallback)
    }
}

impl From<&ReportOptions> for ReportConfig {
    fn from(options: &ReportOptions) -> Self {
        Self {
            title: options.title.clone(),
            max_findings: options.max_findings,
            min_severity: options.min_severity,
            include_unanswered_sections: options.include_unanswered_sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_resolves_by_extension() {
        let auto = ReportFormat::Auto;
        assert_eq!(auto.resolve(Some(Path::new("out.json"))), ReportFormat::Json);
        assert_eq!(auto.resolve(Some(Path::new("out.MD"))), ReportFormat::Markdown);
        assert_eq!(auto.resolve(Some(Path::new("plan.csv"))), ReportFormat::Csv);
        assert_eq!(auto.resolve(Some(Path::new("report.txt"))), ReportFormat::Summary);
        assert_eq!(auto.resolve(None), ReportFormat::Summary);
    }

    #[test]
    fn test_explicit_format_wins() {
        assert_eq!(
            ReportFormat::Csv.resolve(Some(Path::new("out.json"))),
            ReportFormat::Csv
        );
    }

    #[test]
    fn test_report_config_from_options() {
        let options = ReportOptions {
            max_findings: Some(3),
            min_severity: Some(Severity::High),
            include_unanswered_sections: true,
            title: Some("Acme".to_string()),
        };
        let config = ReportConfig::from(&options);
        assert_eq!(config.max_findings, Some(3));
        assert_eq!(config.title_or("fallback"), "Acme");
        assert_eq!(ReportConfig::default().title_or("fallback"), "fallback");
    }
}
