//! CSV report generator.
//!
//! Emits the ranked action plan as one row per finding, suitable for
//! spreadsheet import and tracking remediation work.

use super::escape::csv_field;
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::assessment::AssessmentReport;
use std::fmt::Write;

const HEADER: &str =
    "Rank,Priority,Severity,Effort,Status,Section,Question ID,Question,Remediation,Reference";

/// CSV action plan generator.
pub struct CsvReporter;

impl CsvReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReporter {
    fn generate(&self, report: &AssessmentReport, config: &ReportConfig) -> Result<String, ReportError> {
        let mut content = String::new();
        writeln!(content, "{HEADER}")?;

        for (idx, finding) in report
            .action_plan(config.min_severity, config.max_findings)
            .into_iter()
            .enumerate()
        {
            writeln!(
                content,
                "{},{},{},{},{},{},{},{},{},{}",
                idx + 1,
                finding.priority_score,
                finding.severity.label(),
                csv_field(finding.effort.timeframe()),
                finding.status_label(),
                csv_field(&finding.section_label),
                csv_field(&finding.question_id),
                csv_field(&finding.question_text),
                csv_field(&finding.remediation),
                csv_field(&finding.reference)
            )?;
        }

        Ok(content)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}
