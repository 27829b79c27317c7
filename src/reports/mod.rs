//! Report generation for assessment results.
//!
//! This module provides multiple output formats for an [`AssessmentReport`]:
//! - Summary: Compact terminal output with the action plan
//! - JSON: Structured data for programmatic integration
//! - Markdown: Human-readable documentation
//! - CSV: Action plan for spreadsheet import
//!
//! # Security
//!
//! The `escape` module provides utilities for safe output generation.
//! Catalogue and organisation text should be escaped before embedding in
//! Markdown or CSV reports.

mod csv;
pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat};

use crate::assessment::AssessmentReport;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render an assessment report
    fn generate(&self, report: &AssessmentReport, config: &ReportConfig) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Trait for writing reports directly to a [`Write`] sink.
///
/// Every `ReportGenerator` implements this through a blanket impl that
/// renders the full report string and writes it.
///
/// # Example
///
/// ```ignore
/// use dsar_readiness::reports::{JsonReporter, ReportConfig, WriterReporter};
/// use std::io::BufWriter;
/// use std::fs::File;
///
/// let file = File::create("readiness.json")?;
/// let mut writer = BufWriter::new(file);
/// JsonReporter::new().write_to(&report, &ReportConfig::default(), &mut writer)?;
/// ```
pub trait WriterReporter {
    /// Write a report to a writer.
    fn write_to<W: Write>(
        &self,
        report: &AssessmentReport,
        config: &ReportConfig,
        writer: &mut W,
    ) -> Result<(), ReportError>;
}

impl<T: ReportGenerator> WriterReporter for T {
    fn write_to<W: Write>(
        &self,
        report: &AssessmentReport,
        config: &ReportConfig,
        writer: &mut W,
    ) -> Result<(), ReportError> {
        let rendered = self.generate(report, config)?;
        writer.write_all(rendered.as_bytes())?;
        Ok(())
    }
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(format: ReportFormat, use_color: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
    }
}
