//! Report output stage.
//!
//! Resolves the output format, renders the report and writes it to the
//! configured destination.

use crate::assessment::AssessmentReport;
use crate::config::AppConfig;
use crate::reports::{create_reporter_with_options, ReportConfig, ReportFormat};
use anyhow::Result;

use super::{should_use_color, write_output, OutputTarget};

/// Render a report in the format implied by `config`.
///
/// Colour is only used for terminal summaries written to stdout.
pub fn render_report(report: &AssessmentReport, config: &AppConfig) -> Result<(ReportFormat, String)> {
    let target = OutputTarget::from_option(config.output.file.clone());
    let format = config.output.format.resolve(target.path());
    let use_color = format.supports_color()
        && target == OutputTarget::Stdout
        && should_use_color(config.output.no_color);

    let reporter = create_reporter_with_options(format, use_color);
    let rendered = reporter.generate(report, &ReportConfig::from(&config.report))?;
    Ok((format, rendered))
}

/// Output an assessment report to the configured destination.
pub fn output_report(report: &AssessmentReport, config: &AppConfig) -> Result<()> {
    let (format, rendered) = render_report(report, config)?;
    tracing::debug!("Rendering report as {format}");
    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&rendered, &target, config.behavior.quiet)
}
