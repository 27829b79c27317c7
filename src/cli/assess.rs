//! Assess command handler.
//!
//! Implements the `assess` subcommand: load the catalogue and an answer
//! sheet, score them, render the report and apply the CI gates.

use crate::assessment::{AssessmentReport, ReadinessScorer};
use crate::config::{AppConfig, BehaviorConfig, Validatable};
use crate::pipeline::{exit_codes, load_answers, load_catalogue, output_report};
use anyhow::Result;
use std::path::PathBuf;

/// Run the assess command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_assess(answers_path: PathBuf, config: AppConfig) -> Result<i32> {
    config.ensure_valid()?;

    let catalogue = load_catalogue(config.catalogue.path.as_deref())?;
    let loaded = load_answers(&answers_path, &catalogue, config.behavior.strict_answers)?;

    let report = ReadinessScorer::new(&catalogue)
        .assess(&loaded.answers)
        .with_organisation(loaded.organisation);

    output_report(&report, &config)?;

    Ok(gate_exit_code(&report, &config.behavior))
}

/// Exit code for a report under the configured gates.
///
/// Urgent critical gaps take precedence over a low score.
#[must_use]
pub fn gate_exit_code(report: &AssessmentReport, behavior: &BehaviorConfig) -> i32 {
    if behavior.fail_on_critical && report.has_urgent_findings() {
        tracing::error!(
            "{} critical question(s) answered non-compliant",
            report.urgent_findings().count()
        );
        return exit_codes::CRITICAL_GAPS;
    }

    if let Some(min_score) = behavior.min_score {
        if report.overall_percentage < min_score {
            tracing::error!(
                "Readiness score {}% is below minimum {}%",
                report.overall_percentage,
                min_score
            );
            return exit_codes::BELOW_THRESHOLD;
        }
    }

    exit_codes::SUCCESS
}
