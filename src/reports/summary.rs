//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::assessment::{AssessmentReport, Tier};
use crate::model::{OrganisationProfile, Severity};
use unicode_width::UnicodeWidthStr;

const BAR_WIDTH: usize = 20;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "bright_red" => format!("\x1b[1;31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn tier_color(tier: Tier) -> &'static str {
    match tier {
        Tier::Positive => "green",
        Tier::Caution => "yellow",
        Tier::Warning => "red",
        Tier::Severe => "bright_red",
    }
}

const fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "bright_red",
        Severity::High => "red",
        Severity::Medium => "yellow",
        Severity::Low => "dim",
    }
}

/// Pad to a display width, accounting for wide characters.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

fn bar(percentage: u8) -> String {
    let filled = usize::from(percentage.min(100)) * BAR_WIDTH / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn describe_organisation(profile: &OrganisationProfile) -> Option<String> {
    if profile.is_empty() {
        return None;
    }
    let mut details = Vec::new();
    if let Some(sector) = &profile.sector {
        details.push(sector.clone());
    }
    if let Some(employees) = &profile.employees {
        details.push(format!("{employees} employees"));
    }
    if let Some(requests) = &profile.annual_requests {
        details.push(format!("{requests} requests/year"));
    }
    let name = profile.name.as_deref().unwrap_or("Unnamed organisation");
    if details.is_empty() {
        Some(name.to_string())
    } else {
        Some(format!("{name} ({})", details.join(", ")))
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, report: &AssessmentReport, config: &ReportConfig) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let band_color = tier_color(report.band.tier());

        lines.push(self.color(config.title_or(&report.metadata.catalogue_name), "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        if let Some(org) = describe_organisation(&report.metadata.organisation) {
            lines.push(format!("{}  {}", self.color("Organisation:", "cyan"), org));
        }
        lines.push(format!(
            "{}  {}  {}",
            self.color("Score:", "cyan"),
            self.color(&format!("{}%", report.overall_percentage), band_color),
            self.color(report.band.label(), band_color)
        ));
        lines.push(self.color(&format!("Based on {}", report.progress), "dim"));
        lines.push(String::new());
        lines.push(report.summary.narrative.clone());

        let sections: Vec<_> = report
            .visible_sections(config.include_unanswered_sections)
            .collect();
        if !sections.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Sections:", "bold"));
            let label_width = sections
                .iter()
                .map(|s| section_heading(s.icon.as_deref(), &s.label).width())
                .max()
                .unwrap_or(0);
            for section in sections {
                let heading = section_heading(section.icon.as_deref(), &section.label);
                let color = tier_color(section.band().tier());
                lines.push(format!(
                    "  {}  {}  {}  {}",
                    pad(&heading, label_width),
                    self.color(&format!("{:>3}%", section.percentage), color),
                    self.color(&bar(section.percentage), color),
                    self.color(
                        &format!("{}/{} answered", section.answered_count, section.total_questions),
                        "dim"
                    )
                ));
            }
        }

        lines.push(String::new());
        let summary = &report.summary;
        if summary.total() == 0 {
            lines.push(format!(
                "{}  {}",
                self.color("Findings:", "bold"),
                self.color("No gaps identified", "green")
            ));
        } else {
            let counts: Vec<String> = Severity::ALL
                .iter()
                .filter(|severity| summary.count_for(**severity) > 0)
                .map(|severity| {
                    self.color(
                        &format!(
                            "{} {}",
                            summary.count_for(*severity),
                            severity.label().to_lowercase()
                        ),
                        severity_color(*severity),
                    )
                })
                .collect();
            lines.push(format!(
                "{}  {} ({} quick {})",
                self.color("Findings:", "bold"),
                counts.join(", "),
                summary.quick_win_count,
                if summary.quick_win_count == 1 { "win" } else { "wins" }
            ));
        }

        let urgent = report.urgent_findings().count();
        if urgent > 0 {
            lines.push(self.color(
                &format!(
                    "! {urgent} critical {} not started",
                    if urgent == 1 { "gap" } else { "gaps" }
                ),
                "bright_red",
            ));
        }

        let plan = report.action_plan(config.min_severity, config.max_findings);
        if !plan.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Action plan:", "bold"));
            for (rank, finding) in plan.iter().enumerate() {
                lines.push(format!(
                    "  {:>2}. {} {}  {}",
                    rank + 1,
                    self.color(
                        &format!("[{}]", finding.severity.label()),
                        severity_color(finding.severity)
                    ),
                    self.color(finding.status_label(), "cyan"),
                    finding.question_text
                ));
                lines.push(format!(
                    "      {} {}",
                    self.color(&format!("{} ·", finding.effort.label()), "dim"),
                    finding.remediation
                ));
            }
            let hidden = report.findings.len() - plan.len();
            if hidden > 0 {
                lines.push(self.color(&format!("  … {hidden} more not shown"), "dim"));
            }
        }

        let mut output = lines.join("\n");
        output.push('\n');
        Ok(output)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

fn section_heading(icon: Option<&str>, label: &str) -> String {
    match icon {
        Some(icon) => format!("{icon} {label}"),
        None => label.to_string(),
    }
}
