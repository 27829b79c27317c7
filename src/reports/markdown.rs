//! Markdown report generator.

use super::escape::{escape_markdown_inline, escape_markdown_table, escape_md_opt};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::assessment::AssessmentReport;
use crate::model::Severity;
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, report: &AssessmentReport, config: &ReportConfig) -> Result<String, ReportError> {
        let mut md = String::new();
        let metadata = &report.metadata;

        writeln!(
            md,
            "# {}\n",
            escape_markdown_inline(config.title_or(&metadata.catalogue_name))
        )?;

        let org = &metadata.organisation;
        if !org.is_empty() {
            writeln!(md, "| Organisation | Sector | Employees | Requests per year |")?;
            writeln!(md, "|---|---|---|---|")?;
            writeln!(
                md,
                "| {} | {} | {} | {} |\n",
                escape_md_opt(org.name.as_deref()),
                escape_md_opt(org.sector.as_deref()),
                escape_md_opt(org.employees.as_deref()),
                escape_md_opt(org.annual_requests.as_deref())
            )?;
        }

        writeln!(
            md,
            "**Overall readiness: {}% ({})**\n",
            report.overall_percentage,
            report.band.label()
        )?;
        writeln!(md, "_Based on {}._\n", report.progress)?;

        writeln!(md, "## Executive summary\n")?;
        writeln!(md, "{}\n", report.summary.narrative)?;
        writeln!(md, "| Severity | Findings |")?;
        writeln!(md, "|---|---|")?;
        for severity in Severity::ALL {
            writeln!(md, "| {} | {} |", severity.label(), report.summary.count_for(severity))?;
        }
        writeln!(md, "| Quick wins | {} |\n", report.summary.quick_win_count)?;

        let urgent: Vec<_> = report.urgent_findings().collect();
        if !urgent.is_empty() {
            writeln!(md, "> **{} critical gap(s) not started:**", urgent.len())?;
            for finding in urgent {
                writeln!(md, "> - {}", escape_markdown_inline(&finding.question_text))?;
            }
            writeln!(md)?;
        }

        let sections: Vec<_> = report
            .visible_sections(config.include_unanswered_sections)
            .collect();
        if !sections.is_empty() {
            writeln!(md, "## Section scores\n")?;
            writeln!(
                md,
                "| Section | Score | Band | Compliant | Partial | Gaps | N/A | Unanswered |"
            )?;
            writeln!(md, "|---|---|---|---|---|---|---|---|")?;
            for section in sections {
                let heading = match &section.icon {
                    Some(icon) => format!("{icon} {}", section.label),
                    None => section.label.clone(),
                };
                writeln!(
                    md,
                    "| {} | {}% | {} | {} | {} | {} | {} | {} |",
                    escape_markdown_table(&heading),
                    section.percentage,
                    section.band().label(),
                    section.compliant_count,
                    section.partial_count,
                    section.gap_count,
                    section.not_applicable_count,
                    section.unanswered_count
                )?;
            }
            writeln!(md)?;
        }

        let plan = report.action_plan(config.min_severity, config.max_findings);
        if !plan.is_empty() {
            writeln!(md, "## Action plan\n")?;
            for (idx, finding) in plan.iter().enumerate() {
                writeln!(
                    md,
                    "### {}. {}\n",
                    idx + 1,
                    escape_markdown_inline(&finding.question_text)
                )?;
                writeln!(
                    md,
                    "- **Status:** {} · **Severity:** {} · **Effort:** {} · **Priority:** {}",
                    finding.status_label(),
                    finding.severity.label(),
                    finding.effort.label(),
                    finding.priority_score
                )?;
                writeln!(md, "- **Section:** {}", escape_markdown_inline(&finding.section_label))?;
                if !finding.reference.is_empty() {
                    writeln!(md, "- **Reference:** {}", escape_markdown_inline(&finding.reference))?;
                }
                writeln!(md, "\n{}\n", escape_markdown_inline(&finding.remediation))?;
            }
        }

        writeln!(
            md,
            "---\n_Generated by dsar-readiness {} on {} against {} (fingerprint `{}`)._",
            metadata.tool_version,
            metadata.generated_at.format("%Y-%m-%d %H:%M UTC"),
            escape_markdown_inline(&metadata.catalogue_name),
            metadata.catalogue_fingerprint
        )?;

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}
