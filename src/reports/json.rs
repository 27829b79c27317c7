//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::assessment::{
    AssessmentReport, ExecutiveSummary, Finding, Progress, ReadinessBand, ReportMetadata,
    SectionScore, Tier,
};
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, report: &AssessmentReport, config: &ReportConfig) -> Result<String, ReportError> {
        let action_plan = report.action_plan(config.min_severity, config.max_findings);
        let document = JsonReport {
            tool: ToolInfo {
                name: env!("CARGO_PKG_NAME"),
                version: &report.metadata.tool_version,
            },
            title: config.title.as_deref(),
            metadata: &report.metadata,
            score: JsonScore {
                overall_percentage: report.overall_percentage,
                band: report.band,
                label: report.band.label(),
                tier: report.band.tier(),
            },
            progress: JsonProgress {
                progress: report.progress,
                percentage: report.progress.percentage(),
            },
            summary: JsonSummary {
                summary: &report.summary,
                total_findings: report.findings.len(),
                urgent_findings: report.urgent_findings().count(),
            },
            sections: report
                .visible_sections(config.include_unanswered_sections)
                .map(|section| JsonSection {
                    score: section,
                    band: section.band(),
                    fully_answered: section.fully_answered(),
                })
                .collect(),
            action_plan: action_plan
                .into_iter()
                .enumerate()
                .map(|(idx, finding)| JsonFinding {
                    rank: idx + 1,
                    status: finding.status_label(),
                    urgent: finding.is_urgent(),
                    finding,
                })
                .collect(),
        };

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        };
        rendered.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// ============================================================================
// JSON document structures
// ============================================================================

#[derive(Serialize)]
struct JsonReport<'a> {
    tool: ToolInfo<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    metadata: &'a ReportMetadata,
    score: JsonScore,
    progress: JsonProgress,
    summary: JsonSummary<'a>,
    sections: Vec<JsonSection<'a>>,
    action_plan: Vec<JsonFinding<'a>>,
}

#[derive(Serialize)]
struct ToolInfo<'a> {
    name: &'static str,
    version: &'a str,
}

#[derive(Serialize)]
struct JsonScore {
    overall_percentage: u8,
    band: ReadinessBand,
    label: &'static str,
    tier: Tier,
}

#[derive(Serialize)]
struct JsonProgress {
    #[serde(flatten)]
    progress: Progress,
    percentage: u8,
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    #[serde(flatten)]
    summary: &'a ExecutiveSummary,
    total_findings: usize,
    urgent_findings: usize,
}

#[derive(Serialize)]
struct JsonSection<'a> {
    #[serde(flatten)]
    score: &'a SectionScore,
    band: ReadinessBand,
    fully_answered: bool,
}

#[derive(Serialize)]
struct JsonFinding<'a> {
    rank: usize,
    status: &'static str,
    urgent: bool,
    #[serde(flatten)]
    finding: &'a Finding,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::ReadinessScorer;
    use crate::model::{AnswerStore, AnswerValue, Catalogue, Severity};

    fn report() -> AssessmentReport {
        let catalogue = Catalogue::builtin();
        let mut answers = AnswerStore::new();
        for (_, question) in catalogue.questions().take(6) {
            answers.insert(question.id.clone(), AnswerValue::NonCompliant);
        }
        ReadinessScorer::new(catalogue).assess(&answers)
    }

    #[test]
    fn test_json_structure() {
        let report = report();
        let output = JsonReporter::new()
            .generate(&report, &ReportConfig::default())
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["tool"]["name"], "dsar-readiness");
        assert_eq!(json["score"]["overall_percentage"], 33);
        assert_eq!(json["score"]["band"], "critical_gaps");
        assert_eq!(json["score"]["label"], "Critical gaps");
        assert_eq!(json["progress"]["answered"], 6);
        assert_eq!(json["summary"]["total_findings"], 6);
        assert_eq!(json["sections"].as_array().unwrap().len(), 1);
        assert_eq!(json["action_plan"][0]["rank"], 1);
        assert_eq!(json["action_plan"][0]["status"], "Gap");
        assert_eq!(
            json["metadata"]["catalogue_fingerprint"],
            Catalogue::builtin().fingerprint()
        );
    }

    #[test]
    fn test_action_plan_filters() {
        let report = report();
        let config = ReportConfig {
            max_findings: Some(2),
            min_severity: Some(Severity::High),
            ..Default::default()
        };
        let output = JsonReporter::new().pretty(false).generate(&report, &config).unwrap();
        assert!(!output.contains('\n'));
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        let plan = json["action_plan"].as_array().unwrap();
        assert!(plan.len() <= 2);
        for item in plan {
            let severity = item["severity"].as_str().unwrap();
            assert!(severity == "critical" || severity == "high", "{severity}");
        }
        // Summary counts are never filtered
        assert_eq!(json["summary"]["total_findings"], 6);
    }
}
