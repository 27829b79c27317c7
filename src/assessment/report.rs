//! Assessment report: the engine's output view.
//!
//! A report is rebuilt from the catalogue and answer store each time it is
//! needed and is never updated in place.

use super::band::ReadinessBand;
use super::findings::Finding;
use super::scorer::{SectionScore, SCORING_ENGINE_VERSION};
use super::summary::ExecutiveSummary;
use crate::model::{Catalogue, OrganisationProfile, Severity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Answered questions out of the catalogue total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
}

impl Progress {
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.total > 0 && self.answered >= self.total
    }

    /// Completion as a whole percentage.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        super::scorer::weighted_percentage(
            u32::try_from(self.answered).unwrap_or(u32::MAX),
            u32::try_from(self.total).unwrap_or(u32::MAX),
        )
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {} questions answered", self.answered, self.total)
    }
}

/// Provenance of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub tool_version: String,
    pub scoring_engine_version: String,
    pub generated_at: DateTime<Utc>,
    pub catalogue_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalogue_version: Option<String>,
    /// xxh3 fingerprint of the catalogue the report was scored against
    pub catalogue_fingerprint: String,
    #[serde(default, skip_serializing_if = "OrganisationProfile::is_empty")]
    pub organisation: OrganisationProfile,
}

impl ReportMetadata {
    #[must_use]
    pub fn for_catalogue(catalogue: &Catalogue) -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            scoring_engine_version: SCORING_ENGINE_VERSION.to_string(),
            generated_at: Utc::now(),
            catalogue_name: catalogue.name().to_string(),
            catalogue_version: catalogue.version().map(str::to_string),
            catalogue_fingerprint: catalogue.fingerprint(),
            organisation: OrganisationProfile::default(),
        }
    }
}

/// Complete assessment output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[must_use]
pub struct AssessmentReport {
    pub metadata: ReportMetadata,
    /// Overall weighted percentage, 0-100
    pub overall_percentage: u8,
    pub band: ReadinessBand,
    pub progress: Progress,
    /// Per-section metrics in catalogue order
    pub section_scores: Vec<SectionScore>,
    /// Findings ranked by priority
    pub findings: Vec<Finding>,
    pub summary: ExecutiveSummary,
}

impl AssessmentReport {
    /// Attach the organisation profile to the metadata.
    pub fn with_organisation(mut self, organisation: OrganisationProfile) -> Self {
        self.metadata.organisation = organisation;
        self
    }

    /// Critical findings answered non-compliant.
    pub fn urgent_findings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_urgent())
    }

    #[must_use]
    pub fn has_urgent_findings(&self) -> bool {
        self.findings.iter().any(Finding::is_urgent)
    }

    /// Sections to display, skipping those with no answers unless asked.
    pub fn visible_sections(&self, include_unanswered: bool) -> impl Iterator<Item = &SectionScore> {
        self.section_scores
            .iter()
            .filter(move |s| include_unanswered || s.answered_count > 0)
    }

    /// Ranked findings at or above `min_severity`, capped at `limit`.
    ///
    /// Filtering only narrows the action plan; scores are untouched.
    #[must_use]
    pub fn action_plan(&self, min_severity: Option<Severity>, limit: Option<usize>) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|f| min_severity.map_or(true, |min| f.severity >= min))
            .take(limit.unwrap_or(usize::MAX))
            .collect()
    }
}
