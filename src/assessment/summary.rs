//! Executive summary.

use super::band::ReadinessBand;
use super::findings::Finding;
use crate::model::Severity;
use serde::{Deserialize, Serialize};

/// Fixed narrative paragraph for each readiness band.
#[must_use]
pub const fn narrative(band: ReadinessBand) -> &'static str {
    match band {
        ReadinessBand::Strong => {
            "Your organisation demonstrates strong DSAR readiness. The gaps identified are \
             relatively minor and can be addressed through targeted improvements. Focus on the \
             action plan items below to move from good to excellent."
        }
        ReadinessBand::Developing => {
            "Your organisation has a developing DSAR capability with some significant gaps. \
             The foundations are in place but key areas need strengthening to avoid regulatory \
             risk. Prioritise the critical and high-severity items in the action plan."
        }
        ReadinessBand::Weak => {
            "Your DSAR readiness has material weaknesses that create regulatory exposure. The \
             ICO has reprimanded organisations with similar gaps. Immediate action is needed on \
             the critical items, followed by systematic work through the action plan."
        }
        ReadinessBand::CriticalGaps => {
            "Your organisation has critical gaps in DSAR readiness that represent serious \
             regulatory risk. Organisations with similar profiles have received ICO reprimands \
             and enforcement notices. Urgent remediation is required, starting with the critical \
             items identified below."
        }
    }
}

/// Narrative plus finding counts by severity and effort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutiveSummary {
    pub narrative: String,
    pub critical_count: usize,
    pub high_count: usize,
    pub medium_count: usize,
    pub low_count: usize,
    pub quick_win_count: usize,
}

impl ExecutiveSummary {
    #[must_use]
    pub fn build(overall_percentage: u8, findings: &[Finding]) -> Self {
        let mut summary = Self {
            narrative: narrative(ReadinessBand::from_percentage(overall_percentage)).to_string(),
            ..Self::default()
        };
        for finding in findings {
            match finding.severity {
                Severity::Critical => summary.critical_count += 1,
                Severity::High => summary.high_count += 1,
                Severity::Medium => summary.medium_count += 1,
                Severity::Low => summary.low_count += 1,
            }
            if finding.is_quick_win() {
                summary.quick_win_count += 1;
            }
        }
        summary
    }

    /// Total findings across every severity.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.critical_count + self.high_count + self.medium_count + self.low_count
    }

    #[must_use]
    pub const fn count_for(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical_count,
            Severity::High => self.high_count,
            Severity::Medium => self.medium_count,
            Severity::Low => self.low_count,
        }
    }
}
