//! Severity and effort tiers, with their scoring tables.
//!
//! The fallback rules for questions that omit a severity or an effort live
//! here as lookup functions so they can be tested in isolation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Qualitative risk tier of a gap, independent of weight.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// All severities, most severe first.
    pub const ALL: [Self; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    /// Contribution of this severity to a finding's priority score.
    #[must_use]
    pub const fn weight(self) -> u32 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// Severity implied by a question weight when none is declared.
    ///
    /// Weight 3 maps to high, weight 2 to medium, anything else to low.
    #[must_use]
    pub const fn from_weight(weight: u8) -> Self {
        match weight {
            3 => Self::High,
            2 => Self::Medium,
            _ => Self::Low,
        }
    }

    /// Resolve an optional severity, falling back to the weight rule.
    #[must_use]
    pub const fn resolve(declared: Option<Self>, weight: u8) -> Self {
        match declared {
            Some(severity) => severity,
            None => Self::from_weight(weight),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Parse severity from string. Returns None for unrecognized values.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Some(Self::Critical),
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative remediation cost tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    /// Achievable in under a day
    Quick,
    /// One to five days
    Moderate,
    /// More than five days
    Significant,
}

impl Effort {
    pub const ALL: [Self; 3] = [Self::Quick, Self::Moderate, Self::Significant];

    /// Contribution of this effort to a finding's priority score.
    ///
    /// Cheaper fixes score higher so they rank first within a severity tier.
    #[must_use]
    pub const fn score(self) -> u32 {
        match self {
            Self::Quick => 3,
            Self::Moderate => 2,
            Self::Significant => 1,
        }
    }

    /// Resolve an optional effort, defaulting to moderate.
    #[must_use]
    pub const fn resolve(declared: Option<Self>) -> Self {
        match declared {
            Some(effort) => effort,
            None => Self::Moderate,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quick => "Quick win (< 1 day)",
            Self::Moderate => "Moderate (1–5 days)",
            Self::Significant => "Significant (> 5 days)",
        }
    }

    /// Short timeframe used in tabular output.
    #[must_use]
    pub const fn timeframe(self) -> &'static str {
        match self {
            Self::Quick => "< 1 day",
            Self::Moderate => "1–5 days",
            Self::Significant => "> 5 days",
        }
    }
}

impl std::fmt::Display for Effort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Quick => "quick",
            Self::Moderate => "moderate",
            Self::Significant => "significant",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_weights() {
        assert_eq!(Severity::Critical.weight(), 4);
        assert_eq!(Severity::High.weight(), 3);
        assert_eq!(Severity::Medium.weight(), 2);
        assert_eq!(Severity::Low.weight(), 1);
    }

    #[test]
    fn test_severity_fallback_from_weight() {
        assert_eq!(Severity::from_weight(3), Severity::High);
        assert_eq!(Severity::from_weight(2), Severity::Medium);
        assert_eq!(Severity::from_weight(1), Severity::Low);
        assert_eq!(Severity::from_weight(0), Severity::Low);
    }

    #[test]
    fn test_severity_resolve_prefers_declared() {
        assert_eq!(
            Severity::resolve(Some(Severity::Critical), 1),
            Severity::Critical
        );
        assert_eq!(Severity::resolve(None, 3), Severity::High);
    }

    #[test]
    fn test_effort_scores_and_fallback() {
        assert_eq!(Effort::Quick.score(), 3);
        assert_eq!(Effort::Moderate.score(), 2);
        assert_eq!(Effort::Significant.score(), 1);
        assert_eq!(Effort::resolve(None), Effort::Moderate);
        assert_eq!(Effort::resolve(Some(Effort::Quick)), Effort::Quick);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Severity::parse("CRITICAL"), Some(Severity::Critical));
        assert_eq!(Severity::parse(" high "), Some(Severity::High));
        assert_eq!(Severity::parse("urgent"), None);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
        let effort: Effort = serde_json::from_str("\"significant\"").unwrap();
        assert_eq!(effort, Effort::Significant);
    }
}
