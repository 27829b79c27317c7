//! Readiness bands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Qualitative label assigned to a percentage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessBand {
    /// 80 and above
    Strong,
    /// 60-79
    Developing,
    /// 40-59
    Weak,
    /// Below 40
    CriticalGaps,
}

/// Presentation tier of a band, used to pick colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Positive,
    Caution,
    Warning,
    Severe,
}

impl ReadinessBand {
    pub const ALL: [Self; 4] = [Self::Strong, Self::Developing, Self::Weak, Self::CriticalGaps];

    /// Band for a percentage. Lower bounds are inclusive.
    #[must_use]
    pub const fn from_percentage(percentage: u8) -> Self {
        match percentage {
            80..=u8::MAX => Self::Strong,
            60..=79 => Self::Developing,
            40..=59 => Self::Weak,
            _ => Self::CriticalGaps,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Developing => "Developing",
            Self::Weak => "Weak",
            Self::CriticalGaps => "Critical gaps",
        }
    }

    #[must_use]
    pub const fn tier(self) -> Tier {
        match self {
            Self::Strong => Tier::Positive,
            Self::Developing => Tier::Caution,
            Self::Weak => Tier::Warning,
            Self::CriticalGaps => Tier::Severe,
        }
    }
}

impl std::fmt::Display for ReadinessBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
