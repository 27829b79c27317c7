//! Default configurations and presets for dsar-readiness.
//!
//! Provides named presets for common use cases and default values.

use super::types::{AppConfig, BehaviorConfig, OutputConfig};
use crate::reports::ReportFormat;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigPreset {
    /// Terminal summary, never fails the run
    Default,
    /// JSON output with score and critical-gap gates
    Ci,
    /// Unknown answers rejected, critical gaps fail the run
    Strict,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ci => "ci",
            Self::Strict => "strict",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "ci" | "ci-cd" | "pipeline" => Some(Self::Ci),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Human-readable summary suitable for interactive use",
            Self::Ci => "Machine-readable output that fails below the minimum score",
            Self::Strict => "Rejects stale answer ids and fails on urgent critical gaps",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Ci, Self::Strict]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Ci => Self::ci_preset(),
            ConfigPreset::Strict => Self::strict_preset(),
        }
    }

    /// CI pipeline preset.
    ///
    /// - JSON output for machine parsing
    /// - Fail below the developing band
    /// - Fail on urgent critical gaps
    #[must_use]
    pub fn ci_preset() -> Self {
        Self {
            output: OutputConfig {
                format: ReportFormat::Json,
                file: None,
                no_color: true,
            },
            behavior: BehaviorConfig {
                min_score: Some(DEFAULT_CI_MIN_SCORE),
                fail_on_critical: true,
                strict_answers: false,
                quiet: true,
            },
            ..Self::default()
        }
    }

    /// Strict preset.
    ///
    /// - Unknown answer ids are errors
    /// - Fail on urgent critical gaps
    #[must_use]
    pub fn strict_preset() -> Self {
        Self {
            behavior: BehaviorConfig {
                min_score: None,
                fail_on_critical: true,
                strict_answers: true,
                quiet: false,
            },
            ..Self::default()
        }
    }
}

// ============================================================================
// Default Value Constants
// ============================================================================

/// Minimum overall score enforced by the CI preset.
pub const DEFAULT_CI_MIN_SCORE: u8 = 60;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names() {
        assert_eq!(ConfigPreset::Default.name(), "default");
        assert_eq!(ConfigPreset::Ci.name(), "ci");
        assert_eq!(ConfigPreset::Strict.to_string(), "strict");
    }

    #[test]
    fn test_preset_from_name() {
        assert_eq!(ConfigPreset::from_name("default"), Some(ConfigPreset::Default));
        assert_eq!(ConfigPreset::from_name("CI"), Some(ConfigPreset::Ci));
        assert_eq!(ConfigPreset::from_name("pipeline"), Some(ConfigPreset::Ci));
        assert_eq!(ConfigPreset::from_name("strict"), Some(ConfigPreset::Strict));
        assert_eq!(ConfigPreset::from_name("invalid"), None);
    }

    #[test]
    fn test_ci_preset() {
        let config = AppConfig::ci_preset();
        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(config.behavior.min_score, Some(60));
        assert!(config.behavior.fail_on_critical);
        assert!(config.behavior.quiet);
        assert!(config.output.no_color);
    }

    #[test]
    fn test_strict_preset() {
        let config = AppConfig::strict_preset();
        assert!(config.behavior.strict_answers);
        assert!(config.behavior.fail_on_critical);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_from_preset() {
        assert_eq!(AppConfig::from_preset(ConfigPreset::Default), AppConfig::default());
        assert_eq!(AppConfig::from_preset(ConfigPreset::Ci), AppConfig::ci_preset());
    }

    #[test]
    fn test_all_presets() {
        assert_eq!(ConfigPreset::all().len(), 3);
    }
}
