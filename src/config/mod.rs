//! Configuration module for dsar-readiness.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dsar_readiness::config::{AppConfig, ConfigPreset};
//!
//! let config = AppConfig::from_preset(ConfigPreset::Ci);
//!
//! let config = AppConfig::builder()
//!     .min_score(Some(70))
//!     .fail_on_critical(true)
//!     .build();
//!
//! use dsar_readiness::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.dsar-readiness.yaml` file in your project root or
//! `~/.config/dsar-readiness/`:
//!
//! ```yaml
//! report:
//!   min_severity: high
//! behavior:
//!   min_score: 60
//!   fail_on_critical: true
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{ConfigPreset, DEFAULT_CI_MIN_SCORE};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, CatalogueConfig, OutputConfig, ReportOptions,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    config_search_dirs, default_config_path, discover_config_file, CONFIG_FILE_NAMES,
    generate_example_config, generate_full_example_config, load_config_file, load_or_default,
    load_run_config, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// The schema documents every option accepted in `.dsar-readiness.yaml`
/// and can be used by editors for validation and autocompletion.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

/// Generate a JSON Schema for answer sheet files.
pub fn generate_answer_sheet_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(crate::model::AnswerSheet);
    serde_json::to_string_pretty(&schema)
}

/// Generate a JSON Schema for catalogue files.
pub fn generate_catalogue_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(crate::model::CatalogueDocument);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schemas_mention_top_level_fields() {
        let config = generate_json_schema().unwrap();
        assert!(config.contains("behavior"));
        assert!(config.contains("min_score"));

        let answers = generate_answer_sheet_schema().unwrap();
        assert!(answers.contains("organisation"));

        let catalogue = generate_catalogue_schema().unwrap();
        assert!(catalogue.contains("sections"));
    }
}
