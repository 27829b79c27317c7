//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use crate::error::AssessmentError;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".dsar-readiness.yaml",
    ".dsar-readiness.yml",
    "dsar-readiness.yaml",
    "dsar-readiness.yml",
];

/// Directory name under the user config directory.
const CONFIG_DIR_NAME: &str = "dsar-readiness";

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/dsar-readiness/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    config_search_dirs()
        .iter()
        .find_map(|dir| find_config_in_dir(dir))
}

/// Directories searched for a config file, in discovery order.
///
/// Consecutive duplicates (cwd being the git root) are collapsed.
#[must_use]
pub fn config_search_dirs() -> Vec<PathBuf> {
    let cwd = std::env::current_dir().ok();
    let git_root = cwd.as_deref().and_then(find_git_root);

    let mut search: Vec<PathBuf> = [
        cwd,
        git_root,
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME)),
        dirs::home_dir(),
    ]
    .into_iter()
    .flatten()
    .collect();
    search.dedup();
    search
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up from `start`.
fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

/// Default location for `config init`: the current directory.
#[must_use]
pub fn default_config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAMES[0])
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

/// Load the config for a command run.
///
/// An explicitly requested file must exist and parse. Without one, the
/// discovered file is used or defaults apply.
pub fn load_run_config(
    explicit_path: Option<&Path>,
) -> crate::error::Result<(AppConfig, Option<PathBuf>)> {
    match explicit_path {
        Some(path) => load_config_file(path)
            .map(|config| (config, Some(path.to_path_buf())))
            .map_err(|e| AssessmentError::config(format!("{}: {e}", path.display()))),
        None => Ok(load_or_default(None)),
    }
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from their defaults override; booleans can
    /// be switched on but not off.
    pub fn merge(&mut self, other: &Self) {
        if other.catalogue.path.is_some() {
            self.catalogue.path.clone_from(&other.catalogue.path);
        }

        if other.output.format != crate::reports::ReportFormat::Auto {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }

        if other.report.max_findings.is_some() {
            self.report.max_findings = other.report.max_findings;
        }
        if other.report.min_severity.is_some() {
            self.report.min_severity = other.report.min_severity;
        }
        if other.report.include_unanswered_sections {
            self.report.include_unanswered_sections = true;
        }
        if other.report.title.is_some() {
            self.report.title.clone_from(&other.report.title);
        }

        if other.behavior.min_score.is_some() {
            self.behavior.min_score = other.behavior.min_score;
        }
        if other.behavior.fail_on_critical {
            self.behavior.fail_on_critical = true;
        }
        if other.behavior.strict_answers {
            self.behavior.strict_answers = true;
        }
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file from a config value.
#[must_use]
pub fn generate_example_config(config: &AppConfig) -> String {
    format!(
        r"# DSAR readiness configuration
# Place this file at .dsar-readiness.yaml in your project root or ~/.config/dsar-readiness/

{}",
        serde_yaml::to_string(config).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# DSAR Readiness Configuration File
# ==================================
#
# Place it at:
#   - .dsar-readiness.yaml in your project root
#   - ~/.config/dsar-readiness/dsar-readiness.yaml for global config
#
# CLI arguments always override file settings.

# Question catalogue: YAML or JSON file (omit for the built-in catalogue)
# catalogue:
#   path: ./catalogue.yaml

# Output configuration
output:
  # Format: auto, summary, json, markdown, csv
  format: auto
  # Output file path (omit for stdout)
  # file: readiness.md
  # Disable colored output
  no_color: false

# Report content (never changes scores)
report:
  # Maximum number of action plan items
  # max_findings: 10
  # Hide action plan items below: critical, high, medium, low
  # min_severity: high
  # Show sections with no answers yet
  include_unanswered_sections: false
  # title: Acme DSAR readiness

# Behavior flags
behavior:
  # Exit with code 1 if the overall score is below this percentage
  # min_score: 60
  # Exit with code 2 if a critical question is answered non-compliant
  fail_on_critical: false
  # Reject answers for unknown question ids
  strict_answers: false
  # Suppress non-essential output
  quiet: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
