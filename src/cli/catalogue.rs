//! Catalogue command handlers.
//!
//! `catalogue` lists or exports the active question catalogue;
//! `check-catalogue` validates a catalogue file without scoring anything.

use crate::model::Catalogue;
use crate::pipeline::{exit_codes, load_catalogue, write_output, OutputTarget};
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Output format for the `catalogue` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CatalogueFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// Catalogue file format, YAML
    Yaml,
    /// Catalogue file format, JSON
    Json,
}

/// List or export a catalogue.
///
/// The YAML and JSON exports can be edited and loaded back with
/// `--catalogue`.
pub fn run_catalogue(
    catalogue_path: Option<PathBuf>,
    format: CatalogueFormat,
    output_file: Option<PathBuf>,
    quiet: bool,
) -> Result<i32> {
    let catalogue = load_catalogue(catalogue_path.as_deref())?;
    let content = render_catalogue(&catalogue, format)?;
    write_output(&content, &OutputTarget::from_option(output_file), quiet)?;
    Ok(exit_codes::SUCCESS)
}

/// Validate a catalogue file and print what it contains.
pub fn run_check_catalogue(path: &Path) -> Result<i32> {
    let catalogue = load_catalogue(Some(path))?;
    println!(
        "{}: valid catalogue '{}'{} with {} sections and {} questions (fingerprint {})",
        path.display(),
        catalogue.name(),
        catalogue
            .version()
            .map(|v| format!(" v{v}"))
            .unwrap_or_default(),
        catalogue.sections().len(),
        catalogue.question_count(),
        catalogue.fingerprint()
    );
    Ok(exit_codes::SUCCESS)
}

fn render_catalogue(catalogue: &Catalogue, format: CatalogueFormat) -> Result<String> {
    match format {
        CatalogueFormat::Text => render_text(catalogue),
        CatalogueFormat::Yaml => {
            serde_yaml::to_string(&catalogue.to_document()).context("failed to serialize catalogue")
        }
        CatalogueFormat::Json => {
            let mut json = serde_json::to_string_pretty(&catalogue.to_document())
                .context("failed to serialize catalogue")?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn render_text(catalogue: &Catalogue) -> Result<String> {
    let mut out = String::new();
    match catalogue.version() {
        Some(version) => writeln!(out, "{} (v{version})", catalogue.name())?,
        None => writeln!(out, "{}", catalogue.name())?,
    }
    writeln!(
        out,
        "{} sections, {} questions, fingerprint {}",
        catalogue.sections().len(),
        catalogue.question_count(),
        catalogue.fingerprint()
    )?;

    for section in catalogue.sections() {
        writeln!(out)?;
        match &section.icon {
            Some(icon) => write!(out, "{icon} {}", section.label)?,
            None => write!(out, "{}", section.label)?,
        }
        writeln!(out, " [{}]", section.id)?;

        for question in catalogue.section_questions(section) {
            writeln!(
                out,
                "  {:<8} w{} {:<8} {:<9} {}{}",
                question.id,
                question.weight,
                question.effective_severity().label(),
                question.effective_effort().timeframe(),
                if question.is_high_priority() { "★ " } else { "" },
                question.text
            )?;
        }
    }
    Ok(out)
}
