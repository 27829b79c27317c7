//! **DSAR readiness assessment: weighted compliance scoring and remediation prioritization.**
//!
//! `dsar-readiness` scores an organisation's preparedness to answer Data
//! Subject Access Requests. A fixed, weighted question catalogue is grouped
//! into sections; each question is answered as compliant, partial,
//! non-compliant or not applicable. From those answers the library derives
//! section and overall percentages, a qualitative readiness band, a
//! prioritized list of remediation findings and an executive summary.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The [`Catalogue`] of sections and questions (with the
//!   built-in DSAR catalogue available through [`Catalogue::builtin`]), the
//!   mutable [`AnswerStore`], and the answer sheet file format.
//! - **[`assessment`]**: The scoring engine. [`ReadinessScorer`] turns a
//!   catalogue and answers into an [`AssessmentReport`].
//! - **[`reports`]**: Renderers for a report: terminal summary, JSON,
//!   Markdown and a CSV action plan.
//! - **[`pipeline`]**: Loading catalogue and answer files, writing output.
//! - **[`config`]**: YAML configuration discovery, presets and validation.
//!
//! ## Getting Started
//!
//! ```
//! use dsar_readiness::{AnswerStore, AnswerValue, Catalogue, ReadinessScorer};
//!
//! let catalogue = Catalogue::builtin();
//! let mut answers = AnswerStore::new();
//! answers.set_answer(catalogue, "gov-1", AnswerValue::Compliant).unwrap();
//! answers.set_answer(catalogue, "gov-2", AnswerValue::NonCompliant).unwrap();
//!
//! let report = ReadinessScorer::new(catalogue).assess(&answers);
//! assert_eq!(report.overall_percentage, 67);
//! assert_eq!(report.findings[0].question_id, "gov-2");
//! println!("{}", report.summary.narrative);
//! ```
//!
//! ## Loading an answer sheet
//!
//! ```no_run
//! use std::path::Path;
//! use dsar_readiness::pipeline::{load_answers, load_catalogue};
//! use dsar_readiness::ReadinessScorer;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalogue = load_catalogue(None)?;
//!     let loaded = load_answers(Path::new("answers.yaml"), &catalogue, false)?;
//!
//!     let report = ReadinessScorer::new(&catalogue)
//!         .assess(&loaded.answers)
//!         .with_organisation(loaded.organisation);
//!     println!("{}% ({})", report.overall_percentage, report.band);
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]

pub mod assessment;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use assessment::{
    derive_findings, AssessmentReport, ExecutiveSummary, Finding, ReadinessBand,
    ReadinessScorer, SectionScore,
};
pub use config::{AppConfig, ConfigPreset};
pub use error::{AssessmentError, Result};
pub use model::{
    AnswerSheet, AnswerStore, AnswerValue, Catalogue, Effort, OrganisationProfile, Question,
    Section, Severity,
};
pub use reports::{ReportFormat, ReportGenerator};
