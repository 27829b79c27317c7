//! DSAR readiness assessment engine.
//!
//! Turns a catalogue and a sparse answer store into section and overall
//! percentages, a readiness band, a ranked remediation plan and an
//! executive summary. Every function here is pure and infallible.
//!
//! # Usage
//!
//! ```no_run
//! use dsar_readiness::assessment::ReadinessScorer;
//! use dsar_readiness::model::{AnswerStore, AnswerValue, Catalogue};
//!
//! let catalogue = Catalogue::builtin();
//! let mut answers = AnswerStore::new();
//! answers.set_answer(catalogue, "gov-1", AnswerValue::Partial).unwrap();
//!
//! let report = ReadinessScorer::new(catalogue).assess(&answers);
//! println!("{}% ({})", report.overall_percentage, report.band);
//! for finding in &report.findings {
//!     println!("[{}] {}", finding.priority_score, finding.question_text);
//! }
//! ```

mod band;
mod findings;
mod report;
mod scorer;
mod summary;

pub use band::{ReadinessBand, Tier};
pub use findings::{derive_findings, priority_score, Finding};
pub use report::{AssessmentReport, Progress, ReportMetadata};
pub use scorer::{weighted_percentage, ReadinessScorer, SectionScore, SCORING_ENGINE_VERSION};
pub use summary::{narrative, ExecutiveSummary};
