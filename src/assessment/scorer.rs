//! Weighted readiness scoring.
//!
//! Every scored answer contributes `answer_score * weight` to the numerator
//! and `3 * weight` to the denominator. `not_applicable` answers and
//! unanswered questions contribute to neither, so they can never move a
//! percentage.

use crate::model::{AnswerStore, AnswerValue, Catalogue, Question, Section, MAX_ANSWER_SCORE};
use serde::{Deserialize, Serialize};

use super::band::ReadinessBand;
use super::findings::derive_findings;
use super::report::{AssessmentReport, Progress, ReportMetadata};
use super::summary::ExecutiveSummary;

/// Scoring engine version recorded in report metadata
pub const SCORING_ENGINE_VERSION: &str = "1.0";

/// Round `100 * score / max` half-up, or 0 when nothing is scorable.
#[must_use]
pub fn weighted_percentage(score: u32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }
    let percentage = (200 * u64::from(score) + u64::from(max)) / (2 * u64::from(max));
    u8::try_from(percentage.min(100)).unwrap_or(100)
}

/// Running weighted sums for a set of questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct WeightedTally {
    score: u32,
    max: u32,
}

impl WeightedTally {
    fn add(&mut self, question: &Question, value: AnswerValue) {
        if let Some(score) = value.score() {
            let weight = u32::from(question.weight);
            self.score += score * weight;
            self.max += MAX_ANSWER_SCORE * weight;
        }
    }

    fn percentage(self) -> u8 {
        weighted_percentage(self.score, self.max)
    }
}

/// Metrics for one section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScore {
    pub section_id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Weighted percentage, 0-100
    pub percentage: u8,
    /// Questions with any answer, including not applicable
    pub answered_count: usize,
    pub compliant_count: usize,
    pub partial_count: usize,
    /// Questions answered non-compliant
    pub gap_count: usize,
    pub not_applicable_count: usize,
    pub total_questions: usize,
    pub unanswered_count: usize,
}

impl SectionScore {
    /// Every question in a non-empty section has an answer.
    #[must_use]
    pub const fn fully_answered(&self) -> bool {
        self.total_questions > 0 && self.unanswered_count == 0
    }

    #[must_use]
    pub const fn band(&self) -> ReadinessBand {
        ReadinessBand::from_percentage(self.percentage)
    }
}

/// Scoring engine over a borrowed catalogue.
///
/// The scorer holds no state of its own; every call recomputes from the
/// answer store it is given.
#[derive(Debug, Clone, Copy)]
pub struct ReadinessScorer<'a> {
    catalogue: &'a Catalogue,
}

impl<'a> ReadinessScorer<'a> {
    #[must_use]
    pub const fn new(catalogue: &'a Catalogue) -> Self {
        Self { catalogue }
    }

    #[must_use]
    pub const fn catalogue(&self) -> &'a Catalogue {
        self.catalogue
    }

    /// Score one section. Unknown section ids yield an all-zero score.
    #[must_use]
    pub fn section_score(&self, section_id: &str, answers: &AnswerStore) -> SectionScore {
        match self.catalogue.section(section_id) {
            Some(section) => self.score_section(section, answers),
            None => SectionScore {
                section_id: section_id.to_string(),
                ..SectionScore::default()
            },
        }
    }

    /// Scores for every section, in catalogue order.
    #[must_use]
    pub fn section_scores(&self, answers: &AnswerStore) -> Vec<SectionScore> {
        self.catalogue
            .sections()
            .iter()
            .map(|section| self.score_section(section, answers))
            .collect()
    }

    /// Weighted percentage over every question in the catalogue.
    ///
    /// This is one flattened weighted average, not a mean of section
    /// percentages.
    #[must_use]
    pub fn overall_score(&self, answers: &AnswerStore) -> u8 {
        let mut tally = WeightedTally::default();
        for (_, question) in self.catalogue.questions() {
            if let Some(value) = answers.get(&question.id) {
                tally.add(question, value);
            }
        }
        tally.percentage()
    }

    /// Answered questions out of the catalogue total.
    #[must_use]
    pub fn progress(&self, answers: &AnswerStore) -> Progress {
        Progress {
            answered: answers.answered_in(self.catalogue),
            total: self.catalogue.question_count(),
        }
    }

    /// Run the full assessment and build a fresh report.
    pub fn assess(&self, answers: &AnswerStore) -> AssessmentReport {
        let overall_percentage = self.overall_score(answers);
        let findings = derive_findings(self.catalogue, answers);
        let summary = ExecutiveSummary::build(overall_percentage, &findings);
        let progress = self.progress(answers);

        tracing::debug!(
            "Scored {}/{} answers: {}% with {} findings",
            progress.answered,
            progress.total,
            overall_percentage,
            findings.len()
        );

        AssessmentReport {
            metadata: ReportMetadata::for_catalogue(self.catalogue),
            overall_percentage,
            band: ReadinessBand::from_percentage(overall_percentage),
            progress,
            section_scores: self.section_scores(answers),
            findings,
            summary,
        }
    }

    fn score_section(&self, section: &Section, answers: &AnswerStore) -> SectionScore {
        let mut tally = WeightedTally::default();
        let mut score = SectionScore {
            section_id: section.id.clone(),
            label: section.label.clone(),
            icon: section.icon.clone(),
            ..SectionScore::default()
        };

        for question in self.catalogue.section_questions(section) {
            score.total_questions += 1;
            let Some(value) = answers.get(&question.id) else {
                continue;
            };
            score.answered_count += 1;
            match value {
                AnswerValue::Compliant => score.compliant_count += 1,
                AnswerValue::Partial => score.partial_count += 1,
                AnswerValue::NonCompliant => score.gap_count += 1,
                AnswerValue::NotApplicable => score.not_applicable_count += 1,
            }
            tally.add(question, value);
        }

        score.unanswered_count = score.total_questions - score.answered_count;
        score.percentage = tally.percentage();
        score
    }
}
