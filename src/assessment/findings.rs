//! Gap findings and remediation prioritization.

use crate::model::{AnswerStore, AnswerValue, Catalogue, Effort, Section, Question, Severity};
use serde::{Deserialize, Serialize};

/// Priority of a gap: severity dominates, cheaper fixes rank higher within
/// a severity tier, and "not started" outranks "partially in place".
#[must_use]
pub const fn priority_score(severity: Severity, effort: Effort, answer: AnswerValue) -> u32 {
    let not_started = match answer {
        AnswerValue::NonCompliant => 1,
        _ => 0,
    };
    severity.weight() * 2 + effort.score() + not_started
}

/// One partial or non-compliant answer, with its remediation context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub section_id: String,
    pub section_label: String,
    pub question_id: String,
    pub question_text: String,
    pub answer: AnswerValue,
    pub weight: u8,
    pub severity: Severity,
    pub effort: Effort,
    pub guidance: String,
    pub reference: String,
    /// Remediation note, falling back to the guidance text
    pub remediation: String,
    pub priority_score: u32,
}

impl Finding {
    fn from_question(section: &Section, question: &Question, answer: AnswerValue) -> Self {
        let severity = question.effective_severity();
        let effort = question.effective_effort();
        Self {
            section_id: section.id.clone(),
            section_label: section.label.clone(),
            question_id: question.id.clone(),
            question_text: question.text.clone(),
            answer,
            weight: question.weight,
            severity,
            effort,
            guidance: question.guidance.clone(),
            reference: question.reference.clone(),
            remediation: question.remediation_text().to_string(),
            priority_score: priority_score(severity, effort, answer),
        }
    }

    /// Critical severity and not started at all.
    #[must_use]
    pub fn is_urgent(&self) -> bool {
        self.severity == Severity::Critical && self.answer == AnswerValue::NonCompliant
    }

    #[must_use]
    pub fn is_quick_win(&self) -> bool {
        self.effort == Effort::Quick
    }

    /// "Gap" for non-compliant answers, "Partial" otherwise.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        match self.answer {
            AnswerValue::NonCompliant => "Gap",
            _ => "Partial",
        }
    }
}

/// Collect findings in catalogue order, then rank by priority.
///
/// The sort is stable, so equal priorities keep section order and then
/// question order.
#[must_use]
pub fn derive_findings(catalogue: &Catalogue, answers: &AnswerStore) -> Vec<Finding> {
    let mut findings: Vec<Finding> = catalogue
        .questions()
        .filter_map(|(section, question)| {
            answers
                .get(&question.id)
                .filter(|answer| answer.is_gap())
                .map(|answer| Finding::from_question(section, question, answer))
        })
        .collect();

    findings.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));
    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> Catalogue {
        Catalogue::from_yaml_str(
            r"
name: Findings
sections:
  - id: one
    label: One
    questions:
      - id: one-1
        text: First
        guidance: Do the first thing
        weight: 3
        severity: critical
        effort: quick
      - id: one-2
        text: Second
        weight: 2
        remediation: Fix the second thing
  - id: two
    label: Two
    questions:
      - id: two-1
        text: Third
        weight: 2
",
        )
        .unwrap()
    }

    #[test]
    fn test_priority_scores() {
        assert_eq!(
            priority_score(Severity::Critical, Effort::Quick, AnswerValue::Partial),
            11
        );
        assert_eq!(
            priority_score(Severity::Critical, Effort::Quick, AnswerValue::NonCompliant),
            12
        );
        assert_eq!(
            priority_score(Severity::Low, Effort::Significant, AnswerValue::Partial),
            3
        );
    }

    #[test]
    fn test_only_gaps_become_findings() {
        let catalogue = catalogue();
        let mut answers = AnswerStore::new();
        answers.insert("one-1", AnswerValue::Compliant);
        answers.insert("one-2", AnswerValue::NotApplicable);
        answers.insert("two-1", AnswerValue::Partial);
        answers.insert("unknown", AnswerValue::NonCompliant);

        let findings = derive_findings(&catalogue, &answers);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].question_id, "two-1");
        assert_eq!(findings[0].status_label(), "Partial");
    }

    #[test]
    fn test_fallbacks_applied() {
        let catalogue = catalogue();
        let mut answers = AnswerStore::new();
        answers.insert("one-1", AnswerValue::Partial);
        answers.insert("one-2", AnswerValue::NonCompliant);

        let findings = derive_findings(&catalogue, &answers);
        let first = &findings[0];
        assert_eq!(first.question_id, "one-1");
        assert_eq!(first.remediation, "Do the first thing");

        let second = &findings[1];
        assert_eq!(second.severity, Severity::Medium);
        assert_eq!(second.effort, Effort::Moderate);
        assert_eq!(second.remediation, "Fix the second thing");
        assert_eq!(second.priority_score, 2 * 2 + 2 + 1);
    }

    #[test]
    fn test_ties_keep_catalogue_order() {
        let catalogue = catalogue();
        let mut answers = AnswerStore::new();
        // Inserted out of catalogue order; both resolve to medium/moderate
        answers.insert("two-1", AnswerValue::NonCompliant);
        answers.insert("one-2", AnswerValue::NonCompliant);

        let findings = derive_findings(&catalogue, &answers);
        let ids: Vec<&str> = findings.iter().map(|f| f.question_id.as_str()).collect();
        assert_eq!(ids, vec!["one-2", "two-1"]);
    }

    #[test]
    fn test_urgent_flag() {
        let catalogue = catalogue();
        let mut answers = AnswerStore::new();
        answers.insert("one-1", AnswerValue::NonCompliant);
        let findings = derive_findings(&catalogue, &answers);
        assert!(findings[0].is_urgent());
        assert!(findings[0].is_quick_win());
        assert_eq!(findings[0].status_label(), "Gap");

        answers.insert("one-1", AnswerValue::Partial);
        assert!(!derive_findings(&catalogue, &answers)[0].is_urgent());
    }

    #[test]
    fn test_empty_store_yields_no_findings() {
        assert!(derive_findings(&catalogue(), &AnswerStore::new()).is_empty());
    }
}
