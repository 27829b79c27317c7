//! Property-based tests for the scoring engine.
//!
//! Random answer stores over the built-in catalogue must always produce
//! bounded, consistent reports.

use dsar_readiness::model::{AnswerStore, AnswerValue, Catalogue};
use dsar_readiness::{derive_findings, ReadinessBand, ReadinessScorer};
use proptest::prelude::*;

fn answer_value() -> impl Strategy<Value = AnswerValue> {
    prop_oneof![
        Just(AnswerValue::Compliant),
        Just(AnswerValue::Partial),
        Just(AnswerValue::NonCompliant),
        Just(AnswerValue::NotApplicable),
    ]
}

/// One optional answer per built-in question, in catalogue order.
fn answer_store() -> impl Strategy<Value = AnswerStore> {
    let ids: Vec<String> = Catalogue::builtin()
        .questions()
        .map(|(_, q)| q.id.clone())
        .collect();
    proptest::collection::vec(proptest::option::of(answer_value()), ids.len()).prop_map(
        move |values| {
            ids.iter()
                .zip(values)
                .filter_map(|(id, value)| value.map(|v| (id.clone(), v)))
                .collect()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn percentages_are_bounded(answers in answer_store()) {
        let report = ReadinessScorer::new(Catalogue::builtin()).assess(&answers);
        prop_assert!(report.overall_percentage <= 100);
        for section in &report.section_scores {
            prop_assert!(section.percentage <= 100);
            prop_assert_eq!(
                section.answered_count + section.unanswered_count,
                section.total_questions
            );
            prop_assert_eq!(
                section.compliant_count
                    + section.partial_count
                    + section.gap_count
                    + section.not_applicable_count,
                section.answered_count
            );
        }
        prop_assert_eq!(report.band, ReadinessBand::from_percentage(report.overall_percentage));
    }

    #[test]
    fn not_applicable_never_moves_the_score(answers in answer_store()) {
        let catalogue = Catalogue::builtin();
        let scorer = ReadinessScorer::new(catalogue);

        let without_na: AnswerStore = answers
            .iter()
            .filter(|(_, value)| *value != AnswerValue::NotApplicable)
            .map(|(id, value)| (id.to_string(), value))
            .collect();

        prop_assert_eq!(scorer.overall_score(&answers), scorer.overall_score(&without_na));
        for section in catalogue.sections() {
            prop_assert_eq!(
                scorer.section_score(&section.id, &answers).percentage,
                scorer.section_score(&section.id, &without_na).percentage
            );
        }
    }

    #[test]
    fn findings_are_exactly_the_gaps(answers in answer_store()) {
        let findings = derive_findings(Catalogue::builtin(), &answers);
        let gaps = answers.iter().filter(|(_, value)| value.is_gap()).count();
        prop_assert_eq!(findings.len(), gaps);
        for finding in &findings {
            prop_assert!(finding.answer.is_gap());
        }
    }

    #[test]
    fn findings_sorted_and_stable(answers in answer_store()) {
        let catalogue = Catalogue::builtin();
        let order: Vec<&str> = catalogue.questions().map(|(_, q)| q.id.as_str()).collect();
        let position = |id: &str| order.iter().position(|candidate| *candidate == id);

        let findings = derive_findings(catalogue, &answers);
        for pair in findings.windows(2) {
            prop_assert!(pair[0].priority_score >= pair[1].priority_score);
            if pair[0].priority_score == pair[1].priority_score {
                prop_assert!(position(pair[0].question_id.as_str()) < position(pair[1].question_id.as_str()));
            }
        }
    }

    #[test]
    fn summary_counts_match_findings(answers in answer_store()) {
        let report = ReadinessScorer::new(Catalogue::builtin()).assess(&answers);
        prop_assert_eq!(report.summary.total(), report.findings.len());
        let quick = report.findings.iter().filter(|f| f.is_quick_win()).count();
        prop_assert_eq!(report.summary.quick_win_count, quick);
    }
}
