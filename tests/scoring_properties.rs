//! Scoring, banding, findings and summary properties.
//!
//! Each test pins one behavioural rule of the assessment engine against a
//! small hand-built catalogue or the built-in DSAR catalogue.

use dsar_readiness::assessment::{narrative, priority_score, ReadinessBand, Tier};
use dsar_readiness::model::{
    AnswerStore, AnswerValue, Catalogue, Effort, Question, Section, Severity,
};
use dsar_readiness::{derive_findings, ReadinessScorer};

// ============================================================================
// Fixtures
// ============================================================================

fn question(
    id: &str,
    section_id: &str,
    weight: u8,
    severity: Option<Severity>,
    effort: Option<Effort>,
) -> Question {
    Question {
        id: id.to_string(),
        section_id: section_id.to_string(),
        text: format!("Question {id}"),
        guidance: format!("Guidance for {id}"),
        reference: String::new(),
        weight,
        severity,
        effort,
        remediation: None,
    }
}

fn section(id: &str, question_ids: &[&str]) -> Section {
    Section {
        id: id.to_string(),
        label: format!("Section {id}"),
        icon: None,
        question_ids: question_ids.iter().map(|q| (*q).to_string()).collect(),
    }
}

/// One section holding a weight-3 critical quick question and a weight-1 question.
fn two_question_catalogue() -> Catalogue {
    Catalogue::new(
        "Two questions",
        None,
        vec![section("s", &["heavy", "light"])],
        vec![
            question("heavy", "s", 3, Some(Severity::Critical), Some(Effort::Quick)),
            question("light", "s", 1, Some(Severity::Low), Some(Effort::Moderate)),
        ],
    )
    .expect("valid catalogue")
}

/// Two sections with different weight totals.
fn uneven_catalogue() -> Catalogue {
    Catalogue::new(
        "Uneven",
        None,
        vec![
            section("big", &["b1", "b2", "b3"]),
            section("small", &["s1"]),
        ],
        vec![
            question("b1", "big", 3, None, None),
            question("b2", "big", 3, None, None),
            question("b3", "big", 3, None, None),
            question("s1", "small", 1, None, None),
        ],
    )
    .expect("valid catalogue")
}

// ============================================================================
// Scoring Module
// ============================================================================

mod scoring {
    use super::*;

    #[test]
    fn unanswered_section_is_all_zero() {
        let catalogue = Catalogue::builtin();
        let scorer = ReadinessScorer::new(catalogue);
        for section in catalogue.sections() {
            let score = scorer.section_score(&section.id, &AnswerStore::new());
            assert_eq!(score.percentage, 0);
            assert_eq!(score.answered_count, 0);
            assert_eq!(score.compliant_count, 0);
            assert_eq!(score.partial_count, 0);
            assert_eq!(score.gap_count, 0);
            assert_eq!(score.not_applicable_count, 0);
            assert_eq!(score.unanswered_count, score.total_questions);
        }
    }

    #[test]
    fn all_compliant_section_is_full_marks() {
        let catalogue = Catalogue::builtin();
        let scorer = ReadinessScorer::new(catalogue);
        for section in catalogue.sections() {
            let mut answers = AnswerStore::new();
            for id in &section.question_ids {
                answers.insert(id.clone(), AnswerValue::Compliant);
            }
            let score = scorer.section_score(&section.id, &answers);
            assert_eq!(score.percentage, 100, "section {}", section.id);
            assert_eq!(score.compliant_count, section.question_ids.len());
        }
    }

    #[test]
    fn partially_compliant_subset_is_full_marks() {
        let catalogue = Catalogue::builtin();
        let mut answers = AnswerStore::new();
        answers.insert("gov-1", AnswerValue::Compliant);
        answers.insert("gov-5", AnswerValue::Compliant);
        let score = ReadinessScorer::new(catalogue).section_score("governance", &answers);
        assert_eq!(score.percentage, 100);
        assert_eq!(score.unanswered_count, 4);
    }

    #[test]
    fn not_applicable_matches_omission() {
        let catalogue = Catalogue::builtin();
        let scorer = ReadinessScorer::new(catalogue);

        let mut omitted = AnswerStore::new();
        omitted.insert("gov-1", AnswerValue::Partial);
        omitted.insert("gov-3", AnswerValue::NonCompliant);

        let mut with_na = omitted.clone();
        with_na.insert("gov-2", AnswerValue::NotApplicable);
        with_na.insert("rec-1", AnswerValue::NotApplicable);

        assert_eq!(
            scorer.overall_score(&omitted),
            scorer.overall_score(&with_na)
        );
        let a = scorer.section_score("governance", &omitted);
        let b = scorer.section_score("governance", &with_na);
        assert_eq!(a.percentage, b.percentage);
        assert_eq!(b.not_applicable_count, 1);
        assert_eq!(b.answered_count, a.answered_count + 1);
        assert_eq!(b.unanswered_count + 1, a.unanswered_count);
    }

    #[test]
    fn weighted_scenario_is_fifty_percent() {
        let catalogue = two_question_catalogue();
        let mut answers = AnswerStore::new();
        answers.insert("heavy", AnswerValue::NonCompliant);
        answers.insert("light", AnswerValue::Compliant);

        let score = ReadinessScorer::new(&catalogue).section_score("s", &answers);
        // (1*3 + 3*1) / (3*3 + 3*1) = 6 / 12
        assert_eq!(score.percentage, 50);
        assert_eq!(score.gap_count, 1);
        assert_eq!(score.compliant_count, 1);
    }

    #[test]
    fn overall_is_weight_normalized_not_mean() {
        let catalogue = uneven_catalogue();
        let mut answers = AnswerStore::new();
        for id in ["b1", "b2", "b3"] {
            answers.insert(id, AnswerValue::NonCompliant);
        }
        answers.insert("s1", AnswerValue::Compliant);

        let scorer = ReadinessScorer::new(&catalogue);
        let big = scorer.section_score("big", &answers).percentage;
        let small = scorer.section_score("small", &answers).percentage;
        assert_eq!(big, 33);
        assert_eq!(small, 100);

        // Mean of sections would be 67; flattened is (9 + 3) / (27 + 3) = 40
        let mean = (u32::from(big) + u32::from(small) + 1) / 2;
        let overall = scorer.overall_score(&answers);
        assert_eq!(overall, 40);
        assert_ne!(u32::from(overall), mean);
    }

    #[test]
    fn only_not_applicable_scores_zero() {
        let catalogue = two_question_catalogue();
        let mut answers = AnswerStore::new();
        answers.insert("heavy", AnswerValue::NotApplicable);
        answers.insert("light", AnswerValue::NotApplicable);
        let scorer = ReadinessScorer::new(&catalogue);
        assert_eq!(scorer.overall_score(&answers), 0);
        assert_eq!(scorer.section_score("s", &answers).answered_count, 2);
    }
}

// ============================================================================
// Banding Module
// ============================================================================

mod banding {
    use super::*;

    #[test]
    fn thresholds_are_exact() {
        let cases = [
            (100, ReadinessBand::Strong),
            (80, ReadinessBand::Strong),
            (79, ReadinessBand::Developing),
            (60, ReadinessBand::Developing),
            (59, ReadinessBand::Weak),
            (40, ReadinessBand::Weak),
            (39, ReadinessBand::CriticalGaps),
            (0, ReadinessBand::CriticalGaps),
        ];
        for (percentage, band) in cases {
            assert_eq!(ReadinessBand::from_percentage(percentage), band, "{percentage}");
        }
    }

    #[test]
    fn labels_and_tiers() {
        assert_eq!(ReadinessBand::Strong.label(), "Strong");
        assert_eq!(ReadinessBand::CriticalGaps.label(), "Critical gaps");
        assert_eq!(ReadinessBand::Strong.tier(), Tier::Positive);
        assert_eq!(ReadinessBand::Developing.tier(), Tier::Caution);
        assert_eq!(ReadinessBand::Weak.tier(), Tier::Warning);
        assert_eq!(ReadinessBand::CriticalGaps.tier(), Tier::Severe);
    }
}

// ============================================================================
// Gap / Recommendation Module
// ============================================================================

mod findings {
    use super::*;

    #[test]
    fn priority_scenario() {
        let catalogue = two_question_catalogue();

        let mut answers = AnswerStore::new();
        answers.insert("heavy", AnswerValue::Partial);
        let partial = derive_findings(&catalogue, &answers);
        assert_eq!(partial[0].priority_score, 11);

        answers.insert("heavy", AnswerValue::NonCompliant);
        let gap = derive_findings(&catalogue, &answers);
        assert_eq!(gap[0].priority_score, 12);
        assert!(gap[0].priority_score > partial[0].priority_score);

        assert_eq!(
            priority_score(Severity::Critical, Effort::Quick, AnswerValue::Partial),
            11
        );
    }

    #[test]
    fn excludes_compliant_na_and_unanswered() {
        let catalogue = Catalogue::builtin();
        let mut answers = AnswerStore::new();
        answers.insert("gov-1", AnswerValue::Compliant);
        answers.insert("gov-2", AnswerValue::NotApplicable);
        answers.insert("gov-3", AnswerValue::Partial);
        answers.insert("gov-4", AnswerValue::NonCompliant);

        let findings = derive_findings(catalogue, &answers);
        let ids: Vec<&str> = findings.iter().map(|f| f.question_id.as_str()).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&"gov-3"));
        assert!(ids.contains(&"gov-4"));
    }

    #[test]
    fn equal_priorities_keep_catalogue_order() {
        let catalogue = uneven_catalogue();
        // Insertion order deliberately reversed
        let mut answers = AnswerStore::new();
        for id in ["s1", "b3", "b2", "b1"] {
            answers.insert(id, AnswerValue::NonCompliant);
        }
        let findings = derive_findings(&catalogue, &answers);
        let ids: Vec<&str> = findings.iter().map(|f| f.question_id.as_str()).collect();
        // b* are weight 3 (high severity fallback), s1 weight 1 (low)
        assert_eq!(ids, vec!["b1", "b2", "b3", "s1"]);
    }

    #[test]
    fn sorted_descending() {
        let catalogue = Catalogue::builtin();
        let answers: AnswerStore = catalogue
            .questions()
            .enumerate()
            .map(|(idx, (_, q))| {
                let value = if idx % 2 == 0 {
                    AnswerValue::Partial
                } else {
                    AnswerValue::NonCompliant
                };
                (q.id.clone(), value)
            })
            .collect();
        let findings = derive_findings(catalogue, &answers);
        assert_eq!(findings.len(), catalogue.question_count());
        assert!(findings
            .windows(2)
            .all(|pair| pair[0].priority_score >= pair[1].priority_score));
    }

    #[test]
    fn fallbacks_from_weight() {
        let catalogue = uneven_catalogue();
        let mut answers = AnswerStore::new();
        answers.insert("b1", AnswerValue::Partial);
        answers.insert("s1", AnswerValue::Partial);
        let findings = derive_findings(&catalogue, &answers);
        assert_eq!(findings[0].severity, Severity::High);
        assert_eq!(findings[0].effort, Effort::Moderate);
        assert_eq!(findings[1].severity, Severity::Low);
        // Remediation falls back to guidance
        assert_eq!(findings[0].remediation, "Guidance for b1");
    }

    #[test]
    fn empty_store_has_no_findings() {
        assert!(derive_findings(Catalogue::builtin(), &AnswerStore::new()).is_empty());
    }
}

// ============================================================================
// Summary Module
// ============================================================================

mod summary {
    use super::*;

    #[test]
    fn counts_by_severity_and_quick_wins() {
        let catalogue = two_question_catalogue();
        let mut answers = AnswerStore::new();
        answers.insert("heavy", AnswerValue::NonCompliant);
        answers.insert("light", AnswerValue::Partial);
        let report = ReadinessScorer::new(&catalogue).assess(&answers);

        assert_eq!(report.summary.critical_count, 1);
        assert_eq!(report.summary.low_count, 1);
        assert_eq!(report.summary.high_count, 0);
        assert_eq!(report.summary.medium_count, 0);
        assert_eq!(report.summary.quick_win_count, 1);
    }

    #[test]
    fn narrative_follows_band() {
        let catalogue = two_question_catalogue();
        let scorer = ReadinessScorer::new(&catalogue);

        let mut answers = AnswerStore::new();
        answers.insert("heavy", AnswerValue::Compliant);
        answers.insert("light", AnswerValue::Compliant);
        let strong = scorer.assess(&answers);
        assert_eq!(strong.band, ReadinessBand::Strong);
        assert_eq!(strong.summary.narrative, narrative(ReadinessBand::Strong));

        let none = scorer.assess(&AnswerStore::new());
        assert_eq!(none.band, ReadinessBand::CriticalGaps);
        assert_eq!(none.summary.narrative, narrative(ReadinessBand::CriticalGaps));

        let narratives: std::collections::HashSet<_> =
            ReadinessBand::ALL.iter().map(|band| narrative(*band)).collect();
        assert_eq!(narratives.len(), 4);
    }

    #[test]
    fn report_is_recomputed_from_answers() {
        let catalogue = Catalogue::builtin();
        let scorer = ReadinessScorer::new(catalogue);
        let mut answers = AnswerStore::new();
        answers.insert("gov-1", AnswerValue::NonCompliant);
        let before = scorer.assess(&answers);

        answers.clear_answer("gov-1");
        let after = scorer.assess(&answers);
        assert_eq!(before.findings.len(), 1);
        assert!(after.findings.is_empty());
        assert_eq!(after.progress.answered, 0);
    }
}
