#![no_main]
use dsar_readiness::model::{AnswerStore, AnswerValue, Catalogue};
use dsar_readiness::ReadinessScorer;
use libfuzzer_sys::fuzz_target;

/// Fuzz catalogue loading.
///
/// A catalogue that passes validation must be assessable with every
/// question answered.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for catalogue in [Catalogue::from_yaml_str(s), Catalogue::from_json_str(s)]
            .into_iter()
            .flatten()
        {
            let answers: AnswerStore = catalogue
                .questions()
                .map(|(_, q)| (q.id.clone(), AnswerValue::NonCompliant))
                .collect();
            let report = ReadinessScorer::new(&catalogue).assess(&answers);
            assert_eq!(report.findings.len(), catalogue.question_count());
            let _ = Catalogue::from_document(catalogue.to_document());
        }
    }
});
