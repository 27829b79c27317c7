#![no_main]
use dsar_readiness::model::{AnswerSheet, Catalogue};
use dsar_readiness::ReadinessScorer;
use libfuzzer_sys::fuzz_target;

/// Fuzz answer sheet parsing and scoring.
///
/// Any sheet that parses must score without panicking, strict or not.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let catalogue = Catalogue::builtin();
        for sheet in [AnswerSheet::from_yaml_str(s), AnswerSheet::from_json_str(s)]
            .into_iter()
            .flatten()
        {
            for strict in [false, true] {
                if let Ok((_, answers)) = sheet.clone().into_store(catalogue, strict) {
                    let report = ReadinessScorer::new(catalogue).assess(&answers);
                    assert!(report.overall_percentage <= 100);
                }
            }
        }
    }
});
