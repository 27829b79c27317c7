//! Benchmarks for the assessment engine.

use criterion::{criterion_group, criterion_main, Criterion};
use dsar_readiness::model::{AnswerStore, AnswerValue, Catalogue};
use dsar_readiness::reports::{create_reporter_with_options, ReportConfig, ReportFormat};
use dsar_readiness::ReadinessScorer;
use std::hint::black_box;

/// Every built-in question answered, cycling through all answer values.
fn full_answers(catalogue: &Catalogue) -> AnswerStore {
    catalogue
        .questions()
        .enumerate()
        .map(|(idx, (_, question))| {
            (
                question.id.clone(),
                AnswerValue::ALL[idx % AnswerValue::ALL.len()],
            )
        })
        .collect()
}

fn benchmark_assess(c: &mut Criterion) {
    let catalogue = Catalogue::builtin();
    let answers = full_answers(catalogue);
    let scorer = ReadinessScorer::new(catalogue);

    c.bench_function("assess_builtin_full", |b| {
        b.iter(|| black_box(scorer.assess(black_box(&answers))));
    });

    c.bench_function("overall_score_builtin_full", |b| {
        b.iter(|| black_box(scorer.overall_score(black_box(&answers))));
    });
}

fn benchmark_render(c: &mut Criterion) {
    let catalogue = Catalogue::builtin();
    let report = ReadinessScorer::new(catalogue).assess(&full_answers(catalogue));
    let config = ReportConfig::default();

    let mut group = c.benchmark_group("render");
    for format in [
        ReportFormat::Summary,
        ReportFormat::Json,
        ReportFormat::Markdown,
        ReportFormat::Csv,
    ] {
        let reporter = create_reporter_with_options(format, false);
        group.bench_function(format.to_string(), |b| {
            b.iter(|| black_box(reporter.generate(&report, &config)));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_assess, benchmark_render);
criterion_main!(benches);
