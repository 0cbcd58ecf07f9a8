//! Worksheet generation benchmarks.
//!
//! Layout planning runs on every settings change and worksheet building on
//! every print, so both should stay well under a frame.
//!
//! Run with: cargo bench --bench worksheet_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kanji_drill::dataset::KanjiDataset;
use kanji_drill::generator::XorShiftRng;
use kanji_drill::layout::LayoutPlan;
use kanji_drill::model::PrintMode;
use kanji_drill::settings::Settings;
use kanji_drill::worksheet::{render, OutputFormat, Worksheet};

fn bench_layout_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_plan");

    for mode in PrintMode::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(mode), &mode, |b, &mode| {
            b.iter(|| {
                for tenth in 120..=250 {
                    black_box(LayoutPlan::compute(f64::from(tenth) / 10.0, mode, 7));
                }
            });
        });
    }

    group.finish();
}

fn bench_worksheet_build(c: &mut Criterion) {
    let dataset = KanjiDataset::builtin().expect("built-in dataset should parse");
    let date = NaiveDate::from_ymd_opt(2024, 4, 8).expect("valid date");
    let mut group = c.benchmark_group("worksheet_build");

    for mode in [PrintMode::Writing, PrintMode::Homophone, PrintMode::Antonym] {
        let settings = Settings {
            mode,
            page_count: 20,
            cell_size_mm: 12.0,
            ..Settings::default()
        };

        group.bench_with_input(BenchmarkId::new("pages_20", mode), &settings, |b, settings| {
            b.iter(|| {
                let mut rng = XorShiftRng::new(7);
                black_box(Worksheet::build(settings, &dataset, &mut rng, date))
            });
        });
    }

    group.finish();
}

fn bench_render_text(c: &mut Criterion) {
    let dataset = KanjiDataset::builtin().expect("built-in dataset should parse");
    let date = NaiveDate::from_ymd_opt(2024, 4, 8).expect("valid date");
    let settings = Settings {
        mode: PrintMode::Sentence,
        page_count: 20,
        ..Settings::default()
    };
    let worksheet = Worksheet::build(&settings, &dataset, &mut XorShiftRng::new(7), date)
        .expect("worksheet should build");

    c.bench_function("render_text_20_pages", |b| {
        b.iter(|| black_box(render(&worksheet, OutputFormat::Text)))
    });
}

criterion_group!(
    benches,
    bench_layout_plan,
    bench_worksheet_build,
    bench_render_text
);
criterion_main!(benches);
