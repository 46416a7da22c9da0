//! Benchmarks for the filter + count hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use textfreq::{count_words, filter_stopwords, Analyzer, StopwordSet};

fn synthetic_text(words: usize) -> String {
    // Roughly one third stopwords, matching typical English prose.
    let vocab = [
        "the", "of", "and", "analysis", "frequency", "document", "word",
        "extraction", "is", "a", "pipeline", "token", "in", "count", "text",
    ];
    (0..words)
        .map(|i| vocab[i % vocab.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_filter(c: &mut Criterion) {
    let text = synthetic_text(10_000);
    let stopwords = StopwordSet::english();

    c.bench_function("filter_10k_words", |b| {
        b.iter(|| filter_stopwords(black_box(&text), &stopwords))
    });
}

fn bench_count(c: &mut Criterion) {
    let stopwords = StopwordSet::english();
    let filtered = filter_stopwords(&synthetic_text(10_000), &stopwords);

    c.bench_function("count_10k_words", |b| {
        b.iter(|| count_words(black_box(&filtered)))
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let text = synthetic_text(10_000);
    let analyzer = Analyzer::new();

    c.bench_function("analyze_text_10k_words", |b| {
        b.iter(|| analyzer.analyze_text(black_box(&text)))
    });
}

criterion_group!(benches, bench_filter, bench_count, bench_pipeline);
criterion_main!(benches);
