use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use keyscan::{KeywordMatcher, MatchStrategy};

fn sample_text() -> String {
    // Mixed script + dense overlapping hits: exercises folding, failure
    // links, and both selection strategies.
    "I love Big Ben Apple and the big apple. 私は東京で寿司を食べます。\
     Москва is far from the big apple, señor."
        .repeat(16)
}

fn landmark_matcher() -> KeywordMatcher {
    let mut matcher = KeywordMatcher::default();
    matcher
        .add_keywords_with_clean_names([
            ("Big Ben", "Clock Tower"),
            ("Big Ben Apple", "New York"),
            ("Apple", "Just Apple"),
            ("東京", "Tokyo"),
            ("寿司", "sushi"),
            ("Москва", "Moscow"),
            ("señor", "mister"),
        ])
        .expect("bench keywords are non-empty");
    matcher
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("matcher::extract_spans");
    let text = sample_text();
    let mut matcher = landmark_matcher();
    // Build links outside the timing loop.
    let _ = matcher.extract_keywords("");

    for strategy in [MatchStrategy::All, MatchStrategy::Longest] {
        group.bench_with_input(
            BenchmarkId::from_parameter(strategy),
            &strategy,
            |b, &strategy| {
                b.iter(|| matcher.extract_spans_with_strategy(black_box(&text), strategy))
            },
        );
    }
    group.finish();
}

fn bench_replace(c: &mut Criterion) {
    let mut group = c.benchmark_group("matcher::replace_keywords");
    let text = sample_text();
    let mut matcher = landmark_matcher();
    let _ = matcher.extract_keywords("");

    group.bench_function("baseline", |b| {
        b.iter(|| matcher.replace_keywords(black_box(&text)))
    });
    group.finish();
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("matcher::rebuild_after_mutation");
    let mut matcher = landmark_matcher();

    group.bench_function("add_remove_query", |b| {
        b.iter(|| {
            matcher.add_keyword(black_box("churn")).unwrap();
            matcher.remove_keyword(black_box("churn"));
            matcher.extract_keywords(black_box("warm up the links"))
        })
    });
    group.finish();
}

fn bench_fuzzy(c: &mut Criterion) {
    let mut group = c.benchmark_group("matcher::fuzzy_search");
    let matcher = landmark_matcher();

    for query in ["big ben aple", "москва"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), &query, |b, &query| {
            b.iter(|| matcher.fuzzy_search(black_box(query), 0.6))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_extract,
    bench_replace,
    bench_rebuild,
    bench_fuzzy
);
criterion_main!(benches);
