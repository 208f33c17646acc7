use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cvscan::matcher::{CompiledMatcher, FuzzyMatcher, Matcher};
use cvscan::{Algorithm, DocumentCache, ScanConfig, Scanner};
use parking_lot::RwLock;
use std::sync::Arc;

/// Demo CVs repeated until the corpus is large enough to measure
fn setup_scanner() -> Scanner {
    let texts = (0..200).flat_map(|copy| {
        demo_data::DEMO_CVS
            .iter()
            .map(move |cv| (format!("{}/{}-{}", cv.category, copy, cv.file_name), cv.text.clone()))
    });
    let cache = DocumentCache::from_texts(texts);
    Scanner::with_cache(Arc::new(RwLock::new(cache)), ScanConfig::default()).expect("Failed to build scanner")
}

fn bench_exact(c: &mut Criterion) {
    let scanner = setup_scanner();

    let queries: Vec<(&str, Vec<&str>)> = vec![
        ("one_keyword", vec!["Python"]),
        ("three_keywords", vec!["Java", "SQL", "Docker"]),
        ("ten_keywords", vec![
            "Java", "Python", "SQL", "Rust", "Docker", "Kubernetes", "Spark", "Figma", "React", "Linux",
        ]),
        ("no_match", vec!["Haskell"]),
    ];

    let mut group = c.benchmark_group("search_exact");
    group.sample_size(20);

    for (name, keywords) in &queries {
        for algorithm in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.label(), name), keywords, |b, keywords| {
                b.iter(|| scanner.search_exact(keywords, algorithm, 10).unwrap());
            });
        }
    }
    group.finish();
}

fn bench_fuzzy(c: &mut Criterion) {
    let scanner = setup_scanner();

    let mut group = c.benchmark_group("search_fuzzy");
    group.sample_size(20);
    for max_distance in [0, 1, 2] {
        group.bench_function(BenchmarkId::new("pythn", max_distance), |b| {
            b.iter(|| scanner.search_fuzzy(&["Pythn", "Kubernets"], max_distance, 10).unwrap());
        });
    }
    group.finish();
}

/// Single-document matcher cost, without the pool
fn bench_matchers(c: &mut Criterion) {
    let text = demo_data::DEMO_CVS[0].text.repeat(50);
    let keywords = ["Java", "Spring", "Docker", "Engineer", "Bandung"];

    let mut group = c.benchmark_group("matcher");
    for algorithm in Algorithm::ALL {
        let matcher = CompiledMatcher::compile(algorithm, &keywords);
        group.bench_function(algorithm.label(), |b| b.iter(|| matcher.count(&text)));
    }
    let fuzzy = FuzzyMatcher::new(&keywords, 1);
    group.bench_function("fuzzy", |b| b.iter(|| fuzzy.count(&text)));
    group.finish();
}

criterion_group!(benches, bench_exact, bench_fuzzy, bench_matchers);
criterion_main!(benches);
