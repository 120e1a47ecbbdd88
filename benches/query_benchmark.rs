//! Benchmarks for k2psl classification performance.
//!
//! Run with: cargo bench
//!
//! This benchmark suite measures:
//! - Raw database lookup throughput
//! - Full classification with and without the engine cache
//! - Database build time for different list sizes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use k2psl::{Classifier, Domain, EngineConfig, RuleDatabase, SuffixEngine};

/// Generate list text with the given number of ICANN and PRIVATE rules.
fn generate_list(icann_count: usize, private_count: usize) -> String {
    let mut text = String::from("// ===BEGIN ICANN DOMAINS===\n");
    for tld in ["com", "net", "org", "uk", "jp"] {
        text.push_str(tld);
        text.push('\n');
    }
    for i in 0..icann_count {
        match i % 4 {
            0 => text.push_str(&format!("sld{}.uk\n", i)),
            1 => text.push_str(&format!("*.city{}.jp\n", i)),
            2 => text.push_str(&format!("!www.city{}.jp\n", i - 1)),
            _ => text.push_str(&format!("tld{}\n", i)),
        }
    }
    text.push_str("// ===END ICANN DOMAINS===\n// ===BEGIN PRIVATE DOMAINS===\n");
    for i in 0..private_count {
        text.push_str(&format!("host{}.com\n", i));
    }
    text.push_str("// ===END PRIVATE DOMAINS===\n");
    text
}

/// Generate queries - a mix of listed, private and unlisted hosts.
fn generate_queries(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match i % 5 {
            0 => format!("www.example{}.sld{}.uk", i, (i / 5 * 4) % 1000),
            1 => format!("a.b.site.city{}.jp", (i / 5 * 4 + 1) % 1000),
            2 => format!("www.city{}.jp", (i / 5 * 4 + 1) % 1000),
            3 => format!("blog{}.host{}.com", i, i % 500),
            _ => format!("unknown{}.nonexistent", i),
        })
        .collect()
}

/// Benchmark raw longest-match lookup.
fn bench_lookup(c: &mut Criterion) {
    let db = RuleDatabase::parse(&generate_list(1000, 500)).unwrap();
    let queries = generate_queries(1000);

    let mut group = c.benchmark_group("lookup");
    group.throughput(Throughput::Elements(queries.len() as u64));

    group.bench_function("mixed_queries", |b| {
        b.iter(|| {
            for query in &queries {
                if let Some(domain) = Domain::parse(query) {
                    black_box(db.lookup(&domain));
                }
            }
        })
    });

    group.finish();
}

/// Benchmark full classification without cache.
fn bench_classify_no_cache(c: &mut Criterion) {
    let db = RuleDatabase::parse(&generate_list(1000, 500)).unwrap();
    let classifier = Classifier::new(&db);
    let queries = generate_queries(1000);

    let mut group = c.benchmark_group("classify_no_cache");
    group.throughput(Throughput::Elements(queries.len() as u64));

    group.bench_function("mixed_queries", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(classifier.classify(query));
            }
        })
    });

    group.finish();
}

/// Benchmark engine classification with a warm cache.
fn bench_classify_with_cache(c: &mut Criterion) {
    let db = RuleDatabase::parse(&generate_list(1000, 500)).unwrap();
    let engine = SuffixEngine::with_config(db, EngineConfig::with_capacity(10_000));
    let queries = generate_queries(1000);

    // Warm up cache
    for query in &queries {
        let _ = engine.classify(query);
    }

    let mut group = c.benchmark_group("classify_with_cache");
    group.throughput(Throughput::Elements(queries.len() as u64));

    group.bench_function("cache_hit", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(engine.classify(query));
            }
        })
    });

    group.finish();
}

/// Benchmark database build time for different list sizes.
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [1_000, 10_000] {
        let text = generate_list(size, size / 2);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| black_box(RuleDatabase::parse(text).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_lookup,
    bench_classify_no_cache,
    bench_classify_with_cache,
    bench_build
);
criterion_main!(benches);
