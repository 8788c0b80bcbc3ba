//! Query parsing benchmarks.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scry::query::parse;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("text", |b| {
        b.iter(|| parse(black_box("t=love of God in (KJV, ESV)")))
    });

    group.bench_function("subject", |b| {
        b.iter(|| parse(black_box("s=faith hope love in (KJV)")))
    });

    group.bench_function("original_full", |b| {
        b.iter(|| {
            parse(black_box(
                "o g text where original is (G123, G124) in (KJV, ESV) {senseA} +[Gen-Rev]",
            ))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
