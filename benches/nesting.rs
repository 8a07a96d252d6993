use criterion::{criterion_group, criterion_main, Criterion};
use std::collections::HashMap;
use substitutor::Substitutor;

fn nested(depth: usize) -> String {
    format!("{}x{}", "${".repeat(depth), "}$".repeat(depth))
}

fn nesting_benchmarks(c: &mut Criterion) {
    let shallow = nested(10);
    let deep = nested(100_000);
    // Never closes, so the scan runs to the end of input
    let unterminated = format!("${{{}", "${a}$".repeat(100_000));
    let pass = Substitutor::new("${", "}$", "", HashMap::<String, String>::new()).unwrap();

    let mut group = c.benchmark_group("nesting");

    group.bench_function("depth_10", |b| b.iter(|| pass.replace_str(&shallow).unwrap()));

    group.bench_function("depth_100000", |b| b.iter(|| pass.replace_str(&deep).unwrap()));

    group.bench_function("unterminated_100000", |b| {
        b.iter(|| pass.replace_str(&unterminated).unwrap())
    });

    group.finish();
}

criterion_group!(benches, nesting_benchmarks);
criterion_main!(benches);
