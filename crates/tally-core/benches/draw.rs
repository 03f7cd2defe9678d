use std::collections::BTreeSet;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tally_core::{generate_indexed_list, generate_weighted_score, Lcg, WeightTable};

fn bench_draws(c: &mut Criterion) {
    c.bench_function("tally-core/draws(n=100)", |b| {
        b.iter(|| {
            let sum: u32 = Lcg::from_key(black_box("t1|2025-08-18"))
                .draws(101)
                .take(100)
                .sum();
            black_box(sum)
        })
    });

    c.bench_function("tally-core/indexed_list(n=30)", |b| {
        b.iter(|| {
            let rows = generate_indexed_list(black_box("2025-08-20|ALL|ALL"), 30, |raw, i| {
                (i + 1, raw)
            });
            black_box(rows)
        })
    });

    let table = WeightTable::from_pairs([
        ("objectives", 0.2),
        ("bloom", 0.25),
        ("checks", 0.2),
        ("differentiation", 0.2),
        ("alignment", 0.15),
    ]);
    let inverted = BTreeSet::new();
    c.bench_function("tally-core/weighted_score(metrics=5)", |b| {
        b.iter(|| black_box(generate_weighted_score(black_box("t1|2025-08-18"), &table, &inverted)))
    });
}

criterion_group!(benches, bench_draws);
criterion_main!(benches);
