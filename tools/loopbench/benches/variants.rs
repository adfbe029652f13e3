// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: Criterion view of the loop-body variants
//! DEPS: criterion (sampling), loopbench (variants)
//!
//! The binary times single billion-iteration runs; this suite samples each
//! variant at a smaller bound for a statistically steadier comparison.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use loopbench::Variant;

const BOUND: u32 = 1 << 20;

fn variant_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("count-multiples-of-16");
    for variant in Variant::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(variant), &BOUND, |b, &bound| {
            b.iter(|| variant.count_multiples(black_box(bound)))
        });
    }
    group.finish();
}

criterion_group!(benches, variant_bench);
criterion_main!(benches);
