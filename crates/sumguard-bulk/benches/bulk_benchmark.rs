// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;
use sumguard_bulk::{
    config::{BulkConfig, ExecutionStrategy},
    evaluator::BulkEvaluator,
};

fn random_operands(len: usize, seed: u64) -> (Vec<i64>, Vec<i64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let lhs = (0..len).map(|_| rng.random()).collect();
    let rhs = (0..len).map(|_| rng.random()).collect();
    (lhs, rhs)
}

fn bench_underflow_pairwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("would_underflow_pairwise");
    let strategies = [
        ExecutionStrategy::Sequential,
        ExecutionStrategy::WorkStealing,
        ExecutionStrategy::Phased,
    ];

    for len in [1_000, 100_000, 1_000_000] {
        let (lhs, rhs) = random_operands(len, 17);
        group.throughput(Throughput::Elements(len as u64));

        for strategy in strategies {
            let config = BulkConfig::new(strategy).with_sequential_cutoff(0);
            let evaluator = BulkEvaluator::new(config).expect("valid benchmark configuration");
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), len),
                &(lhs.as_slice(), rhs.as_slice()),
                |b, &(lhs, rhs)| {
                    b.iter(|| {
                        evaluator
                            .would_underflow_pairwise(black_box(lhs), black_box(rhs))
                            .expect("equal lengths")
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_safe_add_broadcast(c: &mut Criterion) {
    let mut group = c.benchmark_group("safe_add_scalar_rhs");
    let mut rng = StdRng::seed_from_u64(3);
    let len = 1_000_000;
    let lhs: Vec<f64> = (0..len).map(|_| rng.random_range(-1.0e9..1.0e9)).collect();
    group.throughput(Throughput::Elements(len as u64));

    let evaluator = BulkEvaluator::default();
    group.bench_function("default", |b| {
        b.iter(|| evaluator.safe_add_scalar_rhs(black_box(&lhs), black_box(0.5)))
    });

    group.finish();
}

criterion_group!(benches, bench_underflow_pairwise, bench_safe_add_broadcast);
criterion_main!(benches);
