// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closest-pair spacing over scattered points.
//!
//! Run with: `cargo bench -p understory_benches --bench closest_pair`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use understory_benches::scattered_points;
use understory_zoom::min_pairwise_distance;

fn bench_min_pairwise_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("spacing/min_pairwise_distance");
    for count in [16, 256, 4096, 65536] {
        let points = scattered_points(count, 42);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, points| {
            b.iter(|| min_pairwise_distance(black_box(points)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_min_pairwise_distance);
criterion_main!(benches);
