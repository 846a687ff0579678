// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus changes and per-frame queries on a balanced cluster tree.
//!
//! Run with: `cargo bench -p understory_benches --bench focus`

use std::hint::black_box;
use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use kurbo::Size;
use understory_benches::balanced_tree;
use understory_cluster_focus::{Activation, FocusConfig, FocusController};

const FRAME: Size = Size::new(1280.0, 720.0);

fn bench_focus(c: &mut Criterion) {
    let tree = balanced_tree(8, 4);
    let root = tree.root();
    let first = tree.children_of(root)[0];
    let leaf = tree.leaves(first).next().unwrap_or(first);

    let mut group = c.benchmark_group("focus");

    // Fresh controller each time so aggregate geometry is computed from scratch.
    group.bench_function("cold_root_view", |b| {
        b.iter(|| {
            let tree = black_box(tree.clone());
            FocusController::new(tree, FRAME, FocusConfig::default())
        });
    });

    let mut controller = FocusController::new(tree.clone(), FRAME, FocusConfig::default());
    group.bench_function("descend_and_ascend", |b| {
        b.iter(|| {
            let _ = controller.activate(Activation::Node(black_box(leaf)));
            let _ = controller.activate(Activation::Background);
        });
    });

    controller.focus(first);
    group.bench_function("tick", |b| {
        let mut ms = 0_u64;
        b.iter(|| {
            ms = (ms + 16) % 750;
            controller.tick(black_box(Duration::from_millis(ms)))
        });
    });

    group.bench_function("markers", |b| {
        b.iter(|| controller.markers().len());
    });

    group.finish();
}

criterion_group!(benches, bench_focus);
criterion_main!(benches);
