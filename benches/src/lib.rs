// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the Understory cluster benchmarks.
//!
//! Run with: `cargo bench -p understory_benches`

use kurbo::Point;
use understory_cluster_tree::{ClusterSpec, ClusterTree};

/// Deterministic pseudo-random points in a `1000 x 1000` square.
pub fn scattered_points(count: usize, seed: u64) -> Vec<Point> {
    let mut state = seed | 1;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state >> 11) as f64 / (1_u64 << 53) as f64 * 1000.0
    };
    (0..count).map(|_| Point::new(next(), next())).collect()
}

/// A balanced tree with `fanout` children per cluster, `depth` cluster levels, and
/// scattered leaf positions.
pub fn balanced_tree(fanout: usize, depth: usize) -> ClusterTree {
    let leaves = fanout.pow(u32::try_from(depth).unwrap_or(u32::MAX));
    let mut points = scattered_points(leaves, 0x5eed).into_iter();
    let spec = balanced_spec(fanout, depth, &mut points);
    ClusterTree::build(spec).expect("weights are consistent")
}

fn balanced_spec(
    fanout: usize,
    depth: usize,
    points: &mut impl Iterator<Item = Point>,
) -> ClusterSpec {
    if depth == 0 {
        let position = points.next().unwrap_or(Point::ZERO);
        return ClusterSpec::leaf("leaf", position);
    }
    let children = (0..fanout)
        .map(|_| balanced_spec(fanout, depth - 1, points))
        .collect();
    ClusterSpec::cluster("cluster", children)
}
