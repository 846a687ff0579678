// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closest-pair spacing of a point set.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

/// Point sets at or below this size are solved by direct comparison.
const BRUTE_FORCE_LEN: usize = 3;

/// Minimum Euclidean distance between any two points of `points`.
///
/// Returns `f64::INFINITY` for fewer than two points and `0.0` when any two
/// points coincide.
///
/// This is the classic `O(n log n)` divide-and-conquer closest-pair search:
/// the points are split at the median x-coordinate, each half is solved
/// recursively, and the halves are reconciled by scanning the y-sorted strip
/// of points that lie closer to the split line than the best distance so far.
/// While scanning the strip, a sliding lower bound skips every earlier point
/// whose y-distance already rules it out.
///
/// Points are assumed to be finite.
#[must_use]
pub fn min_pairwise_distance(points: &[Point]) -> f64 {
    match points {
        [] | [_] => f64::INFINITY,
        [a, b] => a.distance(*b),
        _ => {
            let mut sorted: Vec<Point> = points.to_vec();
            sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
            let mut scratch = Vec::with_capacity(sorted.len());
            closest_squared(&mut sorted, &mut scratch).sqrt()
        }
    }
}

/// Largest scale at which the closest two points stay `target_pixel_spacing` apart.
///
/// Returns `None` when `min_distance` is zero (coincident points), infinite
/// (fewer than two points), or otherwise unusable, and when the resulting
/// scale would not be positive. Callers never divide by zero or clamp a view
/// to a zero scale.
#[must_use]
pub fn max_zoom_scale(target_pixel_spacing: f64, min_distance: f64) -> Option<f64> {
    if !(min_distance.is_finite() && min_distance > 0.0) {
        return None;
    }
    let scale = target_pixel_spacing / min_distance;
    (scale.is_finite() && scale > 0.0).then_some(scale)
}

/// Squared closest-pair distance of `points`, which must be sorted by x.
///
/// On return `points` is sorted by y instead, which lets the caller merge the
/// two halves in linear time.
fn closest_squared(points: &mut [Point], scratch: &mut Vec<Point>) -> f64 {
    let len = points.len();
    if len <= BRUTE_FORCE_LEN {
        let mut best = f64::INFINITY;
        for (i, a) in points.iter().enumerate() {
            for b in &points[i + 1..] {
                best = best.min(a.distance_squared(*b));
            }
        }
        points.sort_by(|a, b| a.y.total_cmp(&b.y));
        return best;
    }

    let mid = len / 2;
    let split_x = points[mid].x;
    let (left, right) = points.split_at_mut(mid);
    let mut best = closest_squared(left, scratch).min(closest_squared(right, scratch));

    merge_by_y(points, mid, scratch);

    scratch.clear();
    scratch.extend(points.iter().copied().filter(|p| {
        let dx = p.x - split_x;
        dx * dx < best
    }));

    let mut lower = 0;
    for i in 0..scratch.len() {
        let p = scratch[i];
        while lower < i {
            let dy = p.y - scratch[lower].y;
            if dy * dy < best {
                break;
            }
            lower += 1;
        }
        for q in &scratch[lower..i] {
            best = best.min(p.distance_squared(*q));
        }
    }
    best
}

/// Merge the y-sorted runs `points[..mid]` and `points[mid..]` in place.
fn merge_by_y(points: &mut [Point], mid: usize, scratch: &mut Vec<Point>) {
    scratch.clear();
    let (mut i, mut j) = (0, mid);
    while i < mid && j < points.len() {
        if points[i].y <= points[j].y {
            scratch.push(points[i]);
            i += 1;
        } else {
            scratch.push(points[j]);
            j += 1;
        }
    }
    scratch.extend_from_slice(&points[i..mid]);
    scratch.extend_from_slice(&points[j..]);
    points.copy_from_slice(scratch);
}
