// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for frame fitting, view conversion, and closest-pair spacing.

use kurbo::{Point, Rect, Size};
use proptest::prelude::*;
use understory_zoom::{
    View, fit_to_frame, interpolate, min_pairwise_distance, rect_to_view, scale_about_center,
};

fn brute_force(points: &[Point]) -> f64 {
    let mut best = f64::INFINITY;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            best = best.min(a.distance(*b));
        }
    }
    best
}

fn point() -> impl Strategy<Value = Point> {
    (-1_000.0..1_000.0_f64, -1_000.0..1_000.0_f64).prop_map(|(x, y)| Point::new(x, y))
}

/// Points snapped to a coarse lattice, so duplicates and shared coordinates are common.
fn lattice_point() -> impl Strategy<Value = Point> {
    (-20_i32..20, -20_i32..20).prop_map(|(x, y)| Point::new(f64::from(x) * 0.5, f64::from(y) * 0.5))
}

fn rect() -> impl Strategy<Value = Rect> {
    (point(), 0.01..500.0_f64, 0.01..500.0_f64)
        .prop_map(|(origin, w, h)| Rect::from_origin_size(origin, (w, h)))
}

fn frame() -> impl Strategy<Value = Size> {
    (1.0..2_000.0_f64, 1.0..2_000.0_f64).prop_map(|(w, h)| Size::new(w, h))
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn closest_pair_matches_brute_force(points in proptest::collection::vec(point(), 0..=200)) {
        let expected = brute_force(&points);
        let actual = min_pairwise_distance(&points);
        if expected.is_infinite() {
            prop_assert_eq!(actual, f64::INFINITY);
        } else {
            prop_assert!(close(expected, actual), "expected {}, got {}", expected, actual);
        }
    }

    #[test]
    fn closest_pair_matches_brute_force_on_lattice(points in proptest::collection::vec(lattice_point(), 2..=200)) {
        let expected = brute_force(&points);
        let actual = min_pairwise_distance(&points);
        prop_assert!(close(expected, actual), "expected {}, got {}", expected, actual);
    }

    #[test]
    fn fit_matches_aspect_and_contains(content in rect(), frame in frame()) {
        let fitted = fit_to_frame(content, frame);
        prop_assert!(close(fitted.width() / fitted.height(), frame.width / frame.height));
        let slack = 1e-9 * content.width().max(content.height()).max(1.0);
        prop_assert!(fitted.width() + slack >= content.width());
        prop_assert!(fitted.height() + slack >= content.height());
        prop_assert!(fitted.x0 <= content.x0 + slack && fitted.x1 + slack >= content.x1);
        prop_assert!(fitted.y0 <= content.y0 + slack && fitted.y1 + slack >= content.y1);
        // At most one dimension grows.
        prop_assert!(close(fitted.width(), content.width()) || close(fitted.height(), content.height()));
    }

    #[test]
    fn scale_about_center_composes(r in rect(), a in 0.1..10.0_f64, b in 0.1..10.0_f64) {
        let twice = scale_about_center(scale_about_center(r, a), b);
        let once = scale_about_center(r, a * b);
        let tol = 1e-9 * (r.width().max(r.height()) * a * b).max(r.center().to_vec2().hypot()).max(1.0);
        prop_assert!((twice.x0 - once.x0).abs() <= tol);
        prop_assert!((twice.y0 - once.y0).abs() <= tol);
        prop_assert!((twice.x1 - once.x1).abs() <= tol);
        prop_assert!((twice.y1 - once.y1).abs() <= tol);
    }

    #[test]
    fn fitted_view_round_trips_center(content in rect(), frame in frame()) {
        let view = rect_to_view(fit_to_frame(content, frame), frame.width);
        prop_assert!(view.is_usable());
        // The view origin maps back onto the view center exactly, and the view
        // center is the content center up to rounding in the fitted rectangle.
        prop_assert_eq!(view.view_to_world(Point::ORIGIN), view.center);
        prop_assert_eq!(view.world_to_view(view.center), Point::ORIGIN);
        let tol = 1e-9 * content.center().to_vec2().hypot().max(content.width()).max(1.0);
        prop_assert!(view.center.distance(content.center()) <= tol);
    }

    #[test]
    fn interpolation_stays_finite(a in point(), b in point(), s0 in 0.01..100.0_f64, s1 in 0.01..100.0_f64, t in 0.0..=1.0_f64) {
        let from = View::new(a, s0);
        let to = View::new(b, s1);
        let v = interpolate(from, to, t, 800.0);
        prop_assert!(v.is_usable());
    }
}
