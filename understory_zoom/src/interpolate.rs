// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smooth pan-and-zoom paths between two views.
//!
//! The path follows van Wijk and Nuij, "Smooth and efficient zooming and
//! panning" (2003): the camera zooms out while it travels and back in as it
//! arrives, so that the perceived velocity stays constant. Views are handled
//! in terms of the visible world width `w = frame_width / scale`.

use core::f64::consts::{E, SQRT_2};
use core::time::Duration;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Vec2;

use crate::View;

/// Squared center distances below this are treated as a pure zoom.
const EPSILON_SQUARED: f64 = 1e-12;

/// A sampled path from one [`View`] to another.
///
/// Construct once per transition and call [`ZoomPath::sample`] with the
/// normalized progress `t` in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ZoomPath {
    from: View,
    to: View,
    frame_width: f64,
    rho: f64,
    /// Path length in `rho`-scaled units.
    length: f64,
    kind: PathKind,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum PathKind {
    /// Centers coincide: only the visible width changes, geometrically.
    Zoom { w0: f64 },
    /// General case: travel along the optimal arc.
    Arc {
        w0: f64,
        distance: f64,
        delta: Vec2,
        r0: f64,
    },
    /// One of the endpoints is unusable; fall back to a plain lerp.
    Linear,
}

impl ZoomPath {
    /// The curvature used by [`ZoomPath::new`]: `sqrt(2)`, as recommended by van Wijk and Nuij.
    pub const DEFAULT_RHO: f64 = SQRT_2;

    /// Build the path between `from` and `to` for a frame `frame_width` units wide.
    #[must_use]
    pub fn new(from: View, to: View, frame_width: f64) -> Self {
        Self::with_rho(from, to, frame_width, Self::DEFAULT_RHO)
    }

    /// Build a path with a custom curvature `rho`.
    ///
    /// Larger values zoom out further while traveling; values close to zero
    /// approach a straight pan.
    #[must_use]
    pub fn with_rho(from: View, to: View, frame_width: f64, rho: f64) -> Self {
        let linear = Self {
            from,
            to,
            frame_width,
            rho,
            length: 0.0,
            kind: PathKind::Linear,
        };
        if !(from.is_usable() && to.is_usable() && frame_width > 0.0 && rho > 0.0) {
            return linear;
        }

        let w0 = from.visible_width(frame_width);
        let w1 = to.visible_width(frame_width);
        let delta = to.center - from.center;
        let d2 = delta.hypot2();
        let rho2 = rho * rho;
        let rho4 = rho2 * rho2;

        if d2 < EPSILON_SQUARED {
            return Self {
                length: (w1 / w0).ln() / rho,
                kind: PathKind::Zoom { w0 },
                ..linear
            };
        }

        let distance = d2.sqrt();
        let b0 = (w1 * w1 - w0 * w0 + rho4 * d2) / (2.0 * w0 * rho2 * distance);
        let b1 = (w1 * w1 - w0 * w0 - rho4 * d2) / (2.0 * w1 * rho2 * distance);
        let r0 = -asinh(b0);
        let r1 = -asinh(b1);
        let length = (r1 - r0) / rho;
        if !length.is_finite() {
            return linear;
        }
        Self {
            length,
            kind: PathKind::Arc {
                w0,
                distance,
                delta,
                r0,
            },
            ..linear
        }
    }

    /// Start of the path.
    #[must_use]
    pub const fn start(&self) -> View {
        self.from
    }

    /// End of the path.
    #[must_use]
    pub const fn end(&self) -> View {
        self.to
    }

    /// View at progress `t`, clamped to `[0, 1]`.
    ///
    /// `t <= 0` returns the start and `t >= 1` returns the end exactly.
    #[must_use]
    pub fn sample(&self, t: f64) -> View {
        if t.is_nan() || t <= 0.0 {
            return self.from;
        }
        if t >= 1.0 {
            return self.to;
        }
        let rho = self.rho;
        match self.kind {
            PathKind::Linear => View::new(
                self.from.center.lerp(self.to.center, t),
                self.from.scale + (self.to.scale - self.from.scale) * t,
            ),
            PathKind::Zoom { w0 } => {
                let w = w0 * exp(rho * t * self.length);
                View::new(
                    self.from.center.lerp(self.to.center, t),
                    self.frame_width / w,
                )
            }
            PathKind::Arc {
                w0,
                distance,
                delta,
                r0,
            } => {
                let s = t * self.length;
                let cosh_r0 = cosh(r0);
                let u = w0 / (rho * rho * distance) * (cosh_r0 * tanh(rho * s + r0) - sinh(r0));
                let w = w0 * cosh_r0 / cosh(rho * s + r0);
                View::new(self.from.center + delta * u, self.frame_width / w)
            }
        }
    }

    /// Duration that makes the camera move at a comfortable constant speed.
    ///
    /// This is the path length in seconds (one second per unit of `rho`-scaled
    /// length, rescaled for non-default curvature). Callers with a fixed
    /// transition duration can ignore it.
    #[must_use]
    pub fn natural_duration(&self) -> Duration {
        let secs = (self.length * self.rho / SQRT_2).abs();
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO)
    }
}

/// View at progress `t` along the smooth zoom path from `from` to `to`.
///
/// Shorthand for `ZoomPath::new(from, to, frame_width).sample(t)`; build a
/// [`ZoomPath`] directly when sampling the same transition repeatedly.
#[must_use]
pub fn interpolate(from: View, to: View, t: f64, frame_width: f64) -> View {
    ZoomPath::new(from, to, frame_width).sample(t)
}

/// Cubic ease-in-out, mapping `[0, 1]` onto `[0, 1]`.
#[must_use]
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// `asinh(x)` evaluated on `|x|` so that large `x` does not cancel to `ln(0)`.
fn asinh(x: f64) -> f64 {
    let a = x.abs();
    let r = (a + (a * a + 1.0).sqrt()).ln();
    if x < 0.0 { -r } else { r }
}

fn exp(x: f64) -> f64 {
    E.powf(x)
}

fn cosh(x: f64) -> f64 {
    let e = exp(x);
    (e + 1.0 / e) / 2.0
}

fn sinh(x: f64) -> f64 {
    let e = exp(x);
    (e - 1.0 / e) / 2.0
}

fn tanh(x: f64) -> f64 {
    let e = exp(2.0 * x);
    (e - 1.0) / (e + 1.0)
}
