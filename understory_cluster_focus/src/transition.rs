// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated transitions between two views.

use core::time::Duration;

use understory_zoom::{View, ZoomPath, ease_cubic_in_out};

/// An in-flight zoom from one view to another.
///
/// The raw progress `elapsed / duration` is eased with [`ease_cubic_in_out`] and then
/// sampled along a [`ZoomPath`]. Each transition carries the generation of the focus
/// change that started it so hosts can tell superseded transitions apart.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ZoomTransition {
    path: ZoomPath,
    duration: Duration,
    generation: u64,
}

impl ZoomTransition {
    /// Creates a transition along `path` lasting `duration`.
    #[must_use]
    pub fn new(path: ZoomPath, duration: Duration, generation: u64) -> Self {
        Self {
            path,
            duration,
            generation,
        }
    }

    /// The zoom path being followed.
    #[must_use]
    pub fn path(&self) -> &ZoomPath {
        &self.path
    }

    /// Total duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Generation of the focus change that started this transition.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Raw progress in `[0, 1]` after `elapsed`.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let ratio = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        ratio.clamp(0.0, 1.0)
    }

    /// Returns true once `elapsed` has reached the duration.
    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// The view to display after `elapsed`.
    #[must_use]
    pub fn view_at(&self, elapsed: Duration) -> View {
        self.path.sample(ease_cubic_in_out(self.progress(elapsed)))
    }
}
