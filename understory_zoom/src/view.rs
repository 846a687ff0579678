// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Camera view: a world-space center plus a uniform scale.

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// A camera transform over a 2D world.
///
/// A world point `p` renders at `(p - center) * scale`, measured from the
/// center of the output frame. Use [`View::to_affine`] to obtain the full
/// world → frame transform for a concrete frame size.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct View {
    /// World-space point shown at the center of the frame.
    pub center: Point,
    /// Frame units per world unit.
    pub scale: f64,
}

impl Default for View {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl View {
    /// A view centered on the world origin at unit scale.
    pub const IDENTITY: Self = Self {
        center: Point::ORIGIN,
        scale: 1.0,
    };

    /// Create a view from a center and a scale.
    #[must_use]
    pub const fn new(center: Point, scale: f64) -> Self {
        Self { center, scale }
    }

    /// Returns true if both the center and the scale are finite and the scale is positive.
    ///
    /// Views produced from degenerate geometry fail this check and should not be
    /// handed to a renderer.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.center.is_finite() && self.scale.is_finite() && self.scale > 0.0
    }

    /// Map a world-space point to view space (relative to the frame center).
    #[must_use]
    pub fn world_to_view(&self, point: Point) -> Point {
        ((point - self.center) * self.scale).to_point()
    }

    /// Map a view-space point (relative to the frame center) back to world space.
    #[must_use]
    pub fn view_to_world(&self, point: Point) -> Point {
        self.center + point.to_vec2() / self.scale
    }

    /// The world → frame transform for a frame of the given size.
    ///
    /// The frame's origin is its top-left corner; the view's center lands on
    /// the frame's center.
    #[must_use]
    pub fn to_affine(&self, frame: Size) -> Affine {
        Affine::translate(Vec2::new(frame.width * 0.5, frame.height * 0.5))
            * Affine::scale(self.scale)
            * Affine::translate(-self.center.to_vec2())
    }

    /// Width of the world region visible through a frame of `frame_width` units.
    #[must_use]
    pub fn visible_width(&self, frame_width: f64) -> f64 {
        frame_width / self.scale
    }

    /// The world-space rectangle visible through a frame of the given size.
    #[must_use]
    pub fn visible_world_rect(&self, frame: Size) -> Rect {
        Rect::from_center_size(self.center, frame / self.scale)
    }
}
