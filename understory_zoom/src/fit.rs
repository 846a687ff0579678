// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fitting world-space rectangles to an output frame.

use kurbo::{Rect, Size};

use crate::View;

/// Smallest rectangle with the frame's aspect ratio that contains `content`.
///
/// The result is centered on `content`'s center. Its width and height are the
/// frame's dimensions multiplied by `max(content.w / frame.w, content.h / frame.h)`,
/// so at most one dimension matches `content` exactly and the other grows.
///
/// A zero-size `content` yields a zero-size rectangle, and a zero-size frame
/// yields non-finite extents.
#[must_use]
pub fn fit_to_frame(content: Rect, frame: Size) -> Rect {
    let content = content.abs();
    let scale = f64::max(
        content.width() / frame.width,
        content.height() / frame.height,
    );
    Rect::from_center_size(content.center(), frame * scale)
}

/// Grow or shrink `rect` by `factor` while keeping its center fixed.
///
/// A factor of `1.1` adds a 5% margin on every side.
#[must_use]
pub fn scale_about_center(rect: Rect, factor: f64) -> Rect {
    Rect::from_center_size(rect.center(), rect.size() * factor)
}

/// Camera view that shows `rect` edge to edge across a frame `frame_width` units wide.
///
/// The view is centered on `rect` and its scale is `frame_width / rect.width()`.
/// Pass a rectangle already matched to the frame's aspect ratio (see
/// [`fit_to_frame`]) so that the vertical extent lines up as well.
#[must_use]
pub fn rect_to_view(rect: Rect, frame_width: f64) -> View {
    View::new(rect.center(), frame_width / rect.width())
}
