// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_zoom --heading-base-level=0

//! Understory Zoom: camera views and zoom geometry for drill-down scenes.
//!
//! This crate provides the small amount of math a zoomable 2D scene needs to
//! decide *where the camera goes*:
//!
//! - [`View`]: a camera expressed as a world-space center plus a uniform scale.
//! - [`fit_to_frame`], [`scale_about_center`], and [`rect_to_view`]: turn a
//!   world-space region of interest into a camera view for a given frame.
//! - [`min_pairwise_distance`] and [`max_zoom_scale`]: closest-pair spacing of a
//!   point set, used to bound how far a camera may zoom before markers overlap.
//! - [`ZoomPath`] and [`interpolate`]: smooth pan-and-zoom paths between two
//!   views that keep the perceived velocity constant.
//!
//! It does **not** own a scene, render anything, or drive time. Callers sample
//! [`ZoomPath`] from whatever animation clock they have.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_zoom::{fit_to_frame, rect_to_view, scale_about_center};
//!
//! let frame = Size::new(800.0, 600.0);
//! let content = Rect::new(0.0, 0.0, 100.0, 40.0);
//!
//! // Add a 10% margin, then match the frame's aspect ratio.
//! let framed = fit_to_frame(scale_about_center(content, 1.1), frame);
//! let view = rect_to_view(framed, frame.width);
//!
//! assert_eq!(view.center, Point::new(50.0, 20.0));
//! assert!((framed.width() / framed.height() - 800.0 / 600.0).abs() < 1e-12);
//! ```
//!
//! ## Spacing-bounded zoom
//!
//! ```rust
//! use kurbo::Point;
//! use understory_zoom::{max_zoom_scale, min_pairwise_distance};
//!
//! let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(100.0, 100.0)];
//! let closest = min_pairwise_distance(&points);
//! assert_eq!(closest, 10.0);
//!
//! // Markers should stay at least 12 pixels apart.
//! assert_eq!(max_zoom_scale(12.0, closest), Some(1.2));
//! // A single point has no spacing to respect.
//! assert_eq!(max_zoom_scale(12.0, min_pairwise_distance(&points[..1])), None);
//! ```
//!
//! Degenerate inputs (zero-size rectangles or frames, coincident points) never
//! panic; they produce non-finite values or `None`, and callers are expected to
//! guard before handing a view to a renderer.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` floating-point math through `kurbo`'s `libm` support.
//! - `serde`: derives `Serialize`/`Deserialize` for [`View`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod fit;
mod interpolate;
mod spacing;
mod view;

pub use fit::{fit_to_frame, rect_to_view, scale_about_center};
pub use interpolate::{ZoomPath, ease_cubic_in_out, interpolate};
pub use spacing::{max_zoom_scale, min_pairwise_distance};
pub use view::View;
