// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_cluster_focus --heading-base-level=0

//! Understory Cluster Focus: drill-down navigation for zoomable cluster views.
//!
//! A [`FocusController`] owns a [`ClusterTree`](understory_cluster_tree::ClusterTree) and
//! tracks which cluster is in focus. From the focus it derives everything a renderer needs:
//!
//! - The target [`View`](understory_zoom::View): the focus's leaf bounds, grown by a margin,
//!   fitted to the frame, and clamped so the closest pair of leaves stays legible
//!   ([`ScaleLimit`]).
//! - A [`ZoomTransition`] from the displayed view to the target, eased and sampled along a
//!   smooth zoom path. A new focus change always replaces the running transition.
//! - Per-node display state ([`NodeAppearance`]): nodes inside the focused subtree are shown
//!   and colored after the focus child they belong to; the rest fade out.
//! - Optional cluster overlay circles and hover previews, gated by [`Features`].
//!
//! Pointer input arrives as [`Activation`]s. Clicking a node descends one level toward it;
//! clicking the background ascends to the parent. Clicks that would not change the focus
//! are ignored.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Size};
//! use understory_cluster_focus::{Activation, FocusConfig, FocusController, Visibility};
//! use understory_cluster_tree::{ClusterSpec, ClusterTree};
//!
//! let tree = ClusterTree::build(ClusterSpec::cluster(
//!     "all",
//!     vec![
//!         ClusterSpec::cluster(
//!             "a",
//!             vec![
//!                 ClusterSpec::leaf("a0", Point::new(0.0, 0.0)),
//!                 ClusterSpec::leaf("a1", Point::new(10.0, 0.0)),
//!             ],
//!         ),
//!         ClusterSpec::cluster("b", vec![ClusterSpec::leaf("b0", Point::new(100.0, 100.0))]),
//!     ],
//! ))
//! .unwrap();
//! let a = tree.children_of(tree.root())[0];
//! let a0 = tree.children_of(a)[0];
//! let b0 = tree.leaves(tree.root()).last().unwrap();
//!
//! let mut controller = FocusController::new(tree, Size::new(800.0, 600.0), FocusConfig::default());
//!
//! // Clicking a0 from the root focuses its cluster.
//! let change = controller.activate(Activation::Node(a0)).unwrap();
//! assert_eq!(change.focus, a);
//! assert!(change.animated);
//!
//! // Drive the transition from the host's frame clock.
//! let _ = controller.tick(Duration::from_millis(375));
//! assert_eq!(controller.tick(Duration::from_millis(750)), change.view);
//!
//! // b0 is outside the focus now.
//! assert_eq!(controller.appearance(b0).visibility, Visibility::Hidden);
//! assert!(controller.activate(Activation::Node(b0)).is_none());
//!
//! // Clicking the background goes back up.
//! assert_eq!(controller.activate(Activation::Background).unwrap().focus, controller.tree().root());
//! ```
//!
//! ## Time
//!
//! The controller never reads a clock. Hosts pass the time elapsed since the transition
//! started to [`FocusController::tick`] and use [`ZoomTransition::generation`] to discard
//! callbacks from transitions that were superseded.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo` and the sibling crates.
//! - `libm`: `no_std` floating-point math through `kurbo`'s `libm` support.
//! - `serde`: derives `Serialize`/`Deserialize` for [`FocusConfig`] and its parts.
//! - `tracing`: emits `tracing` events for focus changes and ignored activations.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod appearance;
mod config;
mod controller;
mod transition;

pub use appearance::{ClusterMarker, HoverPreview, Marker, NodeAppearance, Visibility};
pub use config::{
    DEFAULT_DURATION, DEFAULT_MARGIN, DEFAULT_TARGET_PIXEL_SPACING, Features, FocusConfig,
    LayoutMode, Palette, Rgba8, ScaleLimit,
};
pub use controller::{Activation, FocusChange, FocusController};
pub use transition::ZoomTransition;
