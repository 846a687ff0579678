// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_cluster_tree --heading-base-level=0

//! Understory Cluster Tree: an arena-backed hierarchy of point clusters.
//!
//! This crate models the data behind a drill-down scatter view: a tree of
//! clusters whose leaves are points (for example image thumbnails) with
//! precomputed positions, possibly one position per level of the hierarchy.
//!
//! - [`ClusterTree`]: append-only arena of nodes addressed by [`NodeId`], with
//!   explicit parent links and ordered children. Build it node by node with
//!   [`ClusterTree::insert`] or in one go from a nested [`ClusterSpec`].
//! - Relationship queries: [`ClusterTree::sibling_index`],
//!   [`ClusterTree::branch_index`] / [`ClusterTree::branch_child`],
//!   [`ClusterTree::ancestors`], [`ClusterTree::descendants`], and
//!   [`ClusterTree::contains`].
//! - [`ColorPolicy`] and [`ColorIndices`]: deterministic, memoized color
//!   indices for sibling clusters.
//! - [`ClusterGeometry`]: memoized bounding rectangles, centroids, spreads, and
//!   closest-pair spacing of the leaves under a node, per [`LayoutLevel`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_cluster_tree::{
//!     ClusterGeometry, ClusterSpec, ClusterTree, ColorIndices, ColorPolicy, LayoutLevel,
//! };
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
//!
//! let root = tree.root();
//! let b = tree.children_of(root)[1];
//! let b0 = tree.children_of(b)[0];
//! assert_eq!(tree.data(root).weight, 3.0);
//! assert_eq!(tree.branch_index(root, b0), Some(1));
//! assert_eq!(tree.branch_index(b0, b0), None);
//!
//! let mut colors = ColorIndices::new(ColorPolicy::AvoidParent);
//! assert_ne!(colors.get(&tree, b), colors.get(&tree, root));
//!
//! let mut geometry = ClusterGeometry::new();
//! assert_eq!(
//!     geometry.bounding_rect(&tree, root, LayoutLevel::Own),
//!     Some(Rect::new(0.0, 0.0, 100.0, 100.0))
//! );
//! assert_eq!(geometry.min_spacing(&tree, root, LayoutLevel::Own), 10.0);
//! ```
//!
//! ## Not a layout engine
//!
//! Positions are inputs. This crate never computes a layout; it only
//! aggregates the positions it is given. Degenerate geometry (no positioned
//! leaves, a single leaf, coincident leaves) is reported through `None`,
//! infinite, or zero results rather than errors.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` floating-point math through `kurbo`'s `libm` support.
//! - `serde`: derives `Serialize`/`Deserialize` for [`ColorPolicy`] and [`LayoutLevel`].
//! - `tracing`: emits `tracing` events when building a tree fails.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod aggregate;
mod color;
mod error;
mod tree;
mod types;

pub use aggregate::{ClusterGeometry, bounding_rect, centroid, spread};
pub use color::{ColorIndices, ColorPolicy};
pub use error::TreeError;
pub use tree::{Ancestors, ClusterSpec, ClusterTree, Descendants};
pub use types::{ClusterData, LayoutLevel, NodeId};
