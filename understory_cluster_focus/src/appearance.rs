// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-node display state reported by the controller.

use kurbo::{Circle, Point};
use understory_cluster_tree::NodeId;

use crate::config::Rgba8;

/// Whether a node is drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Inside the focused subtree.
    Shown,
    /// Outside the focused subtree while a transition is still running.
    FadingOut,
    /// Outside the focused subtree.
    Hidden,
}

/// Display state of one node under the current focus.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeAppearance {
    /// Visibility.
    pub visibility: Visibility,
    /// Target opacity: `1.0` inside the focus, `0.0` outside.
    pub opacity: f64,
    /// Color of the focus child the node belongs to, if it is inside the focus.
    pub color: Option<Rgba8>,
    /// Whether the node should respond to pointer input.
    pub pickable: bool,
}

impl NodeAppearance {
    pub(crate) fn shown(color: Option<Rgba8>) -> Self {
        Self {
            visibility: Visibility::Shown,
            opacity: 1.0,
            color,
            pickable: true,
        }
    }

    pub(crate) fn hidden(fading: bool) -> Self {
        Self {
            visibility: if fading {
                Visibility::FadingOut
            } else {
                Visibility::Hidden
            },
            opacity: 0.0,
            color: None,
            pickable: false,
        }
    }
}

/// A leaf marker to draw.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Marker {
    /// Leaf node.
    pub node: NodeId,
    /// World position under the active layout, if the leaf has one.
    pub position: Option<Point>,
    /// Display state.
    pub appearance: NodeAppearance,
}

/// Overlay circle summarizing one child of the focus.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClusterMarker {
    /// Child cluster.
    pub node: NodeId,
    /// Circle at the centroid of the child's leaves with radius equal to their spread.
    pub circle: Circle,
    /// Color of the child.
    pub color: Option<Rgba8>,
}

/// Preview data for a hovered node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HoverPreview<'a> {
    /// Hovered node.
    pub node: NodeId,
    /// Label of the hovered node.
    pub label: &'a str,
    /// Preview payload of the hovered node, if any.
    pub preview: Option<&'a str>,
    /// Child of the focus on the path to the hovered node, if it is strictly below the focus.
    pub branch: Option<NodeId>,
}
