// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, building, relationship queries.

use alloc::{string::String, vec, vec::Vec};
use core::iter::FusedIterator;

use kurbo::Point;

use crate::error::TreeError;
use crate::types::{ClusterData, LayoutLevel, NodeId};

/// Relative tolerance when comparing a declared weight against the sum of its children.
const WEIGHT_TOLERANCE: f64 = 1e-9;

/// An immutable-after-build hierarchy of clusters.
///
/// Nodes live in an arena and refer to each other through [`NodeId`] handles:
/// every node except the root has exactly one parent, children keep the order
/// in which they were inserted, and that order defines sibling indices.
/// Ancestor walks are `O(depth)`.
///
/// The tree never removes nodes, so handles stay valid and any value derived
/// from the tree's positions can be cached for the tree's lifetime.
///
/// ## Example
///
/// ```rust
/// use kurbo::Point;
/// use understory_cluster_tree::{ClusterData, ClusterTree};
///
/// let mut tree = ClusterTree::new(ClusterData::new("all"));
/// let root = tree.root();
/// let a = tree.insert(root, ClusterData::new("a"));
/// let leaf = tree.insert(a, ClusterData::leaf("img-0", Point::new(0.0, 0.0)));
/// tree.aggregate_weights();
///
/// assert_eq!(tree.parent_of(leaf), Some(a));
/// assert_eq!(tree.branch_index(root, leaf), Some(0));
/// assert_eq!(tree.data(root).weight, 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct ClusterTree {
    nodes: Vec<Node>,
}

#[derive(Clone, Debug)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    depth: usize,
    sibling_index: usize,
    data: ClusterData,
}

/// Nested description of a cluster, used to build a [`ClusterTree`] in one go.
///
/// This mirrors the records produced by an offline clustering step: each
/// cluster carries a label, an optional preview, an optional size, per-level
/// positions, and its sub-clusters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClusterSpec {
    /// Display label.
    pub label: String,
    /// Preview reference.
    pub preview: Option<String>,
    /// Declared size. Missing sizes default to `1` for leaves and to the sum of
    /// the children for clusters.
    pub weight: Option<f64>,
    /// Per-level positions, level 1 first.
    pub positions: Vec<Point>,
    /// Sub-clusters, in display order.
    pub children: Vec<ClusterSpec>,
}

impl ClusterSpec {
    /// A leaf placed at `position` on every level.
    pub fn leaf(label: impl Into<String>, position: Point) -> Self {
        Self {
            label: label.into(),
            positions: vec![position],
            ..Self::default()
        }
    }

    /// A cluster with the given children.
    pub fn cluster(label: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            label: label.into(),
            children,
            ..Self::default()
        }
    }

    /// Set the declared weight.
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Set the preview reference.
    #[must_use]
    pub fn with_preview(mut self, preview: impl Into<String>) -> Self {
        self.preview = Some(preview.into());
        self
    }

    /// Replace the per-level positions.
    #[must_use]
    pub fn with_positions(mut self, positions: impl IntoIterator<Item = Point>) -> Self {
        self.positions = positions.into_iter().collect();
        self
    }
}

impl ClusterTree {
    /// Create a tree holding only a root node.
    pub fn new(root: ClusterData) -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                children: Vec::new(),
                depth: 0,
                sibling_index: 0,
                data: root,
            }],
        }
    }

    /// Build a tree from a nested description and aggregate its weights.
    ///
    /// Leaves without a declared weight count as `1`. A cluster's weight is
    /// the sum of its children; a declared cluster weight that disagrees with
    /// that sum is rejected, as is any negative or non-finite weight.
    pub fn build(spec: ClusterSpec) -> Result<Self, TreeError> {
        let mut declared: Vec<Option<f64>> = Vec::new();
        let mut tree = Self::new(ClusterData::new(String::new()));
        let root = tree.root();

        // Depth-first, so every parent is inserted before its children.
        let mut stack = vec![(None, spec)];
        while let Some((parent, spec)) = stack.pop() {
            let ClusterSpec {
                label,
                preview,
                weight,
                positions,
                children,
            } = spec;
            let data = ClusterData {
                weight: 0.0,
                label,
                preview,
                positions: positions.into_iter().collect(),
            };
            let id = match parent {
                None => {
                    tree.nodes[root.idx()].data = data;
                    root
                }
                Some(parent) => tree.insert(parent, data),
            };
            declared.push(weight);
            // Pushed in reverse so children are inserted in their given order.
            for child in children.into_iter().rev() {
                stack.push((Some(id), child));
            }
        }

        tree.resolve_weights(&declared)?;
        Ok(tree)
    }

    /// Insert a new node as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree.
    pub fn insert(&mut self, parent: NodeId, data: ClusterData) -> NodeId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        let id = NodeId(self.nodes.len() as u32);
        let parent_node = self.node_mut(parent);
        let sibling_index = parent_node.children.len();
        let depth = parent_node.depth + 1;
        parent_node.children.push(id);
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            depth,
            sibling_index,
            data,
        });
        id
    }

    /// Recompute every cluster's weight as the sum of its children's weights.
    ///
    /// Leaf weights are left untouched.
    pub fn aggregate_weights(&mut self) {
        // Children always come after their parent in the arena.
        for idx in (0..self.nodes.len()).rev() {
            if self.nodes[idx].children.is_empty() {
                continue;
            }
            let sum = self.children_weight(idx);
            self.nodes[idx].data.weight = sum;
        }
    }

    /// Check that every weight is finite and non-negative, and that every
    /// cluster's weight equals the sum of its children's weights.
    pub fn validate_weights(&self) -> Result<(), TreeError> {
        for (idx, node) in self.nodes.iter().enumerate() {
            let id = Self::id_at(idx);
            let weight = node.data.weight;
            if !(weight.is_finite() && weight >= 0.0) {
                return Err(TreeError::InvalidWeight { node: id, weight });
            }
            if !node.children.is_empty() {
                let computed = self.children_weight(idx);
                if !weights_match(weight, computed) {
                    return Err(TreeError::WeightMismatch {
                        node: id,
                        declared: weight,
                        computed,
                    });
                }
            }
        }
        Ok(())
    }

    /// The root node.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, including the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if `id` was produced by this tree.
    #[must_use]
    pub fn contains_id(&self, id: NodeId) -> bool {
        id.idx() < self.nodes.len()
    }

    /// All node handles in insertion order (parents before children).
    pub fn ids(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(Self::id_at)
    }

    /// Payload of a node.
    #[must_use]
    pub fn data(&self, id: NodeId) -> &ClusterData {
        &self.node(id).data
    }

    /// Parent of a node, or `None` for the root.
    #[must_use]
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Children of a node, in order.
    #[must_use]
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Distance from the root; the root has depth `0`.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        self.node(id).depth
    }

    /// Returns true if the node has no children.
    #[must_use]
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.node(id).children.is_empty()
    }

    /// Index of `id` within its parent's children; `0` for the root.
    #[must_use]
    pub fn sibling_index(&self, id: NodeId) -> usize {
        self.node(id).sibling_index
    }

    /// Iterate `id` and its ancestors, ending at the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: Some(id),
        }
    }

    /// Iterate the subtree rooted at `id` in depth-first pre-order, starting with `id`.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            stack: vec![id],
        }
    }

    /// Iterate the leaves of the subtree rooted at `id`, in depth-first order.
    ///
    /// A leaf's only leaf is itself.
    pub fn leaves(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.descendants(id).filter(|&n| self.is_leaf(n))
    }

    /// Returns true if `node` is `ancestor` or lies inside its subtree.
    #[must_use]
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let target_depth = self.depth(ancestor);
        self.ancestors(node)
            .take_while(|&n| self.depth(n) >= target_depth)
            .any(|n| n == ancestor)
    }

    /// The child of `branch` on the path toward `target`.
    ///
    /// Returns `None` unless `branch` is a strict ancestor of `target`; in
    /// particular `branch_child(n, n)` is `None`.
    #[must_use]
    pub fn branch_child(&self, branch: NodeId, target: NodeId) -> Option<NodeId> {
        let mut below = None;
        for node in self.ancestors(target) {
            if node == branch {
                return below;
            }
            below = Some(node);
        }
        None
    }

    /// Sibling index of the child of `branch` that leads toward `target`.
    ///
    /// Returns `None` (the "no branch" result) when `branch` is not a strict
    /// ancestor of `target`, including when `branch == target`.
    #[must_use]
    pub fn branch_index(&self, branch: NodeId, target: NodeId) -> Option<usize> {
        self.branch_child(branch, target)
            .map(|child| self.sibling_index(child))
    }

    /// A node's stored position at `min(level, depth)` under the given layout level.
    ///
    /// Level 0 is the origin. Returns `None` if the node stores no position
    /// for a level that needs one.
    #[must_use]
    pub fn leaf_location(&self, id: NodeId, level: LayoutLevel) -> Option<Point> {
        let node = self.node(id);
        node.data.position_at(level.resolve(node.depth))
    }

    // --- internals ---

    fn node(&self, id: NodeId) -> &Node {
        self.nodes.get(id.idx()).expect("dangling NodeId")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes.get_mut(id.idx()).expect("dangling NodeId")
    }

    fn id_at(idx: usize) -> NodeId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        NodeId(idx as u32)
    }

    fn children_weight(&self, idx: usize) -> f64 {
        self.nodes[idx]
            .children
            .iter()
            .map(|c| self.nodes[c.idx()].data.weight)
            .sum()
    }

    /// Fill weights bottom-up from the declared ones, rejecting inconsistent input.
    fn resolve_weights(&mut self, declared: &[Option<f64>]) -> Result<(), TreeError> {
        for idx in (0..self.nodes.len()).rev() {
            let id = Self::id_at(idx);
            let declared_weight = declared.get(idx).copied().flatten();
            let weight = if self.nodes[idx].children.is_empty() {
                declared_weight.unwrap_or(1.0)
            } else {
                let computed = self.children_weight(idx);
                if let Some(declared) = declared_weight
                    && !weights_match(declared, computed)
                {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(?id, declared, computed, "cluster weight mismatch");
                    return Err(TreeError::WeightMismatch {
                        node: id,
                        declared,
                        computed,
                    });
                }
                computed
            };
            if !(weight.is_finite() && weight >= 0.0) {
                #[cfg(feature = "tracing")]
                tracing::debug!(?id, weight, "invalid cluster weight");
                return Err(TreeError::InvalidWeight { node: id, weight });
            }
            self.nodes[idx].data.weight = weight;
        }
        Ok(())
    }
}

fn weights_match(declared: f64, computed: f64) -> bool {
    let scale = declared.abs().max(computed.abs()).max(1.0);
    (declared - computed).abs() <= WEIGHT_TOLERANCE * scale
}

/// Iterator over a node and its ancestors, returned by [`ClusterTree::ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    tree: &'a ClusterTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent_of(current);
        Some(current)
    }
}

impl FusedIterator for Ancestors<'_> {}

/// Depth-first pre-order iterator over a subtree, returned by [`ClusterTree::descendants`].
#[derive(Clone, Debug)]
pub struct Descendants<'a> {
    tree: &'a ClusterTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.stack.pop()?;
        // The `.rev()` keeps children in their given order.
        let children = self.tree.children_of(current);
        self.stack.extend(children.iter().rev().copied());
        Some(current)
    }
}

impl FusedIterator for Descendants<'_> {}
