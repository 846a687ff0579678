// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic color-index assignment for sibling clusters.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::{ClusterTree, NodeId};

/// How color indices are assigned to nodes.
///
/// Both policies are deterministic and depend only on sibling order. A
/// visualization picks one policy and keeps it.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorPolicy {
    /// Start from the sibling index and bump it by one whenever it would not
    /// stay clear of the parent's index, so a node never shares a color
    /// index with its parent.
    #[default]
    AvoidParent,
    /// Use the sibling index as is. Adjacent levels may share a color index.
    SiblingIndex,
}

impl ColorPolicy {
    /// Color index for a node at `sibling_index` whose parent has `parent_color`
    /// (`None` for the root).
    #[must_use]
    pub fn assign(self, sibling_index: usize, parent_color: Option<usize>) -> usize {
        match (self, parent_color) {
            (Self::AvoidParent, Some(parent)) if parent <= sibling_index => sibling_index + 1,
            _ => sibling_index,
        }
    }
}

/// Memoized color indices for one tree under one [`ColorPolicy`].
///
/// Lookups are `O(depth)` the first time a branch is seen and `O(1)` after
/// that. Entries stay valid for the lifetime of the tree.
#[derive(Clone, Debug, Default)]
pub struct ColorIndices {
    policy: ColorPolicy,
    cache: HashMap<NodeId, usize>,
}

impl ColorIndices {
    /// Create an empty cache for `policy`.
    #[must_use]
    pub fn new(policy: ColorPolicy) -> Self {
        Self {
            policy,
            cache: HashMap::new(),
        }
    }

    /// The policy this cache assigns with.
    #[must_use]
    pub const fn policy(&self) -> ColorPolicy {
        self.policy
    }

    /// Color index of `id`.
    pub fn get(&mut self, tree: &ClusterTree, id: NodeId) -> usize {
        if let Some(&color) = self.cache.get(&id) {
            return color;
        }
        if self.policy == ColorPolicy::SiblingIndex {
            let color = tree.sibling_index(id);
            self.cache.insert(id, color);
            return color;
        }

        // Walk up to the nearest ancestor with a known color, then resolve downward.
        let mut pending: Vec<NodeId> = Vec::new();
        let mut parent_color = None;
        for node in tree.ancestors(id) {
            if let Some(&color) = self.cache.get(&node) {
                parent_color = Some(color);
                break;
            }
            pending.push(node);
        }
        let mut color = parent_color.unwrap_or(0);
        for node in pending.into_iter().rev() {
            color = self.policy.assign(tree.sibling_index(node), parent_color);
            self.cache.insert(node, color);
            parent_color = Some(color);
        }
        color
    }

    /// Number of memoized entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns true if nothing has been memoized yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
