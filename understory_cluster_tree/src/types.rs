// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the cluster tree: node handles, payloads, and layout levels.

use alloc::string::String;

use kurbo::Point;
use smallvec::SmallVec;

/// Handle of a node in a [`ClusterTree`](crate::ClusterTree).
///
/// Handles are plain arena indices. Trees are append-only, so a handle stays
/// valid for the lifetime of the tree that produced it. Using a handle with a
/// different tree is a caller error.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Position of this node in insertion order. The root is always `0`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.idx()
    }
}

/// Per-node payload: size, display label, preview reference, and layout positions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClusterData {
    /// Aggregate size of the cluster. For internal nodes this equals the sum of
    /// the children's weights once weights have been aggregated.
    pub weight: f64,
    /// Display label.
    pub label: String,
    /// Reference to a preview image or similar resource (for example a path or URL).
    pub preview: Option<String>,
    /// Stored positions, one per layout level, starting with level 1.
    ///
    /// Level 0 is the whole data set collapsed onto the origin, so it is never stored.
    pub positions: SmallVec<[Point; 4]>,
}

impl ClusterData {
    /// A payload with a label and no positions.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// A unit-weight leaf placed at `position` on every layout level.
    pub fn leaf(label: impl Into<String>, position: Point) -> Self {
        let mut positions = SmallVec::new();
        positions.push(position);
        Self {
            weight: 1.0,
            label: label.into(),
            preview: None,
            positions,
        }
    }

    /// Set the weight.
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Set the preview reference.
    #[must_use]
    pub fn with_preview(mut self, preview: impl Into<String>) -> Self {
        self.preview = Some(preview.into());
        self
    }

    /// Replace the stored per-level positions (level 1 first).
    #[must_use]
    pub fn with_positions(mut self, positions: impl IntoIterator<Item = Point>) -> Self {
        self.positions = positions.into_iter().collect();
        self
    }

    /// Stored position at `level`.
    ///
    /// Level 0 is the origin. Levels beyond the stored positions report the
    /// deepest stored one. Returns `None` when a position is required but
    /// none is stored.
    #[must_use]
    pub fn position_at(&self, level: usize) -> Option<Point> {
        if level == 0 {
            return Some(Point::ORIGIN);
        }
        let last = self.positions.len().checked_sub(1)?;
        self.positions.get((level - 1).min(last)).copied()
    }
}

/// Which layout level to read leaf positions from.
///
/// Positions may be precomputed per level of the hierarchy, so that the
/// children of a cluster are laid out relative to each other rather than to
/// the whole data set.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutLevel {
    /// Each node reports the position stored for its own depth.
    #[default]
    Own,
    /// Nodes report the position for this level, or for their own depth if
    /// they are shallower than the level.
    Level(usize),
}

impl LayoutLevel {
    /// The stored level a node at `depth` reports under this setting.
    #[must_use]
    pub fn resolve(self, depth: usize) -> usize {
        match self {
            Self::Own => depth,
            Self::Level(level) => level.min(depth),
        }
    }
}
