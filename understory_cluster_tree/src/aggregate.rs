// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aggregate geometry of clusters: bounds, centroid, spread, and spacing.

use alloc::vec::Vec;

use hashbrown::HashMap;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Circle, Point, Rect};
use understory_zoom::min_pairwise_distance;

use crate::{ClusterTree, LayoutLevel, NodeId};

type Key = (NodeId, LayoutLevel);

/// Arithmetic mean of `points`, or `None` for an empty slice.
#[must_use]
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let sum = points
        .iter()
        .fold(kurbo::Vec2::ZERO, |acc, p| acc + p.to_vec2());
    Some((sum / n).to_point())
}

/// Population standard deviation of the distances from `points` to `center`.
///
/// Computed as `sqrt(mean(d²) - mean(d)²)`, clamped at zero against rounding.
/// Returns `0.0` for an empty slice.
#[must_use]
pub fn spread(points: &[Point], center: Point) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let n = points.len() as f64;
    let (sum, sum_sq) = points.iter().fold((0.0, 0.0), |(s, sq), p| {
        let d2 = p.distance_squared(center);
        (s + d2.sqrt(), sq + d2)
    });
    let mean = sum / n;
    (sum_sq / n - mean * mean).max(0.0).sqrt()
}

/// Axis-aligned box covering `points`, or `None` for an empty slice.
#[must_use]
pub fn bounding_rect(points: &[Point]) -> Option<Rect> {
    let (first, rest) = points.split_first()?;
    Some(
        rest.iter()
            .fold(Rect::from_points(*first, *first), |r, p| r.union_pt(*p)),
    )
}

/// Memoized aggregate geometry for the nodes of one [`ClusterTree`].
///
/// Every query is a pure function of the tree's (immutable) positions, so
/// results are cached per `(node, layout level)` for the lifetime of the tree.
/// Leaves without a stored position for the requested level are skipped.
///
/// ```rust
/// use kurbo::{Point, Rect};
/// use understory_cluster_tree::{ClusterData, ClusterGeometry, ClusterTree, LayoutLevel};
///
/// let mut tree = ClusterTree::new(ClusterData::new("root"));
/// let root = tree.root();
/// tree.insert(root, ClusterData::leaf("a", Point::new(0.0, 0.0)));
/// tree.insert(root, ClusterData::leaf("b", Point::new(4.0, 3.0)));
///
/// let mut geometry = ClusterGeometry::new();
/// assert_eq!(
///     geometry.bounding_rect(&tree, root, LayoutLevel::Own),
///     Some(Rect::new(0.0, 0.0, 4.0, 3.0))
/// );
/// assert_eq!(geometry.min_spacing(&tree, root, LayoutLevel::Own), 5.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ClusterGeometry {
    positions: HashMap<Key, Vec<Point>>,
    bounds: HashMap<Key, Option<Rect>>,
    circles: HashMap<Key, Option<Circle>>,
    spacing: HashMap<Key, f64>,
}

impl ClusterGeometry {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions of the leaves under `node` at `level`, in depth-first order.
    pub fn leaf_positions(
        &mut self,
        tree: &ClusterTree,
        node: NodeId,
        level: LayoutLevel,
    ) -> &[Point] {
        self.positions
            .entry((node, level))
            .or_insert_with(|| {
                tree.leaves(node)
                    .filter_map(|leaf| tree.leaf_location(leaf, level))
                    .collect()
            })
            .as_slice()
    }

    /// Box covering every leaf position under `node` at `level`.
    ///
    /// `None` when no leaf under `node` has a position for that level.
    pub fn bounding_rect(
        &mut self,
        tree: &ClusterTree,
        node: NodeId,
        level: LayoutLevel,
    ) -> Option<Rect> {
        let key = (node, level);
        if let Some(&rect) = self.bounds.get(&key) {
            return rect;
        }
        let rect = bounding_rect(self.leaf_positions(tree, node, level));
        self.bounds.insert(key, rect);
        rect
    }

    /// Circle at the centroid of the leaves under `node`, with the spread as radius.
    ///
    /// `None` when no leaf under `node` has a position for that level.
    pub fn circle(
        &mut self,
        tree: &ClusterTree,
        node: NodeId,
        level: LayoutLevel,
    ) -> Option<Circle> {
        let key = (node, level);
        if let Some(&circle) = self.circles.get(&key) {
            return circle;
        }
        let points = self.leaf_positions(tree, node, level);
        let circle = centroid(points).map(|c| Circle::new(c, spread(points, c)));
        self.circles.insert(key, circle);
        circle
    }

    /// Centroid of the leaves under `node`.
    pub fn centroid(
        &mut self,
        tree: &ClusterTree,
        node: NodeId,
        level: LayoutLevel,
    ) -> Option<Point> {
        self.circle(tree, node, level).map(|c| c.center)
    }

    /// Spread (visual radius) of the leaves under `node`.
    pub fn spread(&mut self, tree: &ClusterTree, node: NodeId, level: LayoutLevel) -> Option<f64> {
        self.circle(tree, node, level).map(|c| c.radius)
    }

    /// Closest-pair distance between the leaves under `node`.
    ///
    /// `f64::INFINITY` with fewer than two positioned leaves, `0.0` when two coincide.
    pub fn min_spacing(&mut self, tree: &ClusterTree, node: NodeId, level: LayoutLevel) -> f64 {
        let key = (node, level);
        if let Some(&spacing) = self.spacing.get(&key) {
            return spacing;
        }
        let spacing = min_pairwise_distance(self.leaf_positions(tree, node, level));
        self.spacing.insert(key, spacing);
        spacing
    }

    /// Number of memoized leaf-position sets.
    #[must_use]
    pub fn cached_nodes(&self) -> usize {
        self.positions.len()
    }

    /// Drop every memoized value.
    ///
    /// Only needed when the cache is reused with a different tree.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.bounds.clear();
        self.circles.clear();
        self.spacing.clear();
    }
}
