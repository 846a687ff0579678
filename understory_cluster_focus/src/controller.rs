// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The focus controller: drill-down navigation over a [`ClusterTree`].

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::Size;
use understory_cluster_tree::{ClusterGeometry, ClusterTree, ColorIndices, LayoutLevel, NodeId};
use understory_zoom::{
    View, ZoomPath, fit_to_frame, max_zoom_scale, rect_to_view, scale_about_center,
};

use crate::appearance::{ClusterMarker, HoverPreview, Marker, NodeAppearance};
use crate::config::{Features, FocusConfig, LayoutMode, ScaleLimit};
use crate::transition::ZoomTransition;

/// A pointer activation reported by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Activation {
    /// A node (typically a leaf marker) was clicked.
    ///
    /// Descends to the child of the focus on the path toward the node. A node outside
    /// the focused subtree, or the focus itself, is ignored.
    Node(NodeId),
    /// Empty space was clicked: ascend to the parent of the focus.
    Background,
}

/// Result of a focus change.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FocusChange {
    /// Focus before the change.
    pub previous: NodeId,
    /// Focus after the change.
    pub focus: NodeId,
    /// The view the controller is moving to.
    pub view: View,
    /// Generation of this change. Every change supersedes all earlier ones.
    pub generation: u64,
    /// Whether a transition was started; otherwise the view was applied immediately.
    pub animated: bool,
}

/// Drill-down navigation state for one visualization instance.
///
/// The controller owns the tree, the focused node, the view derived from it, and any
/// in-flight [`ZoomTransition`]. Aggregate geometry and color indices are memoized
/// inside the controller, so most queries take `&mut self`.
///
/// Only one transition is ever active: a new focus change replaces the running one and
/// starts from whatever view was displayed at that moment.
#[derive(Clone, Debug)]
pub struct FocusController {
    tree: ClusterTree,
    frame: Size,
    config: FocusConfig,
    geometry: ClusterGeometry,
    colors: ColorIndices,
    focus: NodeId,
    target: View,
    displayed: View,
    transition: Option<ZoomTransition>,
    generation: u64,
    hovered: Option<NodeId>,
}

impl FocusController {
    /// Creates a controller focused on the root, showing the root's view immediately.
    pub fn new(tree: ClusterTree, frame: Size, config: FocusConfig) -> Self {
        let colors = ColorIndices::new(config.color_policy);
        let focus = tree.root();
        let mut controller = Self {
            tree,
            frame,
            config,
            geometry: ClusterGeometry::new(),
            colors,
            focus,
            target: View::IDENTITY,
            displayed: View::IDENTITY,
            transition: None,
            generation: 0,
            hovered: None,
        };
        if let Some(view) = controller.target_view(focus) {
            controller.target = view;
            controller.displayed = view;
        }
        controller
    }

    /// The tree being navigated.
    #[must_use]
    pub fn tree(&self) -> &ClusterTree {
        &self.tree
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &FocusConfig {
        &self.config
    }

    /// The frame size in display units.
    #[must_use]
    pub fn frame(&self) -> Size {
        self.frame
    }

    /// The focused node.
    #[must_use]
    pub fn focused(&self) -> NodeId {
        self.focus
    }

    /// The view for the current focus, where any running transition ends.
    #[must_use]
    pub fn view(&self) -> View {
        self.target
    }

    /// The view last produced by [`tick`](Self::tick) or applied directly.
    #[must_use]
    pub fn displayed_view(&self) -> View {
        self.displayed
    }

    /// The running transition, if any.
    #[must_use]
    pub fn transition(&self) -> Option<&ZoomTransition> {
        self.transition.as_ref()
    }

    /// Generation of the latest focus change. `0` before any change.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The node last passed to [`hover`](Self::hover), if it is still hovered.
    #[must_use]
    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    /// Layout level leaves are displayed at while `node` is focused.
    #[must_use]
    pub fn layout_level_for(&self, node: NodeId) -> LayoutLevel {
        match self.config.layout {
            LayoutMode::Static => LayoutLevel::Own,
            LayoutMode::PerLevel => LayoutLevel::Level(self.tree.depth(node) + 1),
        }
    }

    /// Layout level leaves are displayed at under the current focus.
    #[must_use]
    pub fn layout_level(&self) -> LayoutLevel {
        self.layout_level_for(self.focus)
    }

    /// Computes the view that frames `node`, without changing focus.
    ///
    /// The node's bounding rectangle is grown by the configured margin, fitted to the
    /// frame's aspect ratio, and converted to a view. The scale is then clamped by the
    /// configured [`ScaleLimit`]. If the scale is still unusable (for example when the
    /// node's leaves all share one point and no limit applies), the current scale is kept
    /// and only the center moves.
    ///
    /// Returns `None` if the node has no positioned leaves.
    pub fn target_view(&mut self, node: NodeId) -> Option<View> {
        let level = self.layout_level_for(node);
        let bounds = self.geometry.bounding_rect(&self.tree, node, level)?;
        let padded = scale_about_center(bounds, self.config.margin);
        let framed = fit_to_frame(padded, self.frame);
        let mut view = rect_to_view(framed, self.frame.width);
        if let Some(max_scale) = self.max_scale(node, level) {
            // Also catches an infinite scale from degenerate bounds.
            if !(view.scale <= max_scale) {
                view.scale = max_scale;
            }
        }
        if !view.is_usable() {
            view.scale = self.target.scale;
        }
        view.is_usable().then_some(view)
    }

    /// Moves the focus to `node`.
    ///
    /// With animation enabled, a transition from the currently displayed view to the new
    /// target starts and replaces any running one. Otherwise the target view applies
    /// immediately. If `node` has no positioned leaves the view is left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `node` does not belong to the controller's tree.
    pub fn focus(&mut self, node: NodeId) -> FocusChange {
        let previous = self.focus;
        self.focus = node;
        self.generation += 1;
        if let Some(view) = self.target_view(node) {
            self.target = view;
        }

        #[cfg(feature = "tracing")]
        if let Some(running) = &self.transition {
            tracing::trace!(
                superseded = running.generation(),
                generation = self.generation,
                "replacing in-flight zoom transition"
            );
        }

        let animated = self.config.animates();
        if animated {
            let path = ZoomPath::new(self.displayed, self.target, self.frame.width);
            let transition = ZoomTransition::new(path, self.config.duration, self.generation);
            self.transition = Some(transition);
        } else {
            self.transition = None;
            self.displayed = self.target;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            previous = previous.index(),
            focus = node.index(),
            scale = self.target.scale,
            generation = self.generation,
            animated,
            "focus changed"
        );

        FocusChange {
            previous,
            focus: node,
            view: self.target,
            generation: self.generation,
            animated,
        }
    }

    /// Applies a pointer activation. Returns `None` when it does not change the focus.
    pub fn activate(&mut self, activation: Activation) -> Option<FocusChange> {
        let next = match activation {
            Activation::Node(node) if self.tree.contains_id(node) => {
                self.tree.branch_child(self.focus, node)
            }
            Activation::Node(_) => None,
            Activation::Background => self.tree.parent_of(self.focus),
        };
        let Some(next) = next else {
            #[cfg(feature = "tracing")]
            tracing::trace!(?activation, "activation ignored");
            return None;
        };
        Some(self.focus(next))
    }

    /// Advances the running transition to `elapsed` since it started and returns the
    /// view to display. Without a transition this is the current view.
    pub fn tick(&mut self, elapsed: Duration) -> View {
        let Some(transition) = self.transition.as_ref() else {
            return self.displayed;
        };
        if transition.is_finished(elapsed) {
            self.finish_transition();
        } else {
            self.displayed = transition.view_at(elapsed);
        }
        self.displayed
    }

    /// Jumps to the end of the running transition, if any.
    pub fn finish_transition(&mut self) {
        self.transition = None;
        self.displayed = self.target;
    }

    /// Finishes the transition started by focus change `generation`.
    ///
    /// Returns false, and does nothing, if that transition has already been superseded
    /// or finished.
    pub fn complete_transition(&mut self, generation: u64) -> bool {
        match self.transition {
            Some(transition) if transition.generation() == generation => {
                self.finish_transition();
                true
            }
            _ => false,
        }
    }

    /// Changes the frame size and reframes the current focus without animation.
    pub fn set_frame(&mut self, frame: Size) {
        self.frame = frame;
        if let Some(view) = self.target_view(self.focus) {
            self.target = view;
        }
        self.finish_transition();
    }

    /// Display state of `node` under the current focus.
    ///
    /// Nodes inside the focused subtree are shown, pickable, and colored after the focus
    /// child they belong to (the focus's own color for the focus itself). Everything else
    /// is hidden, or fading out while a transition runs.
    pub fn appearance(&mut self, node: NodeId) -> NodeAppearance {
        if !self.tree.contains(self.focus, node) {
            return NodeAppearance::hidden(self.transition.is_some());
        }
        let branch = self.tree.branch_child(self.focus, node);
        let colored = branch.unwrap_or(self.focus);
        let index = self.colors.get(&self.tree, colored);
        NodeAppearance::shown(self.config.palette.color(index))
    }

    /// Color index of `node` under the configured policy.
    pub fn color_index(&mut self, node: NodeId) -> usize {
        self.colors.get(&self.tree, node)
    }

    /// Every leaf of the tree with its position under the current layout and its
    /// display state.
    pub fn markers(&mut self) -> Vec<Marker> {
        let level = self.layout_level();
        let leaves: Vec<NodeId> = self.tree.leaves(self.tree.root()).collect();
        leaves
            .into_iter()
            .map(|node| Marker {
                node,
                position: self.tree.leaf_location(node, level),
                appearance: self.appearance(node),
            })
            .collect()
    }

    /// One circle per child of the focus, when [`Features::CLUSTER_OVERLAY`] is enabled.
    pub fn cluster_overlay(&mut self) -> Vec<ClusterMarker> {
        if !self.config.features.contains(Features::CLUSTER_OVERLAY) {
            return Vec::new();
        }
        let level = self.layout_level();
        let children = self.tree.children_of(self.focus).to_vec();
        children
            .into_iter()
            .filter_map(|node| {
                let circle = self.geometry.circle(&self.tree, node, level)?;
                let index = self.colors.get(&self.tree, node);
                Some(ClusterMarker {
                    node,
                    circle,
                    color: self.config.palette.color(index),
                })
            })
            .collect()
    }

    /// Records the hovered node and returns its preview.
    ///
    /// Returns `None` when nothing is hovered, when the node does not belong to the
    /// tree, or when [`Features::HOVER_PREVIEW`] is disabled.
    pub fn hover(&mut self, node: Option<NodeId>) -> Option<HoverPreview<'_>> {
        self.hovered = node.filter(|&n| self.tree.contains_id(n));
        self.hover_preview()
    }

    /// Preview of the currently hovered node.
    #[must_use]
    pub fn hover_preview(&self) -> Option<HoverPreview<'_>> {
        if !self.config.features.contains(Features::HOVER_PREVIEW) {
            return None;
        }
        let node = self.hovered?;
        let data = self.tree.data(node);
        Some(HoverPreview {
            node,
            label: &data.label,
            preview: data.preview.as_deref(),
            branch: self.tree.branch_child(self.focus, node),
        })
    }

    fn max_scale(&mut self, node: NodeId, level: LayoutLevel) -> Option<f64> {
        match self.config.scale_limit {
            ScaleLimit::ClosestPair {
                target_pixel_spacing,
            } => {
                let spacing = self.geometry.min_spacing(&self.tree, node, level);
                max_zoom_scale(target_pixel_spacing, spacing)
            }
            ScaleLimit::Fixed { max_scale } => {
                let usable = max_scale.is_finite() && max_scale > 0.0;
                usable.then_some(max_scale)
            }
            ScaleLimit::Unbounded => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::Visibility;
    use alloc::vec;
    use kurbo::Point;
    use understory_cluster_tree::ClusterSpec;

    const FRAME: Size = Size::new(800.0, 600.0);

    /// root -> { A: {a0 (0,0), a1 (10,0)}, B: {b0 (100,100)} }
    fn two_branches() -> ClusterTree {
        let b0 = ClusterSpec::leaf("b0", Point::new(100.0, 100.0));
        let b0 = b0.with_preview("b0.png");
        ClusterTree::build(ClusterSpec::cluster(
            "root",
            vec![
                ClusterSpec::cluster(
                    "A",
                    vec![
                        ClusterSpec::leaf("a0", Point::new(0.0, 0.0)),
                        ClusterSpec::leaf("a1", Point::new(10.0, 0.0)),
                    ],
                ),
                ClusterSpec::cluster("B", vec![b0]),
            ],
        ))
        .unwrap()
    }

    fn ids(tree: &ClusterTree) -> [NodeId; 6] {
        // Pre-order: root, A, a0, a1, B, b0.
        let all: Vec<NodeId> = tree.descendants(tree.root()).collect();
        [all[0], all[1], all[2], all[3], all[4], all[5]]
    }

    /// Default configuration without animation.
    fn still() -> FocusConfig {
        FocusConfig {
            features: Features::HOVER_PREVIEW,
            ..FocusConfig::default()
        }
    }

    #[test]
    fn starts_on_root_with_spacing_clamped_view() {
        let limit = ScaleLimit::ClosestPair {
            target_pixel_spacing: 12.0,
        };
        let config = still().with_scale_limit(limit);
        let controller = FocusController::new(two_branches(), FRAME, config);
        let view = controller.view();
        assert_eq!(controller.focused(), controller.tree().root());
        // Closest pair under the root is a0-a1 at distance 10.
        assert!((view.scale - 1.2).abs() < 1e-12);
        assert_eq!(controller.displayed_view(), view);
        assert!(controller.transition().is_none());
    }

    #[test]
    fn unbounded_root_view_fits_margin_bounds() {
        let config = still().with_scale_limit(ScaleLimit::Unbounded);
        let controller = FocusController::new(two_branches(), FRAME, config);
        let view = controller.view();
        // Bounds 100x100 grown to 110x110, fitted to 4:3 -> 146.67 x 110.
        let expected = 800.0 / (110.0 * 800.0 / 600.0);
        assert!((view.scale - expected).abs() < 1e-9);
        assert!((view.center - Point::new(50.0, 50.0)).hypot() < 1e-9);
    }

    #[test]
    fn focusing_a_branch_hides_the_rest() {
        let tree = two_branches();
        let [_, a, a0, a1, b, b0] = ids(&tree);
        let mut controller = FocusController::new(tree, FRAME, still());
        let change = controller.focus(a);
        assert_eq!(change.focus, a);
        assert!(!change.animated);
        assert_eq!(controller.view().center, Point::new(5.0, 0.0));

        for node in [a0, a1] {
            let appearance = controller.appearance(node);
            assert_eq!(appearance.visibility, Visibility::Shown);
            assert!(appearance.pickable);
            assert_eq!(appearance.opacity, 1.0);
        }
        for node in [b, b0] {
            let appearance = controller.appearance(node);
            assert_eq!(appearance.visibility, Visibility::Hidden);
            assert!(!appearance.pickable);
            assert_eq!(appearance.opacity, 0.0);
        }
    }

    #[test]
    fn leaves_take_their_focus_child_color() {
        let tree = two_branches();
        let [root, a, a0, _, b, b0] = ids(&tree);
        let mut controller = FocusController::new(tree, FRAME, still());
        let palette = controller.config().palette.clone();
        let a_color = palette.color(controller.color_index(a));
        let b_color = palette.color(controller.color_index(b));
        assert_eq!(controller.appearance(a0).color, a_color);
        assert_eq!(controller.appearance(b0).color, b_color);
        assert_ne!(a_color, b_color);
        assert_eq!(controller.appearance(root).color, palette.color(0));
    }

    #[test]
    fn descend_then_ignore() {
        let tree = two_branches();
        let [root, a, a0, _, _, b0] = ids(&tree);
        let mut controller = FocusController::new(tree, FRAME, still());

        let change = controller.activate(Activation::Node(a0)).unwrap();
        assert_eq!((change.previous, change.focus), (root, a));
        // Outside the focused branch.
        assert!(controller.activate(Activation::Node(b0)).is_none());
        // The focus itself.
        assert!(controller.activate(Activation::Node(a)).is_none());

        let change = controller.activate(Activation::Node(a0)).unwrap();
        assert_eq!(change.focus, a0);
        assert!(controller.activate(Activation::Node(a0)).is_none());
        assert_eq!(controller.focused(), a0);
    }

    #[test]
    fn background_ascends_until_root() {
        let tree = two_branches();
        let [root, a, a0, ..] = ids(&tree);
        let mut controller = FocusController::new(tree, FRAME, still());
        controller.focus(a0);
        let up = controller.activate(Activation::Background).unwrap();
        assert_eq!(up.focus, a);
        let up = controller.activate(Activation::Background).unwrap();
        assert_eq!(up.focus, root);
        assert!(controller.activate(Activation::Background).is_none());
    }

    #[test]
    fn degenerate_focus_keeps_finite_view() {
        let tree = two_branches();
        let [.., b, _] = ids(&tree);
        let config = still().with_scale_limit(ScaleLimit::Unbounded);
        let mut controller = FocusController::new(tree, FRAME, config);
        let before = controller.view();
        // B has a single leaf: zero-size bounds and no scale limit.
        let change = controller.focus(b);
        assert_eq!(change.view.center, Point::new(100.0, 100.0));
        assert_eq!(change.view.scale, before.scale);
        assert!(change.view.is_usable());
    }

    #[test]
    fn single_leaf_is_clamped_by_fixed_limit() {
        let tree = two_branches();
        let [.., b0] = ids(&tree);
        let limit = ScaleLimit::Fixed { max_scale: 8.0 };
        let config = still().with_scale_limit(limit);
        let mut controller = FocusController::new(tree, FRAME, config);
        assert_eq!(controller.focus(b0).view.scale, 8.0);
    }

    #[test]
    fn scale_limits_only_change_the_cap() {
        let tree = two_branches();
        let [_, a, ..] = ids(&tree);
        let scale_with = |limit: ScaleLimit| {
            let config = still().with_scale_limit(limit);
            let mut controller = FocusController::new(tree.clone(), FRAME, config);
            controller.focus(a).view
        };
        // A spans 10 units; with the margin the fit is 11 units wide.
        let fitted = scale_with(ScaleLimit::Unbounded);
        assert!((fitted.scale - 800.0 / 11.0).abs() < 1e-9);
        let spaced = scale_with(ScaleLimit::ClosestPair {
            target_pixel_spacing: 12.0,
        });
        assert!((spaced.scale - 1.2).abs() < 1e-12);
        let fixed = scale_with(ScaleLimit::Fixed { max_scale: 8.0 });
        assert_eq!(fixed.scale, 8.0);
        let loose = scale_with(ScaleLimit::Fixed { max_scale: 1e3 });
        assert_eq!(loose.scale, fitted.scale);
        let ignored = scale_with(ScaleLimit::Fixed { max_scale: -1.0 });
        assert_eq!(ignored.scale, fitted.scale);
        for view in [spaced, fixed, loose, ignored] {
            assert_eq!(view.center, fitted.center);
        }
    }

    #[test]
    fn transitions_run_and_supersede() {
        let tree = two_branches();
        let [_, a, a0, _, b, b0] = ids(&tree);
        let duration = Duration::from_millis(100);
        let config = FocusConfig::default().with_duration(duration);
        let mut controller = FocusController::new(tree, FRAME, config);
        let start = controller.displayed_view();

        let first = controller.focus(a);
        assert!(first.animated);
        assert_eq!(controller.tick(Duration::ZERO), start);
        let midway = controller.tick(Duration::from_millis(50));
        assert_ne!(midway, start);
        assert_ne!(midway, first.view);

        // A new focus change starts from what is on screen now.
        let second = controller.focus(b);
        assert!(second.generation > first.generation);
        let transition = controller.transition().unwrap();
        assert_eq!(transition.path().start(), midway);
        assert!(!controller.complete_transition(first.generation));
        assert_eq!(controller.appearance(b0).visibility, Visibility::Shown);
        assert_eq!(controller.appearance(a0).visibility, Visibility::FadingOut);

        assert_eq!(controller.tick(Duration::from_millis(100)), second.view);
        assert!(controller.transition().is_none());
        assert_eq!(controller.appearance(a0).visibility, Visibility::Hidden);
    }

    #[test]
    fn complete_transition_matches_generation() {
        let tree = two_branches();
        let [_, a, ..] = ids(&tree);
        let mut controller = FocusController::new(tree, FRAME, FocusConfig::default());
        let change = controller.focus(a);
        assert!(controller.complete_transition(change.generation));
        assert_eq!(controller.displayed_view(), change.view);
        assert!(!controller.complete_transition(change.generation));
    }

    #[test]
    fn markers_cover_every_leaf() {
        let tree = two_branches();
        let [_, a, a0, a1, _, b0] = ids(&tree);
        let mut controller = FocusController::new(tree, FRAME, still());
        controller.focus(a);
        let markers = controller.markers();
        assert_eq!(
            markers.iter().map(|m| m.node).collect::<Vec<_>>(),
            vec![a0, a1, b0]
        );
        assert_eq!(markers[1].position, Some(Point::new(10.0, 0.0)));
        assert_eq!(markers[2].appearance.visibility, Visibility::Hidden);
    }

    #[test]
    fn overlay_requires_feature() {
        let tree = two_branches();
        let [_, a, _, _, b, _] = ids(&tree);
        let mut plain = FocusController::new(tree.clone(), FRAME, still());
        assert!(plain.cluster_overlay().is_empty());

        let features = Features::CLUSTER_OVERLAY;
        let config = FocusConfig::default().with_features(features);
        let mut controller = FocusController::new(tree, FRAME, config);
        let overlay = controller.cluster_overlay();
        assert_eq!(overlay.len(), 2);
        assert_eq!(overlay[0].node, a);
        assert_eq!(overlay[0].circle.center, Point::new(5.0, 0.0));
        // Both leaves of A are equidistant from its centroid.
        assert_eq!(overlay[0].circle.radius, 0.0);
        assert_eq!(overlay[1].node, b);
        assert_eq!(overlay[1].circle.radius, 0.0);
    }

    #[test]
    fn hover_reports_preview_and_branch() {
        let tree = two_branches();
        let [_, _, _, _, b, b0] = ids(&tree);
        let mut controller = FocusController::new(tree, FRAME, still());
        let preview = controller.hover(Some(b0)).unwrap();
        assert_eq!(preview.label, "b0");
        assert_eq!(preview.preview, Some("b0.png"));
        assert_eq!(preview.branch, Some(b));
        assert!(controller.hover(None).is_none());
        assert_eq!(controller.hovered(), None);

        let config = FocusConfig::default().with_features(Features::empty());
        let tree = controller.tree().clone();
        let mut quiet = FocusController::new(tree, FRAME, config);
        assert!(quiet.hover(Some(b0)).is_none());
        assert_eq!(quiet.hovered(), Some(b0));
    }

    #[test]
    fn per_level_layout_uses_child_level() {
        let tree = ClusterTree::build(ClusterSpec::cluster(
            "root",
            vec![ClusterSpec::cluster(
                "A",
                vec![
                    ClusterSpec::leaf("a0", Point::ZERO).with_positions([
                        Point::new(1.0, 1.0),
                        Point::new(2.0, 2.0),
                    ]),
                ],
            )],
        ))
        .unwrap();
        let config = still().with_layout(LayoutMode::PerLevel);
        let mut controller = FocusController::new(tree, FRAME, config);
        assert_eq!(controller.layout_level(), LayoutLevel::Level(1));
        assert_eq!(controller.markers()[0].position, Some(Point::new(1.0, 1.0)));
        let a = controller.tree().children_of(controller.tree().root())[0];
        controller.focus(a);
        assert_eq!(controller.layout_level(), LayoutLevel::Level(2));
        assert_eq!(controller.markers()[0].position, Some(Point::new(2.0, 2.0)));
    }

    #[test]
    fn resizing_reframes_without_animation() {
        let tree = two_branches();
        let config = still().with_scale_limit(ScaleLimit::Unbounded);
        let mut controller = FocusController::new(tree, FRAME, config);
        let before = controller.view();
        controller.set_frame(Size::new(1600.0, 1200.0));
        assert!((controller.view().scale - 2.0 * before.scale).abs() < 1e-9);
        assert!(controller.transition().is_none());
        assert_eq!(controller.displayed_view(), controller.view());
    }
}
