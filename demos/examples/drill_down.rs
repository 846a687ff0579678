// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drill-down navigation over a small photo collection.
//!
//! This example shows how to combine:
//! - `understory_cluster_tree` to describe a hierarchy of clusters with per-level positions,
//! - `understory_cluster_focus` to turn clicks into focus changes, views, and visibility,
//! - `understory_zoom` to map world positions into the frame.
//!
//! Set `RUST_LOG=debug` to see the controller's focus events next to the walkthrough's own.
//!
//! Run:
//! - `cargo run -p understory_demos --example drill_down`

use std::time::Duration;

use kurbo::{Point, Size};
use tracing_subscriber::EnvFilter;
use understory_cluster_focus::{
    Activation, Features, FocusConfig, FocusController, LayoutMode, Visibility,
};
use understory_cluster_tree::{ClusterSpec, ClusterTree, NodeId};
use understory_zoom::View;

const FRAME: Size = Size::new(960.0, 540.0);

/// A photo placed at `overview` in the top-level layout and at `detail` once its
/// cluster is focused.
fn photo(name: &str, overview: (f64, f64), detail: (f64, f64)) -> ClusterSpec {
    ClusterSpec::leaf(name, Point::from(overview))
        .with_positions([Point::from(overview), Point::from(detail)])
        .with_preview(format!("thumbs/{name}.jpg"))
}

fn collection() -> ClusterTree {
    ClusterTree::build(ClusterSpec::cluster(
        "all photos",
        vec![
            ClusterSpec::cluster(
                "beach",
                vec![
                    photo("dunes", (10.0, 12.0), (0.0, 0.0)),
                    photo("pier", (14.0, 9.0), (40.0, 5.0)),
                    photo("sunset", (12.0, 16.0), (20.0, 30.0)),
                ],
            )
            .with_positions([Point::new(12.0, 12.0)]),
            ClusterSpec::cluster(
                "city",
                vec![
                    photo("bridge", (80.0, 70.0), (0.0, 0.0)),
                    photo("tower", (84.0, 75.0), (25.0, 25.0)),
                ],
            )
            .with_positions([Point::new(82.0, 72.0)]),
        ],
    ))
    .expect("photo weights are consistent")
}

/// Frame coordinates (origin at the top-left corner) of a world position.
fn to_screen(view: &View, world: Point) -> Point {
    let half = FRAME.to_vec2() * 0.5;
    view.world_to_view(world) + half
}

fn print_frame(controller: &mut FocusController, label: &str) {
    let view: View = controller.displayed_view();
    let focus = &controller.tree().data(controller.focused()).label;
    let (x, y, scale) = (view.center.x, view.center.y, view.scale);
    println!("{label}: focus = {focus:?}, center = ({x:.1}, {y:.1}), scale = {scale:.3}");
    let visible = view.visible_world_rect(FRAME);
    tracing::info!(label, ?visible, "frame");
    for marker in controller.markers() {
        let name = &controller.tree().data(marker.node).label;
        match (marker.appearance.visibility, marker.position) {
            (Visibility::Shown, Some(world)) => {
                let Point { x, y } = to_screen(&view, world);
                let color = marker.appearance.color;
                println!("  {name:<8} at ({x:6.1}, {y:6.1}) color {color:?}");
            }
            (visibility, _) => println!("  {name:<8} {visibility:?}"),
        }
    }
    for cluster in controller.cluster_overlay() {
        let name = &controller.tree().data(cluster.node).label;
        let Point { x, y } = cluster.circle.center;
        let spread = cluster.circle.radius;
        println!("  [{name}] centroid ({x:.1}, {y:.1}) spread {spread:.2}");
    }
}

fn leaf_named(tree: &ClusterTree, name: &str) -> NodeId {
    tree.leaves(tree.root())
        .find(|&leaf| tree.data(leaf).label == name)
        .expect("leaf exists")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let _walkthrough = tracing::info_span!("drill_down").entered();
    let tree = collection();
    let pier = leaf_named(&tree, "pier");
    let bridge = leaf_named(&tree, "bridge");

    let config = FocusConfig::default()
        .with_layout(LayoutMode::PerLevel)
        .with_features(Features::default() | Features::CLUSTER_OVERLAY);
    let mut controller = FocusController::new(tree, FRAME, config);
    print_frame(&mut controller, "start");

    if let Some(preview) = controller.hover(Some(pier)) {
        tracing::info!(label = preview.label, "hovering");
        println!("hover: {} ({:?})", preview.label, preview.preview);
    }

    // Click a photo in the beach cluster, then animate at roughly 60 fps.
    if let Some(change) = controller.activate(Activation::Node(pier)) {
        let duration = controller.config().duration;
        let mut elapsed = Duration::ZERO;
        while elapsed < duration {
            elapsed += Duration::from_millis(16);
            let view = controller.tick(elapsed);
            let ms = elapsed.as_millis();
            if ms % 160 == 0 {
                println!("  t = {ms:>3} ms: scale {:.3}", view.scale);
            }
        }
        assert_eq!(controller.displayed_view(), change.view);
    }
    print_frame(&mut controller, "beach");

    // The city is outside the focused branch, so clicking it does nothing.
    assert!(controller.activate(Activation::Node(bridge)).is_none());

    // Clicking empty space goes back to the overview without animation this time.
    if let Some(change) = controller.activate(Activation::Background) {
        tracing::info!(generation = change.generation, "back to the overview");
    }
    controller.finish_transition();
    print_frame(&mut controller, "overview");
}
