// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration for a [`FocusController`](crate::FocusController).

use alloc::vec::Vec;
use core::time::Duration;

use understory_cluster_tree::ColorPolicy;

/// Default margin factor applied around a focused cluster's bounds.
pub const DEFAULT_MARGIN: f64 = 1.1;

/// Default duration of an animated focus change.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(750);

/// Default on-screen distance kept between the two closest markers at maximum zoom.
pub const DEFAULT_TARGET_PIXEL_SPACING: f64 = 12.0;

bitflags::bitflags! {
    /// Optional behaviors of a visualization instance.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Features: u8 {
        /// Report a circle (centroid + spread) for each child of the focus.
        const CLUSTER_OVERLAY = 0b0000_0001;
        /// Animate focus changes along a smooth zoom path.
        const ANIMATE         = 0b0000_0010;
        /// Report hover previews.
        const HOVER_PREVIEW   = 0b0000_0100;
    }
}

impl Default for Features {
    fn default() -> Self {
        Self::ANIMATE | Self::HOVER_PREVIEW
    }
}

/// Upper bound applied to the scale of a focus view.
///
/// Every arm starts from the same fit of the focus bounds and margin to the
/// frame. They differ only in how far that fit may zoom in.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScaleLimit {
    /// Never zoom in so far that the two closest leaves under the focus end up
    /// closer than `target_pixel_spacing` frame units.
    ///
    /// This is the spacing-clamped zoom, and the default. The cap is
    /// recomputed per focus from its closest pair of leaves.
    ClosestPair {
        /// Minimum on-screen distance between the closest markers.
        target_pixel_spacing: f64,
    },
    /// Never exceed a fixed scale.
    ///
    /// The configured `max_scale` is used as the cap directly, whatever the
    /// spacing of the focused leaves. Non-finite or non-positive values apply
    /// no cap.
    Fixed {
        /// Largest allowed scale.
        max_scale: f64,
    },
    /// Fit the focus bounds regardless of scale.
    ///
    /// No cap at all. A focus whose leaves coincide keeps the current scale.
    Unbounded,
}

impl Default for ScaleLimit {
    fn default() -> Self {
        Self::ClosestPair {
            target_pixel_spacing: DEFAULT_TARGET_PIXEL_SPACING,
        }
    }
}

/// Which stored positions leaves are displayed at.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutMode {
    /// One global layout: every leaf stays at the position stored for its own depth.
    #[default]
    Static,
    /// Per-level layouts: leaves move to the layout of the focus's children
    /// (level `focus depth + 1`).
    PerLevel,
}

/// An 8-bit RGBA color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8 {
    /// An opaque color from a `0xRRGGBB` value.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Each channel is masked to 8 bits first."
    )]
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 0xff,
        }
    }
}

/// Ordered list of colors, cycled by color index.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    colors: Vec<Rgba8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::category10()
    }
}

impl Palette {
    /// A palette with the given colors.
    #[must_use]
    pub fn new(colors: Vec<Rgba8>) -> Self {
        Self { colors }
    }

    /// The common ten-color categorical palette.
    #[must_use]
    pub fn category10() -> Self {
        const HEX: [u32; 10] = [
            0x1f77b4, 0xff7f0e, 0x2ca02c, 0xd62728, 0x9467bd, 0x8c564b, 0xe377c2, 0x7f7f7f,
            0xbcbd22, 0x17becf,
        ];
        Self::new(HEX.iter().map(|&hex| Rgba8::from_rgb_u32(hex)).collect())
    }

    /// Color for `index`, cycling through the palette. `None` if the palette is empty.
    #[must_use]
    pub fn color(&self, index: usize) -> Option<Rgba8> {
        if self.colors.is_empty() {
            return None;
        }
        Some(self.colors[index % self.colors.len()])
    }

    /// The colors, in order.
    #[must_use]
    pub fn colors(&self) -> &[Rgba8] {
        &self.colors
    }
}

/// Configuration for one visualization instance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FocusConfig {
    /// Factor by which a focused cluster's bounds are grown before fitting.
    pub margin: f64,
    /// Duration of an animated focus change.
    pub duration: Duration,
    /// Upper bound on the scale of a focus view.
    pub scale_limit: ScaleLimit,
    /// Colors for clusters, indexed by color index.
    pub palette: Palette,
    /// How color indices are assigned.
    pub color_policy: ColorPolicy,
    /// Which stored positions leaves are displayed at.
    pub layout: LayoutMode,
    /// Optional behaviors.
    pub features: Features,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            duration: DEFAULT_DURATION,
            scale_limit: ScaleLimit::default(),
            palette: Palette::default(),
            color_policy: ColorPolicy::default(),
            layout: LayoutMode::default(),
            features: Features::default(),
        }
    }
}

impl FocusConfig {
    /// Set the margin factor.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the transition duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the scale limit.
    #[must_use]
    pub fn with_scale_limit(mut self, scale_limit: ScaleLimit) -> Self {
        self.scale_limit = scale_limit;
        self
    }

    /// Set the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the color policy.
    #[must_use]
    pub fn with_color_policy(mut self, color_policy: ColorPolicy) -> Self {
        self.color_policy = color_policy;
        self
    }

    /// Set the layout mode.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutMode) -> Self {
        self.layout = layout;
        self
    }

    /// Replace the feature set.
    #[must_use]
    pub fn with_features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }

    /// Returns true if focus changes should animate.
    #[must_use]
    pub fn animates(&self) -> bool {
        self.features.contains(Features::ANIMATE) && !self.duration.is_zero()
    }
}
