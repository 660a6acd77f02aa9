// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use stipple_bounds::BoundsConfig;
use stipple_channels::PointSettings;
use stipple_render::DensitySettings;
use stipple_selection::GestureConfig;

/// Default color of constant-colored points.
pub const DEFAULT_POINT_COLOR: Color = Color::from_rgb8(93, 93, 225);

/// Everything a [`Scatterplot`](crate::Scatterplot) can be tuned with.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Bounds normalization shared by rendering and selection.
    pub bounds: BoundsConfig,
    /// Kernel width and live update behavior.
    pub density: DensitySettings,
    /// Constant point size and opacity.
    pub points: PointSettings,
    /// Selection gesture behavior.
    pub gesture: GestureConfig,
    /// Color of every point under constant coloring.
    pub constant_color: Color,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bounds: BoundsConfig::default(),
            density: DensitySettings::default(),
            points: PointSettings::default(),
            gesture: GestureConfig::default(),
            constant_color: DEFAULT_POINT_COLOR,
        }
    }
}
