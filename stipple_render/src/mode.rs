// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Which renderer draws the point cloud.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderMode {
    /// One sprite per point.
    #[default]
    Scatterplot,
    /// Kernel density estimate, shaded as a density map.
    Density,
    /// Kernel density estimate, color mapped as a landscape.
    Landscape,
}

impl RenderMode {
    /// Returns `true` for the modes drawn by the density renderer.
    #[must_use]
    pub fn uses_density(self) -> bool {
        matches!(self, Self::Density | Self::Landscape)
    }
}

/// How points are colored in [`RenderMode::Scatterplot`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColoringMode {
    /// Every point gets the constant color.
    #[default]
    Constant,
    /// A scalar per point looked up in the color map.
    Scalar,
    /// An explicit color per point, for example from clusters.
    ColorData,
}

/// Whether a continuous parameter edit is still in progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParameterPhase {
    /// The user is still dragging the control.
    Dragging,
    /// The control was released; this is the final value.
    Released,
}

/// Smallest kernel width.
pub const MIN_SIGMA: f32 = 0.01;
/// Largest kernel width.
pub const MAX_SIGMA: f32 = 0.5;

/// Density estimation settings.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DensitySettings {
    /// Kernel width, clamped to `[MIN_SIGMA, MAX_SIGMA]`.
    pub sigma: f32,
    /// Recompute on every drag tick of the sigma control, not only on release.
    pub live_updates: bool,
}

impl Default for DensitySettings {
    fn default() -> Self {
        Self {
            sigma: 0.15,
            live_updates: false,
        }
    }
}
