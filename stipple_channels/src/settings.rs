// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Smallest point size, in pixels.
pub const MIN_POINT_SIZE: f32 = 1.0;
/// Largest point size, in pixels.
pub const MAX_POINT_SIZE: f32 = 50.0;

/// Constant point appearance, used while the size and opacity channels are in
/// constant mode.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointSettings {
    /// Point size in pixels.
    pub size: f32,
    /// Point opacity in `[0, 1]`.
    pub opacity: f32,
}

impl PointSettings {
    /// Returns a copy with size and opacity clamped into their valid ranges.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            size: self.size.clamp(MIN_POINT_SIZE, MAX_POINT_SIZE),
            opacity: self.opacity.clamp(0.0, 1.0),
        }
    }
}

impl Default for PointSettings {
    fn default() -> Self {
        Self {
            size: 10.0,
            opacity: 0.5,
        }
    }
}
