// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer sink contracts and headless recording sinks.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;
use stipple_channels::ScalarChannel;

use crate::color_map::{ColorMapImage, ColorMapRange};

/// A renderer that draws one sprite per point.
///
/// All buffers are in local point order.
pub trait PointRenderer {
    /// Replaces the point positions, in data space.
    fn set_positions(&mut self, positions: &[Point]);
    /// Sets the normalized data bounds shown by the view.
    fn set_bounds(&mut self, bounds: Rect);
    /// Sets per-point colors.
    fn set_color_buffer(&mut self, colors: &[Color]);
    /// Sets a per-point scalar buffer for one channel.
    fn set_scalar_buffer(&mut self, channel: ScalarChannel, values: &[f32]);
    /// Sets the base point size, in pixels.
    fn set_point_size(&mut self, size: f32);
    /// Sets per-point selection flags and the number of selected points.
    fn set_highlights(&mut self, flags: &[u8], selected: usize);
    /// Sets the color lookup image.
    fn set_color_map_image(&mut self, image: &ColorMapImage);
    /// Sets the value range the color map spans.
    fn set_color_map_range(&mut self, range: ColorMapRange);
}

/// A renderer that draws a kernel density estimate of the points.
pub trait DensityRenderer {
    /// Replaces the point positions, in data space.
    fn set_positions(&mut self, positions: &[Point]);
    /// Sets the normalized data bounds shown by the view.
    fn set_bounds(&mut self, bounds: Rect);
    /// Sets the kernel width.
    fn set_sigma(&mut self, sigma: f32);
    /// Sets the color lookup image.
    fn set_color_map_image(&mut self, image: &ColorMapImage);
    /// Sets the value range the color map spans.
    fn set_color_map_range(&mut self, range: ColorMapRange);
    /// Recomputes the density field from the current positions, bounds and sigma.
    fn recompute_density(&mut self);
    /// Largest density value of the last computation.
    fn max_density(&self) -> f32;
}

/// A [`PointRenderer`] that stores whatever it is given.
///
/// Useful for tests and for hosts that render elsewhere.
#[derive(Clone, Debug, Default)]
pub struct RecordingPointRenderer {
    /// Last positions received.
    pub positions: Vec<Point>,
    /// Last bounds received.
    pub bounds: Option<Rect>,
    /// Last color buffer received.
    pub colors: Vec<Color>,
    /// Last size buffer received.
    pub sizes: Vec<f32>,
    /// Last opacity buffer received.
    pub opacities: Vec<f32>,
    /// Last color-map coordinate buffer received.
    pub color_scalars: Vec<f32>,
    /// Last base point size received.
    pub point_size: Option<f32>,
    /// Last highlight flags received.
    pub highlights: Vec<u8>,
    /// Last selected count received.
    pub selected: usize,
    /// Last color map received.
    pub color_map: Option<ColorMapImage>,
    /// Last color map range received.
    pub color_map_range: Option<ColorMapRange>,
}

impl PointRenderer for RecordingPointRenderer {
    fn set_positions(&mut self, positions: &[Point]) {
        self.positions = positions.to_vec();
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
    }

    fn set_color_buffer(&mut self, colors: &[Color]) {
        self.colors = colors.to_vec();
    }

    fn set_scalar_buffer(&mut self, channel: ScalarChannel, values: &[f32]) {
        let slot = match channel {
            ScalarChannel::Size => &mut self.sizes,
            ScalarChannel::Opacity => &mut self.opacities,
            ScalarChannel::Color => &mut self.color_scalars,
        };
        *slot = values.to_vec();
    }

    fn set_point_size(&mut self, size: f32) {
        self.point_size = Some(size);
    }

    fn set_highlights(&mut self, flags: &[u8], selected: usize) {
        self.highlights = flags.to_vec();
        self.selected = selected;
    }

    fn set_color_map_image(&mut self, image: &ColorMapImage) {
        self.color_map = Some(image.clone());
    }

    fn set_color_map_range(&mut self, range: ColorMapRange) {
        self.color_map_range = Some(range);
    }
}

/// A [`DensityRenderer`] that stores its inputs and counts recomputations.
///
/// [`max_density`](DensityRenderer::max_density) reports the number of
/// positions, a stand-in that is positive whenever there is data.
#[derive(Clone, Debug, Default)]
pub struct RecordingDensityRenderer {
    /// Last positions received.
    pub positions: Vec<Point>,
    /// Last bounds received.
    pub bounds: Option<Rect>,
    /// Last sigma received.
    pub sigma: Option<f32>,
    /// Last color map received.
    pub color_map: Option<ColorMapImage>,
    /// Last color map range received.
    pub color_map_range: Option<ColorMapRange>,
    /// Number of density recomputations so far.
    pub recomputations: usize,
}

impl DensityRenderer for RecordingDensityRenderer {
    fn set_positions(&mut self, positions: &[Point]) {
        self.positions = positions.to_vec();
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
    }

    fn set_sigma(&mut self, sigma: f32) {
        self.sigma = Some(sigma);
    }

    fn set_color_map_image(&mut self, image: &ColorMapImage) {
        self.color_map = Some(image.clone());
    }

    fn set_color_map_range(&mut self, range: ColorMapRange) {
        self.color_map_range = Some(range);
    }

    fn recompute_density(&mut self) {
        self.recomputations += 1;
    }

    fn max_density(&self) -> f32 {
        self.positions.len() as f32
    }
}
