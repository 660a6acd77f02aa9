// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;
use stipple_bounds::{BoundsConfig, NO_DATA, compute_bounds, normalize};
use stipple_channels::ScalarChannel;

use crate::color_map::{ColorMapImage, ColorMapRange};
use crate::mode::{ColoringMode, DensitySettings, MAX_SIGMA, MIN_SIGMA, ParameterPhase, RenderMode};
use crate::sink::{DensityRenderer, PointRenderer};

/// Decides which renderer receives what, and when density is recomputed.
///
/// The coordinator owns the current positions and their normalized bounds.
/// Every position change recomputes the bounds and pushes both to both
/// renderers, so whichever renderer becomes active next already has them.
///
/// Density is recomputed synchronously:
/// - once on every transition into [`RenderMode::Density`] or
///   [`RenderMode::Landscape`],
/// - on every position change while in one of those modes,
/// - on sigma changes in those modes, subject to
///   [`DensitySettings::live_updates`].
///
/// After each recomputation a positive maximum density becomes the color map
/// range `[0, max]`.
#[derive(Debug)]
pub struct RenderModeCoordinator<P, D> {
    points: P,
    density: D,
    mode: RenderMode,
    coloring: ColoringMode,
    settings: DensitySettings,
    bounds_config: BoundsConfig,
    positions: Vec<Point>,
    bounds: Rect,
    color_map: ColorMapImage,
    constant_color: Color,
    color_map_range: ColorMapRange,
}

impl<P: PointRenderer, D: DensityRenderer> RenderModeCoordinator<P, D> {
    /// Creates a coordinator in [`RenderMode::Scatterplot`] with constant coloring.
    ///
    /// The initial sigma and color map are pushed immediately.
    pub fn new(
        points: P,
        density: D,
        settings: DensitySettings,
        bounds_config: BoundsConfig,
        constant_color: Color,
    ) -> Self {
        let mut coordinator = Self {
            points,
            density,
            mode: RenderMode::Scatterplot,
            coloring: ColoringMode::Constant,
            settings: DensitySettings {
                sigma: settings.sigma.clamp(MIN_SIGMA, MAX_SIGMA),
                ..settings
            },
            bounds_config,
            positions: Vec::new(),
            bounds: NO_DATA,
            color_map: ColorMapImage::default(),
            constant_color,
            color_map_range: ColorMapRange::default(),
        };
        coordinator.density.set_sigma(coordinator.settings.sigma);
        coordinator.route_color_map();
        coordinator
    }

    /// Current render mode.
    #[must_use]
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Current coloring mode.
    #[must_use]
    pub fn coloring_mode(&self) -> ColoringMode {
        self.coloring
    }

    /// Current density settings.
    #[must_use]
    pub fn density_settings(&self) -> DensitySettings {
        self.settings
    }

    /// Current positions, in local order.
    #[must_use]
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Normalized bounds of the current positions, or [`NO_DATA`].
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Current color map range.
    #[must_use]
    pub fn color_map_range(&self) -> ColorMapRange {
        self.color_map_range
    }

    /// Color used for constant coloring.
    #[must_use]
    pub fn constant_color(&self) -> Color {
        self.constant_color
    }

    /// The point renderer.
    #[must_use]
    pub fn point_renderer(&self) -> &P {
        &self.points
    }

    /// The density renderer.
    #[must_use]
    pub fn density_renderer(&self) -> &D {
        &self.density
    }

    /// Switches render mode.
    ///
    /// A request for the current mode does nothing. Returns `true` if the mode
    /// changed.
    pub fn set_render_mode(&mut self, mode: RenderMode) -> bool {
        if mode == self.mode {
            return false;
        }
        log::debug!(target: "stipple::render", "render mode {:?} -> {mode:?}", self.mode);
        self.mode = mode;
        self.route_color_map();
        self.route_color_map_range();
        if mode.uses_density() {
            self.recompute_density();
        }
        true
    }

    /// Replaces the positions, recomputing and pushing bounds.
    pub fn set_positions(&mut self, positions: Vec<Point>) {
        self.bounds = normalize(compute_bounds(&positions), self.bounds_config);
        self.positions = positions;
        self.points.set_bounds(self.bounds);
        self.density.set_bounds(self.bounds);
        self.points.set_positions(&self.positions);
        self.density.set_positions(&self.positions);
        if self.mode.uses_density() {
            self.recompute_density();
        }
    }

    /// Changes the kernel width.
    ///
    /// While `phase` is [`ParameterPhase::Dragging`] and live updates are off
    /// the request is ignored; the final value arrives with
    /// [`ParameterPhase::Released`]. Returns `true` if density was recomputed.
    pub fn set_sigma(&mut self, sigma: f32, phase: ParameterPhase) -> bool {
        if sigma.is_nan() {
            return false;
        }
        if phase == ParameterPhase::Dragging && !self.settings.live_updates {
            return false;
        }
        self.settings.sigma = sigma.clamp(MIN_SIGMA, MAX_SIGMA);
        self.density.set_sigma(self.settings.sigma);
        if !self.mode.uses_density() {
            return false;
        }
        self.recompute_density();
        true
    }

    /// Turns recomputation on every sigma drag tick on or off.
    pub fn set_live_updates(&mut self, live_updates: bool) {
        self.settings.live_updates = live_updates;
    }

    /// Switches coloring mode and re-routes the color map.
    pub fn set_coloring_mode(&mut self, coloring: ColoringMode) {
        if coloring == self.coloring {
            return;
        }
        self.coloring = coloring;
        self.route_color_map();
    }

    /// Replaces the gradient color map.
    pub fn set_color_map(&mut self, image: ColorMapImage) {
        self.color_map = image;
        self.route_color_map();
    }

    /// Replaces the constant color.
    pub fn set_constant_color(&mut self, color: Color) {
        self.constant_color = color;
        self.route_color_map();
    }

    /// Sets the color map range.
    ///
    /// Applies to the point renderer in [`RenderMode::Scatterplot`] and to the
    /// density renderer in [`RenderMode::Landscape`]. A density map is not
    /// color mapped by range, so [`RenderMode::Density`] only stores it.
    pub fn set_color_map_range(&mut self, range: ColorMapRange) {
        self.color_map_range = range;
        self.route_color_map_range();
    }

    /// Pushes a per-point scalar buffer to the point renderer.
    pub fn push_scalars(&mut self, channel: ScalarChannel, values: &[f32]) {
        self.points.set_scalar_buffer(channel, values);
    }

    /// Pushes per-point colors to the point renderer.
    pub fn push_colors(&mut self, colors: &[Color]) {
        self.points.set_color_buffer(colors);
    }

    /// Pushes the base point size to the point renderer.
    pub fn push_point_size(&mut self, size: f32) {
        self.points.set_point_size(size);
    }

    /// Pushes selection highlight flags to the point renderer.
    pub fn push_highlights(&mut self, flags: &[u8], selected: usize) {
        self.points.set_highlights(flags, selected);
    }

    fn recompute_density(&mut self) {
        self.density.recompute_density();
        let max = self.density.max_density();
        log::debug!(
            target: "stipple::render",
            "density recomputed for {} points, sigma {}, max {max}",
            self.positions.len(),
            self.settings.sigma
        );
        if max > 0.0 {
            self.set_color_map_range(ColorMapRange::new(0.0, max));
        }
    }

    fn route_color_map(&mut self) {
        match (self.mode, self.coloring) {
            (RenderMode::Scatterplot, ColoringMode::Constant) => {
                let image = ColorMapImage::constant(self.constant_color);
                self.points.set_color_map_image(&image);
            }
            (RenderMode::Scatterplot, _) => self.points.set_color_map_image(&self.color_map),
            (RenderMode::Density | RenderMode::Landscape, _) => {
                self.density.set_color_map_image(&self.color_map);
            }
        }
    }

    fn route_color_map_range(&mut self) {
        match self.mode {
            RenderMode::Scatterplot => self.points.set_color_map_range(self.color_map_range),
            RenderMode::Landscape => self.density.set_color_map_range(self.color_map_range),
            RenderMode::Density => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::Point;
    use peniko::Color;
    use stipple_bounds::BoundsConfig;

    use super::RenderModeCoordinator;
    use crate::{
        ColorMapImage, ColorMapRange, ColoringMode, DensitySettings, ParameterPhase,
        RecordingDensityRenderer, RecordingPointRenderer, RenderMode,
    };

    type Coordinator = RenderModeCoordinator<RecordingPointRenderer, RecordingDensityRenderer>;

    fn coordinator() -> Coordinator {
        RenderModeCoordinator::new(
            RecordingPointRenderer::default(),
            RecordingDensityRenderer::default(),
            DensitySettings::default(),
            BoundsConfig::default(),
            Color::from_rgb8(93, 93, 225),
        )
    }

    #[test]
    fn entering_density_recomputes_once() {
        let mut c = coordinator();
        assert!(!c.set_render_mode(RenderMode::Scatterplot));
        assert_eq!(c.density_renderer().recomputations, 0);

        assert!(c.set_render_mode(RenderMode::Density));
        assert_eq!(c.density_renderer().recomputations, 1);
        assert!(!c.set_render_mode(RenderMode::Density));
        assert_eq!(c.density_renderer().recomputations, 1);

        assert!(c.set_render_mode(RenderMode::Landscape));
        assert_eq!(c.density_renderer().recomputations, 2);
        assert!(c.set_render_mode(RenderMode::Scatterplot));
        assert_eq!(c.density_renderer().recomputations, 2);
    }

    #[test]
    fn constant_coloring_pushes_one_pixel_only_in_scatterplot() {
        let mut c = coordinator();
        let map = c.point_renderer().color_map.clone().unwrap();
        assert!(map.is_constant());
        assert_eq!(map.pixels(), &[Color::from_rgb8(93, 93, 225)]);

        c.set_render_mode(RenderMode::Landscape);
        let density_map = c.density_renderer().color_map.clone().unwrap();
        assert!(!density_map.is_constant());

        c.set_render_mode(RenderMode::Scatterplot);
        c.set_coloring_mode(ColoringMode::Scalar);
        assert!(!c.point_renderer().color_map.as_ref().unwrap().is_constant());
    }

    #[test]
    fn sigma_drag_respects_live_updates() {
        let mut c = coordinator();
        c.set_render_mode(RenderMode::Density);
        let base = c.density_renderer().recomputations;

        assert!(!c.set_sigma(0.3, ParameterPhase::Dragging));
        assert_eq!(c.density_renderer().recomputations, base);
        assert_eq!(c.density_settings().sigma, 0.15);

        assert!(c.set_sigma(0.3, ParameterPhase::Released));
        assert_eq!(c.density_renderer().recomputations, base + 1);

        c.set_live_updates(true);
        assert!(c.set_sigma(0.9, ParameterPhase::Dragging));
        assert_eq!(c.density_settings().sigma, 0.5);
        assert_eq!(c.density_renderer().sigma, Some(0.5));
    }

    #[test]
    fn positions_push_bounds_to_both_renderers() {
        let mut c = coordinator();
        c.set_positions(vec![Point::new(0.0, 0.0), Point::new(4.0, 2.0)]);
        let bounds = c.bounds();
        assert!((bounds.width() - bounds.height()).abs() < 1e-9);
        assert_eq!(c.point_renderer().bounds, Some(bounds));
        assert_eq!(c.density_renderer().bounds, Some(bounds));
        assert_eq!(c.density_renderer().recomputations, 0);

        c.set_render_mode(RenderMode::Landscape);
        c.set_positions(vec![Point::new(1.0, 1.0)]);
        assert_eq!(c.density_renderer().recomputations, 2);
        assert_eq!(c.density_renderer().positions.len(), 1);
    }

    #[test]
    fn color_map_range_routing() {
        let mut c = coordinator();
        c.set_color_map_range(ColorMapRange::new(1.0, 2.0));
        assert_eq!(
            c.point_renderer().color_map_range,
            Some(ColorMapRange::new(1.0, 2.0))
        );

        c.set_render_mode(RenderMode::Density);
        c.set_color_map_range(ColorMapRange::new(3.0, 4.0));
        assert_eq!(c.density_renderer().color_map_range, None);
        assert_eq!(c.color_map_range(), ColorMapRange::new(3.0, 4.0));

        c.set_color_map(ColorMapImage::gradient(&[Color::BLACK, Color::WHITE], 8));
        assert_eq!(c.density_renderer().color_map.as_ref().unwrap().width(), 8);
    }

    #[test]
    fn max_density_becomes_range() {
        let mut c = coordinator();
        c.set_positions(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)]);
        c.set_render_mode(RenderMode::Landscape);
        assert_eq!(c.color_map_range(), ColorMapRange::new(0.0, 3.0));
        assert_eq!(
            c.density_renderer().color_map_range,
            Some(ColorMapRange::new(0.0, 3.0))
        );
    }
}
