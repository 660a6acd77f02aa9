// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render mode transitions and routing, observed through the recording sinks.

use kurbo::Point;
use peniko::Color;
use stipple_bounds::{BoundsConfig, NO_DATA};
use stipple_channels::ScalarChannel;
use stipple_render::{
    ColoringMode, DensitySettings, MAX_SIGMA, MIN_SIGMA, ParameterPhase,
    RecordingDensityRenderer, RecordingPointRenderer, RenderMode, RenderModeCoordinator,
};

type Coordinator = RenderModeCoordinator<RecordingPointRenderer, RecordingDensityRenderer>;

fn with_settings(settings: DensitySettings) -> Coordinator {
    RenderModeCoordinator::new(
        RecordingPointRenderer::default(),
        RecordingDensityRenderer::default(),
        settings,
        BoundsConfig::default(),
        Color::from_rgb8(93, 93, 225),
    )
}

#[test]
fn initial_sigma_is_clamped_and_pushed() {
    let c = with_settings(DensitySettings {
        sigma: 4.0,
        live_updates: false,
    });
    assert_eq!(c.density_settings().sigma, MAX_SIGMA);
    assert_eq!(c.density_renderer().sigma, Some(MAX_SIGMA));

    let c = with_settings(DensitySettings {
        sigma: 0.0,
        live_updates: false,
    });
    assert_eq!(c.density_settings().sigma, MIN_SIGMA);
}

#[test]
fn every_position_change_refreshes_bounds_without_mode_change() {
    let mut c = with_settings(DensitySettings::default());
    assert_eq!(c.bounds(), NO_DATA);

    c.set_positions(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
    let first = c.bounds();
    c.set_positions(vec![Point::new(10.0, 10.0), Point::new(20.0, 30.0)]);
    let second = c.bounds();

    assert_ne!(first, second);
    assert_eq!(c.mode(), RenderMode::Scatterplot);
    assert_eq!(c.point_renderer().bounds, Some(second));
    assert_eq!(c.point_renderer().positions.len(), 2);
    assert_eq!(c.density_renderer().recomputations, 0);
}

#[test]
fn empty_positions_push_sentinel_bounds() {
    let mut c = with_settings(DensitySettings::default());
    c.set_positions(vec![Point::new(3.0, 3.0)]);
    c.set_positions(Vec::new());
    assert_eq!(c.bounds(), NO_DATA);
    assert_eq!(c.point_renderer().bounds, Some(NO_DATA));
    assert!(c.positions().is_empty());
}

#[test]
fn sigma_outside_density_modes_is_stored_but_not_recomputed() {
    let mut c = with_settings(DensitySettings::default());
    assert!(!c.set_sigma(0.2, ParameterPhase::Released));
    assert_eq!(c.density_settings().sigma, 0.2);
    assert_eq!(c.density_renderer().recomputations, 0);

    assert!(!c.set_sigma(f32::NAN, ParameterPhase::Released));
    assert_eq!(c.density_settings().sigma, 0.2);

    c.set_render_mode(RenderMode::Density);
    assert_eq!(c.density_renderer().sigma, Some(0.2));
}

#[test]
fn density_modes_always_receive_the_gradient() {
    let mut c = with_settings(DensitySettings::default());
    c.set_coloring_mode(ColoringMode::Constant);
    c.set_render_mode(RenderMode::Density);
    let map = c.density_renderer().color_map.clone().unwrap();
    assert!(!map.is_constant());

    c.set_constant_color(Color::WHITE);
    assert!(!c.density_renderer().color_map.as_ref().unwrap().is_constant());

    c.set_render_mode(RenderMode::Scatterplot);
    assert_eq!(
        c.point_renderer().color_map.as_ref().unwrap().pixels(),
        &[Color::WHITE]
    );
}

#[test]
fn channel_buffers_reach_the_point_renderer() {
    let mut c = with_settings(DensitySettings::default());
    c.push_scalars(ScalarChannel::Size, &[1.0, 2.0]);
    c.push_scalars(ScalarChannel::Opacity, &[0.5, 0.5]);
    c.push_colors(&[Color::BLACK, Color::WHITE]);
    c.push_point_size(2.0);
    c.push_highlights(&[0, 1], 1);

    let points = c.point_renderer();
    assert_eq!(points.sizes, vec![1.0, 2.0]);
    assert_eq!(points.opacities, vec![0.5, 0.5]);
    assert_eq!(points.colors, vec![Color::BLACK, Color::WHITE]);
    assert_eq!(points.point_size, Some(2.0));
    assert_eq!(points.highlights, vec![0, 1]);
    assert_eq!(points.selected, 1);
}
