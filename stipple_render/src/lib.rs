// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stipple Render: render mode coordination for a scatterplot view.
//!
//! A scatterplot has two renderers behind it: a point renderer drawing one
//! sprite per point, and a density renderer drawing a kernel density estimate
//! either as a density map or as a color-mapped landscape. Both are opaque
//! sinks described by the [`PointRenderer`] and [`DensityRenderer`] traits.
//!
//! [`RenderModeCoordinator`] sits in front of them and owns the rules:
//! which renderer gets positions, bounds, color maps and color map ranges,
//! and when the density field must be recomputed. It is a small state machine
//! over [`RenderMode`]; transitions happen only on explicit requests.
//!
//! For tests and headless hosts, [`RecordingPointRenderer`] and
//! [`RecordingDensityRenderer`] simply store what they receive.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use peniko::Color;
//! use stipple_bounds::BoundsConfig;
//! use stipple_render::{
//!     DensitySettings, RecordingDensityRenderer, RecordingPointRenderer, RenderMode,
//!     RenderModeCoordinator,
//! };
//!
//! let mut coordinator = RenderModeCoordinator::new(
//!     RecordingPointRenderer::default(),
//!     RecordingDensityRenderer::default(),
//!     DensitySettings::default(),
//!     BoundsConfig::default(),
//!     Color::from_rgb8(93, 93, 225),
//! );
//! coordinator.set_positions(vec![Point::new(0.0, 0.0), Point::new(1.0, 2.0)]);
//!
//! // Entering a density mode recomputes the density exactly once.
//! coordinator.set_render_mode(RenderMode::Landscape);
//! assert_eq!(coordinator.density_renderer().recomputations, 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod color_map;
mod coordinator;
mod mode;
mod sink;

pub use color_map::{ColorMapImage, ColorMapRange};
pub use coordinator::RenderModeCoordinator;
pub use mode::{
    ColoringMode, DensitySettings, MAX_SIGMA, MIN_SIGMA, ParameterPhase, RenderMode,
};
pub use sink::{DensityRenderer, PointRenderer, RecordingDensityRenderer, RecordingPointRenderer};
