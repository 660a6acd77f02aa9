// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stipple Bounds: data bounds and the data-to-pixel mapping of a scatterplot.
//!
//! A scatterplot lays its points out by fitting a rectangle of data space into
//! the view. Selection works the other way around: a rasterized selection
//! shape lives in view pixels and has to be mapped back onto data points. The
//! two directions are only consistent if they use the *same* bounds and the
//! *same* letterboxing, so this crate owns both:
//!
//! - [`compute_bounds`] folds the minimum enclosing rectangle over a point set
//!   (or returns the [`NO_DATA`] sentinel for an empty one).
//! - [`normalize`] enforces a minimum size, adds a margin and pads the rectangle
//!   to a square, as configured by [`BoundsConfig`].
//! - [`to_unit_square`] / [`from_unit_square`] map between data space and the
//!   `[0, 1] x [0, 1]` square with a top-left origin.
//! - [`ScatterViewport`] composes the unit-square mapping with the centered,
//!   square letterbox of a view and exposes both affine directions.
//!
//! Rectangles use [`kurbo::Rect`] with data-space semantics: `x0` is the left
//! edge, `x1` the right edge, `y0` the bottom and `y1` the top. Data `y` grows
//! upwards; pixel `y` grows downwards.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use stipple_bounds::{BoundsConfig, ScatterViewport, compute_bounds, normalize};
//!
//! let points = [Point::new(0.0, 0.0), Point::new(4.0, 2.0)];
//! let bounds = normalize(compute_bounds(&points), BoundsConfig::default());
//! assert!((bounds.width() - bounds.height()).abs() < 1e-9);
//!
//! // An 800x600 view letterboxes the square bounds into a centered 600x600 square.
//! let view = ScatterViewport::new(Size::new(800.0, 600.0), bounds);
//! let pixel = view.data_to_view_point(Point::new(2.0, 1.0));
//! assert!((pixel.x - 400.0).abs() < 1e-9);
//! assert!((pixel.y - 300.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod viewport;

pub use bounds::{
    BoundsConfig, NO_DATA, compute_bounds, from_unit_square, is_valid, normalize, to_unit_square,
};
pub use viewport::ScatterViewport;
