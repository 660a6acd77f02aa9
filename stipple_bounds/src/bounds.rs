// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// The "no data" bounds: maximally inverted, so that `x0 > x1` and `y0 > y1`.
///
/// [`compute_bounds`] returns this for an empty point set. Folding any point
/// into it yields that point's degenerate rectangle.
pub const NO_DATA: Rect = Rect {
    x0: f64::MAX,
    y0: f64::MAX,
    x1: f64::MIN,
    y1: f64::MIN,
};

/// How data bounds are turned into a render viewport mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundsConfig {
    /// Fraction of the (minimum-size enforced) width and height added on every side.
    pub margin: f64,
    /// Minimum width and height, enforced by symmetric expansion around the center.
    pub min_size: f64,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            margin: 0.1,
            min_size: 1e-7,
        }
    }
}

/// Folds the minimum enclosing rectangle over `positions`.
///
/// Returns [`NO_DATA`] when `positions` is empty; callers must check
/// [`is_valid`] before using the result as a mapping.
#[must_use]
pub fn compute_bounds(positions: &[Point]) -> Rect {
    positions.iter().fold(NO_DATA, |acc, p| Rect {
        x0: acc.x0.min(p.x),
        y0: acc.y0.min(p.y),
        x1: acc.x1.max(p.x),
        y1: acc.y1.max(p.y),
    })
}

/// Returns `true` if `bounds` describes actual data: finite and not inverted.
#[must_use]
pub fn is_valid(bounds: Rect) -> bool {
    bounds.x0 <= bounds.x1
        && bounds.y0 <= bounds.y1
        && bounds.x0.is_finite()
        && bounds.x1.is_finite()
        && bounds.y0.is_finite()
        && bounds.y1.is_finite()
}

/// Normalizes data bounds for use as a viewport mapping.
///
/// In order:
/// 1. Width and height are grown symmetrically to at least `config.min_size`.
/// 2. Every side is pushed out by `config.margin` times the current size.
/// 3. The smaller dimension is padded so the rectangle becomes a square with
///    the same center.
///
/// Invalid bounds (see [`is_valid`]) are returned unchanged.
#[must_use]
pub fn normalize(bounds: Rect, config: BoundsConfig) -> Rect {
    if !is_valid(bounds) {
        return bounds;
    }

    let center = bounds.center();
    let min_size = config.min_size.max(0.0);
    let width = bounds.width().max(min_size);
    let height = bounds.height().max(min_size);

    let margin = config.margin.max(0.0);
    let width = width * (1.0 + 2.0 * margin);
    let height = height * (1.0 + 2.0 * margin);

    let side = width.max(height);
    Rect::from_center_size(center, (side, side))
}

/// Maps a data-space point into the unit square of `bounds`.
///
/// `u` runs left to right; `v` runs top to bottom, matching a pixel mask whose
/// origin is its top-left corner. Points inside `bounds` land in `[0, 1]`.
#[must_use]
pub fn to_unit_square(point: Point, bounds: Rect) -> Point {
    Point::new(
        (point.x - bounds.x0) / bounds.width(),
        (bounds.y1 - point.y) / bounds.height(),
    )
}

/// Inverse of [`to_unit_square`].
#[must_use]
pub fn from_unit_square(unit: Point, bounds: Rect) -> Point {
    Point::new(
        bounds.x0 + unit.x * bounds.width(),
        bounds.y1 - unit.y * bounds.height(),
    )
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{
        BoundsConfig, NO_DATA, compute_bounds, from_unit_square, is_valid, normalize,
        to_unit_square,
    };

    #[test]
    fn empty_positions_yield_sentinel() {
        let bounds = compute_bounds(&[]);
        assert_eq!(bounds, NO_DATA);
        assert!(!is_valid(bounds));
        assert_eq!(normalize(bounds, BoundsConfig::default()), NO_DATA);
    }

    #[test]
    fn compute_bounds_folds_min_max() {
        let bounds = compute_bounds(&[
            Point::new(1.0, -2.0),
            Point::new(-3.0, 4.0),
            Point::new(0.5, 0.5),
        ]);
        assert_eq!(bounds, Rect::new(-3.0, -2.0, 1.0, 4.0));
        assert!(is_valid(bounds));
    }

    #[test]
    fn normalize_squares_and_keeps_center() {
        let bounds = Rect::new(0.0, 0.0, 10.0, 2.0);
        let out = normalize(bounds, BoundsConfig::default());
        assert!((out.width() - out.height()).abs() < 1e-9);
        assert!((out.width() - 12.0).abs() < 1e-9);
        assert!((out.center().x - 5.0).abs() < 1e-9);
        assert!((out.center().y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn normalize_single_point_reaches_min_size() {
        let config = BoundsConfig {
            margin: 0.0,
            min_size: 0.5,
        };
        let out = normalize(compute_bounds(&[Point::new(3.0, 3.0)]), config);
        assert!((out.width() - 0.5).abs() < 1e-12);
        assert!((out.height() - 0.5).abs() < 1e-12);
        assert_eq!(out.center(), Point::new(3.0, 3.0));
    }

    #[test]
    fn unit_square_flips_y() {
        let bounds = Rect::new(0.0, 0.0, 4.0, 4.0);
        assert_eq!(to_unit_square(Point::new(0.0, 4.0), bounds), Point::ZERO);
        assert_eq!(
            to_unit_square(Point::new(4.0, 0.0), bounds),
            Point::new(1.0, 1.0)
        );
        let p = Point::new(1.25, 3.5);
        let back = from_unit_square(to_unit_square(p, bounds), bounds);
        assert!((back.x - p.x).abs() < 1e-12);
        assert!((back.y - p.y).abs() < 1e-12);
    }
}
