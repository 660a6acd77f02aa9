// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{Affine, Point, Rect, Size};

use crate::bounds::is_valid;

/// Mapping between data space and the pixels of a scatterplot view.
///
/// The (square) data bounds are letterboxed into the largest centered square
/// of the view: for a `w x h` view the square has side `min(w, h)` and sits at
/// `((w - side) / 2, (h - side) / 2)`. Inside that square the data rectangle
/// maps through [`to_unit_square`](crate::to_unit_square), so pixel `y` grows
/// downwards while data `y` grows upwards.
///
/// Renderers use [`ScatterViewport::data_to_view_point`] to place points;
/// selection uses [`ScatterViewport::data_to_pixel`] to sample a mask. Both go
/// through the same affine map.
#[derive(Clone, Debug)]
pub struct ScatterViewport {
    view_size: Size,
    bounds: Rect,
    data_to_view: Affine,
    view_to_data: Affine,
}

impl ScatterViewport {
    /// Creates a viewport for a view of `view_size` pixels showing `bounds`.
    ///
    /// If `bounds` is invalid or degenerate, or the view is empty, both
    /// transforms are the identity and [`ScatterViewport::is_valid`] returns
    /// `false`.
    #[must_use]
    pub fn new(view_size: Size, bounds: Rect) -> Self {
        let mut vp = Self {
            view_size,
            bounds,
            data_to_view: Affine::IDENTITY,
            view_to_data: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Returns the view size in pixels.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Sets the view size in pixels and rebuilds the transforms.
    pub fn set_view_size(&mut self, size: Size) {
        if self.view_size == size {
            return;
        }
        self.view_size = size;
        self.rebuild_transforms();
    }

    /// Returns the data bounds shown by this viewport.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Sets the data bounds and rebuilds the transforms.
    pub fn set_bounds(&mut self, bounds: Rect) {
        if self.bounds == bounds {
            return;
        }
        self.bounds = bounds;
        self.rebuild_transforms();
    }

    /// Returns `true` if both the bounds and the view can carry a mapping.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_valid(self.bounds)
            && self.bounds.width() > 0.0
            && self.bounds.height() > 0.0
            && self.square_side() > 0.0
    }

    /// Side length of the letterboxed square, `min(width, height)`.
    #[must_use]
    pub fn square_side(&self) -> f64 {
        self.view_size.width.min(self.view_size.height)
    }

    /// Top-left corner of the letterboxed square in view pixels.
    #[must_use]
    pub fn square_origin(&self) -> Point {
        let side = self.square_side();
        Point::new(
            (self.view_size.width - side) / 2.0,
            (self.view_size.height - side) / 2.0,
        )
    }

    /// Affine map from data space to view pixels.
    #[must_use]
    pub fn data_to_view(&self) -> Affine {
        self.data_to_view
    }

    /// Affine map from view pixels to data space.
    #[must_use]
    pub fn view_to_data(&self) -> Affine {
        self.view_to_data
    }

    /// Converts a data-space point into view pixel coordinates.
    #[must_use]
    pub fn data_to_view_point(&self, pt: Point) -> Point {
        self.data_to_view * pt
    }

    /// Converts a view pixel coordinate into data space.
    #[must_use]
    pub fn view_to_data_point(&self, pt: Point) -> Point {
        self.view_to_data * pt
    }

    /// Returns the integer pixel a data-space point falls on, if it is inside the view.
    ///
    /// The view coordinate is rounded to the nearest pixel; there is no
    /// sub-pixel coverage. Returns `None` for an invalid viewport.
    #[must_use]
    pub fn data_to_pixel(&self, pt: Point) -> Option<(usize, usize)> {
        if !self.is_valid() {
            return None;
        }
        let view = self.data_to_view_point(pt);
        let x = view.x.round();
        let y = view.y.round();
        if !(x >= 0.0 && y >= 0.0 && x < self.view_size.width && y < self.view_size.height) {
            return None;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "range checked against the view size above"
        )]
        let pixel = (x as usize, y as usize);
        Some(pixel)
    }

    fn rebuild_transforms(&mut self) {
        if !self.is_valid() {
            self.data_to_view = Affine::IDENTITY;
            self.view_to_data = Affine::IDENTITY;
            return;
        }
        let b = self.bounds;
        let w = b.width();
        let h = b.height();
        // Data → unit square (top-left origin), then scale into the letterbox.
        let data_to_unit = Affine::new([1.0 / w, 0.0, 0.0, -1.0 / h, -b.x0 / w, b.y1 / h]);
        self.data_to_view = Affine::translate(self.square_origin().to_vec2())
            * Affine::scale(self.square_side())
            * data_to_unit;
        self.view_to_data = self.data_to_view.inverse();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::ScatterViewport;
    use crate::{NO_DATA, to_unit_square};

    #[test]
    fn corners_land_on_letterbox_square() {
        let vp = ScatterViewport::new(Size::new(200.0, 100.0), Rect::new(-1.0, -1.0, 1.0, 1.0));
        assert_eq!(vp.square_side(), 100.0);
        assert_eq!(vp.square_origin(), Point::new(50.0, 0.0));

        let top_left = vp.data_to_view_point(Point::new(-1.0, 1.0));
        assert!((top_left.x - 50.0).abs() < 1e-9);
        assert!(top_left.y.abs() < 1e-9);

        let bottom_right = vp.data_to_view_point(Point::new(1.0, -1.0));
        assert!((bottom_right.x - 150.0).abs() < 1e-9);
        assert!((bottom_right.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn forward_matches_unit_square_mapping() {
        let bounds = Rect::new(10.0, 20.0, 30.0, 40.0);
        let vp = ScatterViewport::new(Size::new(64.0, 128.0), bounds);
        let side = vp.square_side();
        let origin = vp.square_origin();

        let p = Point::new(17.0, 33.0);
        let unit = to_unit_square(p, bounds);
        let expected = Point::new(origin.x + unit.x * side, origin.y + unit.y * side);
        let actual = vp.data_to_view_point(p);
        assert!((actual.x - expected.x).abs() < 1e-9);
        assert!((actual.y - expected.y).abs() < 1e-9);
    }

    #[test]
    fn view_data_roundtrip() {
        let vp = ScatterViewport::new(Size::new(640.0, 480.0), Rect::new(-5.0, -5.0, 5.0, 5.0));
        let p = Point::new(1.5, -2.25);
        let back = vp.view_to_data_point(vp.data_to_view_point(p));
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn invalid_bounds_map_nothing() {
        let vp = ScatterViewport::new(Size::new(100.0, 100.0), NO_DATA);
        assert!(!vp.is_valid());
        assert_eq!(vp.data_to_pixel(Point::ZERO), None);

        let empty_view = ScatterViewport::new(Size::ZERO, Rect::new(0.0, 0.0, 1.0, 1.0));
        assert!(!empty_view.is_valid());
    }

    #[test]
    fn pixel_rounding_and_range() {
        let vp = ScatterViewport::new(Size::new(10.0, 10.0), Rect::new(0.0, 0.0, 1.0, 1.0));
        // (0.34, 0.66) -> view (3.4, 3.4) -> pixel (3, 3).
        assert_eq!(vp.data_to_pixel(Point::new(0.34, 0.66)), Some((3, 3)));
        // Right edge rounds to column 10, which is outside a 10 pixel wide view.
        assert_eq!(vp.data_to_pixel(Point::new(1.0, 0.5)), None);
    }
}
