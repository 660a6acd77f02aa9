// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `ceil`
use kurbo::{Rect, Size};

/// A single-channel alpha image describing which view pixels are inside a
/// selection shape.
///
/// The origin is the top-left pixel; rows are stored top to bottom. A pixel is
/// inside the shape iff its alpha is non-zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelMask {
    width: usize,
    height: usize,
    alpha: Vec<u8>,
}

impl PixelMask {
    /// Creates an empty (fully transparent) mask.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            alpha: vec![0; width * height],
        }
    }

    /// Wraps an existing row-major alpha buffer.
    ///
    /// Returns `None` if `alpha.len() != width * height`.
    #[must_use]
    pub fn from_alpha(width: usize, height: usize, alpha: Vec<u8>) -> Option<Self> {
        (alpha.len() == width * height).then_some(Self {
            width,
            height,
            alpha,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Size in pixels, as used by [`ScatterViewport`](stipple_bounds::ScatterViewport).
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }

    /// Alpha at `(x, y)`; zero outside the mask.
    #[must_use]
    pub fn alpha(&self, x: usize, y: usize) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.alpha[y * self.width + x]
    }

    /// Returns `true` if `(x, y)` is inside the shape.
    #[must_use]
    pub fn is_hit(&self, x: usize, y: usize) -> bool {
        self.alpha(x, y) > 0
    }

    /// Makes every pixel transparent.
    pub fn clear(&mut self) {
        self.alpha.fill(0);
    }

    /// Marks every pixel whose center lies in `rect` as inside the shape.
    ///
    /// `rect` is in pixel coordinates and may extend past the mask; it is
    /// clipped. Corners may be given in any order.
    pub fn fill_rect(&mut self, rect: Rect) {
        let rect = rect.abs();
        let columns = span(rect.x0, rect.x1, self.width);
        let rows = span(rect.y0, rect.y1, self.height);
        for y in rows {
            let row = y * self.width;
            self.alpha[row + columns.start..row + columns.end].fill(u8::MAX);
        }
    }
}

/// Pixel range whose centers `i + 0.5` fall in `[lo, hi)`, clipped to `[0, len)`.
fn span(lo: f64, hi: f64, len: usize) -> core::ops::Range<usize> {
    let clip = |v: f64| {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "clamped into [0, len] first"
        )]
        let i = (v - 0.5).ceil().clamp(0.0, len as f64) as usize;
        i
    };
    let start = clip(lo);
    let end = clip(hi).max(start);
    start..end
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::Rect;

    use super::PixelMask;

    #[test]
    fn fill_rect_covers_pixel_centers() {
        let mut mask = PixelMask::new(4, 3);
        mask.fill_rect(Rect::new(1.0, 0.0, 3.0, 2.0));
        assert!(!mask.is_hit(0, 0));
        assert!(mask.is_hit(1, 0));
        assert!(mask.is_hit(2, 1));
        assert!(!mask.is_hit(3, 1));
        assert!(!mask.is_hit(1, 2));
    }

    #[test]
    fn fill_rect_clips_and_accepts_reversed_corners() {
        let mut mask = PixelMask::new(2, 2);
        mask.fill_rect(Rect::new(10.0, 10.0, -5.0, -5.0));
        assert!((0..2).all(|y| (0..2).all(|x| mask.is_hit(x, y))));
        assert!(!mask.is_hit(2, 0));
    }

    #[test]
    fn from_alpha_checks_length() {
        assert!(PixelMask::from_alpha(2, 2, vec![0; 3]).is_none());
        let mask = PixelMask::from_alpha(2, 1, vec![0, 7]).unwrap();
        assert!(mask.is_hit(1, 0));
        assert_eq!(mask.alpha(5, 5), 0);
    }
}
