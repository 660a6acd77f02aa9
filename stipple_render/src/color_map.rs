// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use peniko::Color;

/// A color lookup image, row-major.
///
/// One-dimensional color maps are a single row. A 1x1 image is how the
/// constant color reaches the point renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorMapImage {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl ColorMapImage {
    /// Wraps row-major pixels; `None` if `pixels.len() != width * height`.
    #[must_use]
    pub fn new(width: usize, height: usize, pixels: Vec<Color>) -> Option<Self> {
        (pixels.len() == width * height).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// A 1x1 image of `color`.
    #[must_use]
    pub fn constant(color: Color) -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: vec![color],
        }
    }

    /// A single-row image sampling the piecewise linear gradient through `stops`.
    ///
    /// Stops are evenly spaced; interpolation is per component in sRGB.
    /// An empty stop list yields a black image.
    #[must_use]
    pub fn gradient(stops: &[Color], width: usize) -> Self {
        let pixels = (0..width)
            .map(|i| {
                let t = if width > 1 {
                    i as f32 / (width - 1) as f32
                } else {
                    0.0
                };
                sample(stops, t)
            })
            .collect();
        Self {
            width,
            height: 1,
            pixels,
        }
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

    /// The pixels, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Returns `true` for a 1x1 image.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.width == 1 && self.height == 1
    }
}

impl Default for ColorMapImage {
    fn default() -> Self {
        Self::gradient(&[Color::BLACK, Color::WHITE], 256)
    }
}

fn sample(stops: &[Color], t: f32) -> Color {
    match stops {
        [] => Color::BLACK,
        [only] => *only,
        _ => {
            let scaled = t.clamp(0.0, 1.0) * (stops.len() - 1) as f32;
            #[expect(
                clippy::cast_possible_truncation,
                reason = "scaled is in [0, stops.len() - 1]"
            )]
            let lower = (scaled.floor() as usize).min(stops.len() - 2);
            let f = scaled - lower as f32;
            let a = stops[lower].components;
            let b = stops[lower + 1].components;
            Color::new(core::array::from_fn(|c| a[c] + (b[c] - a[c]) * f))
        }
    }
}

/// The value range a color map spans.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorMapRange {
    /// Value mapped to the first color.
    pub min: f32,
    /// Value mapped to the last color.
    pub max: f32,
}

impl ColorMapRange {
    /// Creates a range.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

impl Default for ColorMapRange {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use peniko::Color;

    use super::ColorMapImage;

    #[test]
    fn gradient_hits_stops_at_ends_and_middle() {
        let red = Color::from_rgb8(255, 0, 0);
        let blue = Color::from_rgb8(0, 0, 255);
        let image = ColorMapImage::gradient(&[red, blue], 3);
        assert_eq!(image.width(), 3);
        assert_eq!(image.pixels()[0], red);
        assert_eq!(image.pixels()[2], blue);
        let mid = image.pixels()[1].components;
        assert!((mid[0] - 0.5).abs() < 1e-6);
        assert!((mid[2] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn constant_is_one_pixel() {
        let image = ColorMapImage::constant(Color::WHITE);
        assert!(image.is_constant());
        assert_eq!(image.pixels(), &[Color::WHITE]);
        assert!(ColorMapImage::new(2, 2, vec![Color::WHITE; 3]).is_none());
    }
}
