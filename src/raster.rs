//! Rasterizes the hue/saturation disc to an RGBA8 pixel buffer.
//!
//! The wheel encodes hue and saturation only; brightness is pinned at
//! 1.0 and any darkening is the renderer's business. The bitmap is a
//! pure function of `(size, device_scale)` and is meant to be produced
//! once per size/scale change and cached, never per-frame.

use kurbo::{Point, Size};

use crate::color::ColorSample;
use crate::constants;
use crate::geometry::{GeometryError, WheelGeometry};

/// Square RGBA8 bitmap of the full wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelBitmap {
    dimension: u32,
    pixels: Vec<u8>,
}

impl WheelBitmap {
    /// Rasterize the wheel for a disc area of `size` logical units at
    /// the given pixel density. The bitmap is square with side
    /// `floor(min(size.width, size.height) * device_scale)`.
    ///
    /// Pixels past the rim are left fully transparent; a steep alpha
    /// ramp just inside the rim anti-aliases the edge.
    pub fn render(size: Size, device_scale: f64) -> Result<Self, GeometryError> {
        let dimension = (size.width.min(size.height) * device_scale).floor();
        if !(dimension > 0.0) {
            return Err(GeometryError::InvalidRadius(dimension / (2.0 * device_scale)));
        }
        let dimension = dimension as u32;

        // Geometry whose raster radius is exactly half the bitmap side.
        let radius = dimension as f64 / (2.0 * device_scale);
        let geometry = WheelGeometry::new(Point::new(radius, radius), radius, device_scale)?;

        let mut pixels = vec![0u8; (dimension * dimension * 4) as usize];
        for y in 0..dimension {
            let row_offset = (y * dimension * 4) as usize;
            for x in 0..dimension {
                let (hue, saturation) =
                    geometry.hue_saturation_at(Point::new(x as f64, y as f64));
                if saturation >= 1.0 {
                    continue; // boundary or outside, stays transparent
                }

                let alpha = if saturation > constants::EDGE_FADE_START {
                    ((1.0 - saturation) * 100.0).clamp(0.0, 1.0)
                } else {
                    1.0
                };

                let rgba = ColorSample::new(hue, saturation, 1.0, alpha)
                    .to_rgb()
                    .to_rgba8();
                let offset = row_offset + (x * 4) as usize;
                pixels[offset..offset + 4].copy_from_slice(&rgba);
            }
        }

        log::debug!(
            "rasterized {dimension}x{dimension} wheel ({} bytes)",
            pixels.len()
        );
        Ok(Self { dimension, pixels })
    }

    pub fn width(&self) -> u32 {
        self.dimension
    }

    pub fn height(&self) -> u32 {
        self.dimension
    }

    /// Raw RGBA8 bytes, row-major, `4 * (x + y * width)` addressing.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// RGBA channels of one pixel. Panics if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.dimension && y < self.dimension);
        let offset = (4 * (x + y * self.dimension)) as usize;
        self.pixels[offset..offset + 4].try_into().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_has_expected_dimensions() {
        let bmp = WheelBitmap::render(Size::new(100.0, 120.0), 2.0).unwrap();
        assert_eq!(bmp.width(), 200);
        assert_eq!(bmp.height(), 200);
        assert_eq!(bmp.pixels().len(), 200 * 200 * 4);
    }

    #[test]
    fn center_pixel_is_opaque_white() {
        let bmp = WheelBitmap::render(Size::new(100.0, 100.0), 2.0).unwrap();
        assert_eq!(bmp.pixel(100, 100), [255, 255, 255, 255]);
    }

    #[test]
    fn corner_pixels_are_transparent() {
        let bmp = WheelBitmap::render(Size::new(100.0, 100.0), 2.0).unwrap();
        assert_eq!(bmp.pixel(0, 0), [0, 0, 0, 0]);
        assert_eq!(bmp.pixel(199, 199), [0, 0, 0, 0]);
        assert_eq!(bmp.pixel(199, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn rim_pixel_on_positive_x_axis_is_saturated_red() {
        let bmp = WheelBitmap::render(Size::new(100.0, 100.0), 2.0).unwrap();
        // 95% of the way to the rim along hue 0.
        let [r, g, b, a] = bmp.pixel(195, 100);
        assert_eq!(r, 255);
        assert_eq!(a, 255);
        assert!(g < 20 && b < 20);
        assert_eq!(g, b);
    }

    #[test]
    fn degenerate_size_is_rejected() {
        assert!(WheelBitmap::render(Size::new(0.0, 100.0), 2.0).is_err());
    }
}
