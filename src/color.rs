//! Color value types for the wheel core.
//!
//! [`ColorSample`] is the HSB-side representation the selection state
//! works in; [`RgbSample`] is the display-side representation handed to
//! renderers. Both store f64 components in the 0.0–1.0 range and use
//! direct math for conversions and hex parsing/formatting.

use crate::math;

/// HSB color with alpha, components in the 0.0–1.0 range.
///
/// Hue is circular: 0.0 and 1.0 denote the same angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSample {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
    pub alpha: f64,
}

impl Default for ColorSample {
    /// White at full opacity, the color at the wheel's center.
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 0.0,
            brightness: 1.0,
            alpha: 1.0,
        }
    }
}

impl ColorSample {
    pub fn new(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            alpha,
        }
    }

    /// Convert to RGB. Out-of-range components are clamped, not rejected.
    pub fn to_rgb(self) -> RgbSample {
        let (r, g, b) = math::hsb_to_rgb(self.hue, self.saturation, self.brightness);
        RgbSample {
            red: r,
            green: g,
            blue: b,
            alpha: self.alpha.clamp(0.0, 1.0),
        }
    }
}

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbSample {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl RgbSample {
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            red: r as f64 / 255.0,
            green: g as f64 / 255.0,
            blue: b as f64 / 255.0,
            alpha: 1.0,
        }
    }

    /// Convert to 8-bit channels, `round(x*255)` clamped to 0–255.
    pub fn to_rgba8(self) -> [u8; 4] {
        let ch = |x: f64| (x * 255.0).round().clamp(0.0, 255.0) as u8;
        [ch(self.red), ch(self.green), ch(self.blue), ch(self.alpha)]
    }

    /// Convert to HSB, keeping alpha. Gray inputs report hue 0.
    pub fn to_hsb(self) -> ColorSample {
        let (h, s, v) = math::rgb_to_hsb(self.red, self.green, self.blue);
        ColorSample {
            hue: h,
            saturation: s,
            brightness: v,
            alpha: self.alpha.clamp(0.0, 1.0),
        }
    }

    /// Parse a hex string (with or without `#`, 3, 6, or 8 chars).
    ///
    /// 8-char hex is interpreted as RRGGBBAA. 3 and 6-char hex default to
    /// full opacity.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match stripped.len() {
            3 => {
                let r = u8::from_str_radix(&stripped[0..1], 16).ok()?;
                let g = u8::from_str_radix(&stripped[1..2], 16).ok()?;
                let b = u8::from_str_radix(&stripped[2..3], 16).ok()?;
                Some(Self::from_rgb8(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&stripped[0..2], 16).ok()?;
                let g = u8::from_str_radix(&stripped[2..4], 16).ok()?;
                let b = u8::from_str_radix(&stripped[4..6], 16).ok()?;
                Some(Self::from_rgb8(r, g, b))
            }
            8 => {
                let r = u8::from_str_radix(&stripped[0..2], 16).ok()?;
                let g = u8::from_str_radix(&stripped[2..4], 16).ok()?;
                let b = u8::from_str_radix(&stripped[4..6], 16).ok()?;
                let a = u8::from_str_radix(&stripped[6..8], 16).ok()?;
                Some(Self {
                    alpha: a as f64 / 255.0,
                    ..Self::from_rgb8(r, g, b)
                })
            }
            _ => None,
        }
    }

    /// Format as uppercase hex (no `#` prefix).
    ///
    /// Returns 6 chars (RRGGBB) when alpha is 1.0, 8 chars (RRGGBBAA)
    /// otherwise.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn achromatic_sample_converts_to_gray() {
        let rgb = ColorSample::new(0.6, 0.0, 0.25, 0.5).to_rgb();
        assert_eq!(rgb, RgbSample::new(0.25, 0.25, 0.25, 0.5));
    }

    #[test]
    fn rgba8_rounds_and_clamps() {
        assert_eq!(
            RgbSample::new(1.0, 0.0, 0.5, 1.0).to_rgba8(),
            [255, 0, 128, 255]
        );
        assert_eq!(
            RgbSample::new(1.2, -0.1, 0.999, 1.0).to_rgba8(),
            [255, 0, 255, 255]
        );
    }

    #[test]
    fn hex_roundtrip() {
        let c = RgbSample::from_hex("#3B82F6").unwrap();
        assert_eq!(c.to_hex(), "3B82F6");

        let c = RgbSample::from_hex("3B82F680").unwrap();
        assert_relative_eq!(c.alpha, 128.0 / 255.0);
        assert_eq!(c.to_hex(), "3B82F680");

        let c = RgbSample::from_hex("#F00").unwrap();
        assert_eq!(c.to_hex(), "FF0000");
    }

    #[test]
    fn hex_rejects_garbage() {
        assert!(RgbSample::from_hex("zzzzzz").is_none());
        assert!(RgbSample::from_hex("12345").is_none());
    }

    #[test]
    fn rgb_projects_onto_hsb() {
        let hsb = RgbSample::new(1.0, 0.0, 0.0, 1.0).to_hsb();
        assert_eq!(hsb.hue, 0.0);
        assert_eq!(hsb.saturation, 1.0);
        assert_eq!(hsb.brightness, 1.0);
    }
}
