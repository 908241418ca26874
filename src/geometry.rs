//! Disc geometry: position ↔ (hue, saturation) transforms.
//!
//! [`WheelGeometry`] describes one configuration of the wheel (center,
//! radius, device scale) and is replaced wholesale when the disc is
//! resized or rescaled. The forward transform [`hue_saturation_at`]
//! works in raster (scaled) coordinates; the inverse [`point_at`] works
//! in the diameter-relative local frame with a fixed additive margin.
//! The two frames differ on purpose: the indicator placement was tuned
//! visually against the drawn wheel, and reported values are allowed to
//! drift slightly from it at the margin.
//!
//! [`hue_saturation_at`]: WheelGeometry::hue_saturation_at
//! [`point_at`]: WheelGeometry::point_at

use std::f64::consts::TAU;
use std::fmt;

use kurbo::{Point, Vec2};

use crate::constants;

/// Rejected configuration for [`WheelGeometry::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Radius was zero, negative, or not finite.
    InvalidRadius(f64),
    /// Device scale was below 1.0 or not finite.
    InvalidDeviceScale(f64),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidRadius(r) => {
                write!(f, "wheel radius must be positive and finite, got {r}")
            }
            GeometryError::InvalidDeviceScale(s) => {
                write!(f, "device scale must be at least 1.0 and finite, got {s}")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Immutable description of the hue/saturation disc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    center: Point,
    radius: f64,
    device_scale: f64,
}

impl WheelGeometry {
    /// Create a geometry for a disc centered at `center` with the given
    /// local-coordinate `radius` and pixel-density multiplier.
    ///
    /// Fails fast on a non-positive radius or a scale below 1.0 so bad
    /// configuration cannot surface later as NaN positions.
    pub fn new(center: Point, radius: f64, device_scale: f64) -> Result<Self, GeometryError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::InvalidRadius(radius));
        }
        if !device_scale.is_finite() || device_scale < 1.0 {
            return Err(GeometryError::InvalidDeviceScale(device_scale));
        }
        Ok(Self {
            center,
            radius,
            device_scale,
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn device_scale(&self) -> f64 {
        self.device_scale
    }

    /// Top-left corner of the disc's bounding square in local coordinates.
    pub fn disc_origin(&self) -> Point {
        self.center - Vec2::new(self.radius, self.radius)
    }

    /// Constrain a local-coordinate point to the disc.
    ///
    /// Points beyond the rim are projected back onto the boundary circle
    /// along their own angle. Points within [`constants::CENTER_SNAP_RADIUS`]
    /// of the center (checked after the boundary clamp) snap to the exact
    /// center and report `is_center = true`, which callers treat as
    /// saturation zero.
    pub fn clamp_to_disc(&self, point: Point) -> (Point, bool) {
        let delta = point - self.center;
        let mut distance = delta.hypot();
        let mut out = point;

        if distance > self.radius {
            let theta = delta.y.atan2(delta.x);
            out = self.center + Vec2::new(self.radius * theta.cos(), self.radius * theta.sin());
            distance = self.radius;
        }

        if distance < constants::CENTER_SNAP_RADIUS {
            return (self.center, true);
        }
        (out, false)
    }

    /// Hue and saturation at a raster-space point.
    ///
    /// `point` is in scaled pixel coordinates relative to the disc's
    /// raster bounding square, so the disc center sits at
    /// `(radius * device_scale, radius * device_scale)`. Saturation is
    /// the normalized distance from the center, clamped to exactly 1.0
    /// past [`constants::EDGE_SATURATION_CLAMP`]. Hue runs
    /// counter-clockwise from the positive x-axis, mirrored below it so
    /// the full turn is covered exactly once.
    pub fn hue_saturation_at(&self, point: Point) -> (f64, f64) {
        let ratio = self.radius * self.device_scale;
        let dx = (point.x - ratio) / ratio;
        let dy = (point.y - ratio) / ratio;
        let delta = (dx * dx + dy * dy).sqrt();

        let mut saturation = delta;
        if saturation > constants::EDGE_SATURATION_CLAMP {
            saturation = 1.0;
        }

        let hue = if delta == 0.0 {
            0.0
        } else {
            // dx/delta can overshoot ±1 by an ulp; keep acos in domain.
            let mut hue = (dx / delta).clamp(-1.0, 1.0).acos() / TAU;
            if dy < 0.0 {
                hue = 1.0 - hue;
            }
            hue
        };
        (hue, saturation)
    }

    /// Local-frame position of a given hue and saturation, for placing
    /// the indicator. Approximate inverse of [`hue_saturation_at`]; the
    /// frames differ by design (see module docs).
    ///
    /// [`hue_saturation_at`]: WheelGeometry::hue_saturation_at
    pub fn point_at(&self, hue: f64, saturation: f64) -> Point {
        let dimension = 2.0 * self.radius;
        let r = saturation * dimension / 2.0;
        let angle = hue * TAU;
        Point::new(
            dimension / 2.0 + r * angle.cos() + constants::INDICATOR_MARGIN,
            dimension / 2.0 + r * angle.sin() + constants::INDICATOR_MARGIN,
        )
    }
}
