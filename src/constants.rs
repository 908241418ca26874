//! Tuning constants for the wheel geometry and indicator.

/// Pointer positions closer than this to the disc center snap to the
/// exact center, in wheel-local units (scale-independent). Forces pure
/// white/gray at the middle of the wheel.
pub const CENTER_SNAP_RADIUS: f64 = 5.0;

/// Raster-space saturation above this is clamped to exactly 1.0,
/// absorbing anti-alias jitter at the rim.
pub const EDGE_SATURATION_CLAMP: f64 = 0.98;

/// Saturation above this starts the alpha fade-out band when
/// rasterizing the disc.
pub const EDGE_FADE_START: f64 = 0.99;

/// Additive inset applied by the indicator position transform.
///
/// Matches the visually-tuned indicator placement and deliberately
/// differs from the inset the pointer transform uses.
pub const INDICATOR_MARGIN: f64 = 20.0;

/// Indicator circle radius while idle.
pub const INDICATOR_RADIUS: f64 = 8.0;

/// Indicator circle radius while the pointer is held down.
pub const INDICATOR_RADIUS_PRESSED: f64 = 10.0;

/// Indicator outline width, for renderers that stroke the marker.
pub const INDICATOR_BORDER_WIDTH: f64 = 1.0;
