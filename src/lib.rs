//! # huewheel
//!
//! The geometric and colorimetric core of a circular hue/saturation
//! selector: a pointer position maps to a (hue, saturation) pair and a
//! pair maps back to an indicator position and an RGB swatch.
//!
//! The crate is headless. A GUI collaborator owns event delivery and
//! drawing; it feeds raw coordinates and colors into [`SelectionState`],
//! renders the [`IndicatorGeometry`] it exposes, and displays the disc
//! bitmap produced once per size/scale change by [`WheelBitmap`].
//!
//! ## Usage
//!
//! ```rust
//! use huewheel::{ColorSample, SelectionState, WheelGeometry};
//! use kurbo::Point;
//!
//! let geometry = WheelGeometry::new(Point::new(165.0, 165.0), 150.0, 2.0)?;
//! let mut selection = SelectionState::new(geometry, ColorSample::default());
//! selection.set_callback(|hue, saturation| {
//!     println!("selected hue {hue:.3}, saturation {saturation:.3}");
//! });
//!
//! // Drag towards 3 o'clock, halfway to the rim.
//! let color = selection.update_from_pointer(Point::new(240.0, 165.0));
//! assert_eq!(color.saturation, 0.5);
//! # Ok::<(), huewheel::GeometryError>(())
//! ```

mod color;
mod constants;
mod geometry;
mod math;
mod raster;
mod selection;

pub use color::{ColorSample, RgbSample};
pub use constants::{
    CENTER_SNAP_RADIUS, INDICATOR_BORDER_WIDTH, INDICATOR_MARGIN, INDICATOR_RADIUS,
    INDICATOR_RADIUS_PRESSED,
};
pub use geometry::{GeometryError, WheelGeometry};
pub use raster::WheelBitmap;
pub use selection::{HueSaturationObserver, IndicatorGeometry, SelectionState};
