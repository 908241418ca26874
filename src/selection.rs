//! Selection state for the wheel: the current color, the indicator, and
//! the hue-memory rule.
//!
//! The collaborator (view/controller) feeds raw pointer positions or
//! externally chosen colors in; this module resolves them against the
//! [`WheelGeometry`], keeps the indicator placement in sync, and fires
//! the registered notification sinks. Nothing here draws or performs
//! I/O; every operation is a synchronous state transition.

use kurbo::Point;

use crate::color::{ColorSample, RgbSample};
use crate::constants;
use crate::geometry::WheelGeometry;

/// Delegate-style notification sink for interactive selection changes.
pub trait HueSaturationObserver {
    fn on_hue_saturation_selected(&self, hue: f64, saturation: f64);
}

/// Indicator marker state. The radius widens while the pointer is held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorState {
    point: Option<Point>,
    radius: f64,
    /// Hue stashed when saturation reaches zero, so a pass through gray
    /// does not silently discard it.
    last_hue: f64,
}

impl IndicatorState {
    fn new() -> Self {
        Self {
            point: None,
            radius: constants::INDICATOR_RADIUS,
            last_hue: 0.0,
        }
    }
}

/// Everything a renderer needs to draw the indicator marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorGeometry {
    /// Unset until the first pointer update or color set resolves it.
    pub point: Option<Point>,
    pub radius: f64,
    pub border_width: f64,
    pub fill: RgbSample,
}

/// Owns the current hue/saturation selection for one wheel instance.
pub struct SelectionState {
    geometry: WheelGeometry,
    color: ColorSample,
    indicator: IndicatorState,
    observer: Option<Box<dyn HueSaturationObserver>>,
    callback: Option<Box<dyn Fn(f64, f64)>>,
}

impl SelectionState {
    /// Create a selection over `geometry`, initialized to `color` (the
    /// hue-memory rule applies to the initial color too).
    pub fn new(geometry: WheelGeometry, color: ColorSample) -> Self {
        let mut state = Self {
            geometry,
            color: ColorSample::default(),
            indicator: IndicatorState::new(),
            observer: None,
            callback: None,
        };
        state.set_color(color);
        state
    }

    /// Replace the geometry after a resize or scale change and re-place
    /// the indicator for the current selection.
    pub fn set_geometry(&mut self, geometry: WheelGeometry) {
        self.geometry = geometry;
        self.indicator.point = Some(
            self.geometry
                .point_at(self.color.hue, self.color.saturation),
        );
    }

    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    pub fn color(&self) -> ColorSample {
        self.color
    }

    /// Register the delegate-style sink. At most one is active; both the
    /// delegate and the function callback may be registered and both
    /// fire on every change.
    pub fn set_observer(&mut self, observer: impl HueSaturationObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Register the function-callback sink.
    pub fn set_callback(&mut self, callback: impl Fn(f64, f64) + 'static) {
        self.callback = Some(Box::new(callback));
    }

    pub fn clear_callback(&mut self) {
        self.callback = None;
    }

    /// Resolve a raw pointer position into the current selection.
    ///
    /// The point is clamped to the disc (with center snap), stored as
    /// the indicator position, and converted to (hue, saturation) in
    /// raster space. Brightness is pinned to 1.0 on this path. Must be
    /// called for every reported movement while dragging, in order; the
    /// caller throttles, this core does not.
    ///
    /// Notifies the registered sinks unless the reported pair is
    /// unchanged (a no-op drag).
    pub fn update_from_pointer(&mut self, raw: Point) -> ColorSample {
        let (point, is_center) = self.geometry.clamp_to_disc(raw);
        self.indicator.point = Some(point);

        let (hue, saturation) = if is_center {
            (0.0, 0.0)
        } else {
            let origin = self.geometry.disc_origin();
            let scale = self.geometry.device_scale();
            let raster = Point::new((point.x - origin.x) * scale, (point.y - origin.y) * scale);
            self.geometry.hue_saturation_at(raster)
        };

        let hue = self.apply_hue_memory(hue, saturation);
        let previous = self.color;
        self.color = ColorSample::new(hue, saturation, 1.0, self.color.alpha);

        if (hue, saturation) != (previous.hue, previous.saturation) {
            self.notify(hue, saturation);
        }
        self.color
    }

    /// Change saturation while keeping the current hue (subject to the
    /// hue-memory rule) and brightness. Re-places the indicator.
    pub fn set_saturation(&mut self, saturation: f64) {
        let hue = self.apply_hue_memory(self.color.hue, saturation);
        self.color = ColorSample {
            hue,
            saturation,
            ..self.color
        };
        self.indicator.point = Some(self.geometry.point_at(hue, saturation));
    }

    /// Replace the whole selection with an externally chosen color,
    /// applying the hue-memory rule and re-placing the indicator.
    /// Programmatic sets do not notify; only pointer updates do.
    pub fn set_color(&mut self, sample: ColorSample) {
        let hue = self.apply_hue_memory(sample.hue, sample.saturation);
        self.color = ColorSample { hue, ..sample };
        self.indicator.point = Some(self.geometry.point_at(hue, sample.saturation));
    }

    /// Project an externally chosen RGB color onto the wheel.
    pub fn set_rgb(&mut self, rgb: RgbSample) {
        self.set_color(rgb.to_hsb());
    }

    /// Widen the indicator while the pointer is actively down.
    pub fn set_pressed(&mut self, pressed: bool) {
        self.indicator.radius = if pressed {
            constants::INDICATOR_RADIUS_PRESSED
        } else {
            constants::INDICATOR_RADIUS
        };
    }

    /// Read-only rendering query: where the indicator sits, how big it
    /// is, and the swatch color filling it.
    pub fn indicator_geometry(&self) -> IndicatorGeometry {
        IndicatorGeometry {
            point: self.indicator.point,
            radius: self.indicator.radius,
            border_width: constants::INDICATOR_BORDER_WIDTH,
            fill: self.color.to_rgb(),
        }
    }

    /// Hue-memory rule: a hue that desaturates to gray is remembered,
    /// and restored once saturation returns while the candidate hue is
    /// still the placeholder zero.
    fn apply_hue_memory(&mut self, candidate: f64, saturation: f64) -> f64 {
        if saturation == 0.0 {
            let hue = if candidate > 0.0 {
                candidate
            } else {
                self.color.hue
            };
            if hue > 0.0 {
                self.indicator.last_hue = hue;
            }
            candidate
        } else if candidate == 0.0 && self.indicator.last_hue > 0.0 {
            let restored = self.indicator.last_hue;
            self.indicator.last_hue = 0.0;
            restored
        } else {
            candidate
        }
    }

    fn notify(&self, hue: f64, saturation: f64) {
        if let Some(observer) = &self.observer {
            observer.on_hue_saturation_selected(hue, saturation);
        }
        if let Some(callback) = &self.callback {
            callback(hue, saturation);
        }
    }
}
