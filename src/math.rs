//! Color math — direct conversions without external dependencies.
//! All functions use normalized f64 in 0.0–1.0 for internal use.

/// HSB/HSV → RGB. All values 0.0–1.0.
///
/// Inputs outside the unit range are clamped rather than rejected, so
/// minor floating-point overshoot from upstream geometry still renders.
pub(crate) fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h * 6.0).rem_euclid(6.0);
    let i = h6.floor() as u32;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// RGB → HSB/HSV. All values 0.0–1.0. Total over the unit cube; gray
/// inputs report hue 0.
pub(crate) fn rgb_to_hsb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let r = r.clamp(0.0, 1.0);
    let g = g.clamp(0.0, 1.0);
    let b = b.clamp(0.0, 1.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    (h, s, v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_saturation_is_achromatic_for_any_hue() {
        for h in [0.0, 0.17, 0.5, 0.83, 0.999] {
            let (r, g, b) = hsb_to_rgb(h, 0.0, 0.4);
            assert_eq!((r, g, b), (0.4, 0.4, 0.4));
        }
    }

    #[test]
    fn sector_boundaries_hit_the_primaries() {
        let (r, g, b) = hsb_to_rgb(0.0, 1.0, 1.0);
        assert_eq!((r, g, b), (1.0, 0.0, 0.0));

        let (r, g, b) = hsb_to_rgb(1.0 / 3.0, 1.0, 1.0);
        assert_relative_eq!(r, 0.0, epsilon = 1e-9);
        assert_relative_eq!(g, 1.0);
        assert_relative_eq!(b, 0.0, epsilon = 1e-9);

        let (r, g, b) = hsb_to_rgb(2.0 / 3.0, 1.0, 1.0);
        assert_relative_eq!(r, 0.0, epsilon = 1e-9);
        assert_relative_eq!(g, 0.0, epsilon = 1e-9);
        assert_relative_eq!(b, 1.0);
    }

    #[test]
    fn hue_wraps_past_one() {
        let (r1, g1, b1) = hsb_to_rgb(0.25, 0.8, 0.9);
        let (r2, g2, b2) = hsb_to_rgb(1.25, 0.8, 0.9);
        assert_relative_eq!(r1, r2);
        assert_relative_eq!(g1, g2);
        assert_relative_eq!(b1, b2);
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        let (r, g, b) = hsb_to_rgb(0.0, 1.4, 2.0);
        assert_eq!((r, g, b), (1.0, 0.0, 0.0));
        let (h, s, v) = rgb_to_hsb(1.5, -0.2, 0.0);
        assert_eq!((h, s, v), (0.0, 1.0, 1.0));
    }

    #[test]
    fn rgb_to_hsb_inverts_hsb_to_rgb() {
        for &(h, s, v) in &[
            (0.1, 0.7, 0.9),
            (0.45, 0.3, 0.5),
            (0.72, 1.0, 1.0),
            (0.95, 0.5, 0.2),
        ] {
            let (r, g, b) = hsb_to_rgb(h, s, v);
            let (h2, s2, v2) = rgb_to_hsb(r, g, b);
            assert_relative_eq!(h, h2, epsilon = 1e-9);
            assert_relative_eq!(s, s2, epsilon = 1e-9);
            assert_relative_eq!(v, v2, epsilon = 1e-9);
        }
    }

    #[test]
    fn gray_reports_zero_hue_and_saturation() {
        let (h, s, v) = rgb_to_hsb(0.5, 0.5, 0.5);
        assert_eq!((h, s), (0.0, 0.0));
        assert_relative_eq!(v, 0.5);
    }
}
