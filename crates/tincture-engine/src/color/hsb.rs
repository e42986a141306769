use super::Rgb8;

/// Hue/saturation/brightness triple (also known as HSV).
///
/// - `h` in degrees, `[0, 360)`
/// - `s`, `b` as fractions, `[0, 1]`
///
/// Construct through [`Hsb::new`] to get those ranges enforced; the fields are
/// public for pattern matching and struct updates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Hsb {
    pub h: f32,
    pub s: f32,
    pub b: f32,
}

impl Hsb {
    /// Creates a normalized color: hue wrapped modulo 360, saturation and
    /// brightness clamped to `[0, 1]`. Non-finite components become 0.
    #[inline]
    pub fn new(h: f32, s: f32, b: f32) -> Self {
        Self {
            h: wrap_hue(h),
            s: unit(s),
            b: unit(b),
        }
    }

    /// Returns the same hue at the given saturation and brightness.
    #[inline]
    pub fn with_sb(self, s: f32, b: f32) -> Self {
        Self::new(self.h, s, b)
    }

    #[inline]
    pub fn to_rgb(self) -> Rgb8 {
        hsb_to_rgb(self.h, self.s, self.b)
    }
}

/// Wraps a hue into `[0, 360)`. Non-finite hues map to 0.
#[inline]
pub(crate) fn wrap_hue(h: f32) -> f32 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[inline]
fn unit(v: f32) -> f32 {
    if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
}

#[inline]
fn channel(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Six-sector HSB to 8-bit RGB conversion.
///
/// Inputs are normalized first (see [`Hsb::new`]), so the function is total:
/// hue 360 converts like hue 0, negative hues wrap, and saturation or
/// brightness outside `[0, 1]` are clamped.
pub fn hsb_to_rgb(h: f32, s: f32, b: f32) -> Rgb8 {
    let h = wrap_hue(h);
    let s = unit(s);
    let v = unit(b);

    let sector = h / 60.0;
    let i = sector.floor();
    let f = sector - i;

    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (i as u32) % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb8::new(channel(r), channel(g), channel(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── primaries ─────────────────────────────────────────────────────────

    #[test]
    fn red_green_blue() {
        assert_eq!(hsb_to_rgb(0.0, 1.0, 1.0), Rgb8::new(255, 0, 0));
        assert_eq!(hsb_to_rgb(120.0, 1.0, 1.0), Rgb8::new(0, 255, 0));
        assert_eq!(hsb_to_rgb(240.0, 1.0, 1.0), Rgb8::new(0, 0, 255));
    }

    #[test]
    fn secondaries() {
        assert_eq!(hsb_to_rgb(60.0, 1.0, 1.0), Rgb8::new(255, 255, 0));
        assert_eq!(hsb_to_rgb(180.0, 1.0, 1.0), Rgb8::new(0, 255, 255));
        assert_eq!(hsb_to_rgb(300.0, 1.0, 1.0), Rgb8::new(255, 0, 255));
    }

    #[test]
    fn zero_saturation_is_achromatic() {
        for h in [0.0, 37.5, 123.0, 200.0, 359.9] {
            let c = hsb_to_rgb(h, 0.0, 0.6);
            assert_eq!(c.r, c.g);
            assert_eq!(c.g, c.b);
            assert_eq!(c.r, 153);
        }
    }

    #[test]
    fn zero_brightness_is_black() {
        assert_eq!(hsb_to_rgb(77.0, 0.9, 0.0), Rgb8::new(0, 0, 0));
    }

    #[test]
    fn reference_palette_colors() {
        // Stops of the default three-stop palette at s = b = 0.8.
        assert_eq!(hsb_to_rgb(0.0, 0.8, 0.8), Rgb8::new(204, 41, 41));
        assert_eq!(hsb_to_rgb(120.0, 0.8, 0.8), Rgb8::new(41, 204, 41));
        assert_eq!(hsb_to_rgb(240.0, 0.8, 0.8), Rgb8::new(41, 41, 204));
    }

    // ── out-of-range input ────────────────────────────────────────────────

    #[test]
    fn hue_360_wraps_to_red() {
        assert_eq!(hsb_to_rgb(360.0, 1.0, 1.0), hsb_to_rgb(0.0, 1.0, 1.0));
    }

    #[test]
    fn negative_hue_wraps() {
        assert_eq!(hsb_to_rgb(-120.0, 1.0, 1.0), hsb_to_rgb(240.0, 1.0, 1.0));
        assert_eq!(hsb_to_rgb(480.0, 1.0, 1.0), hsb_to_rgb(120.0, 1.0, 1.0));
    }

    #[test]
    fn saturation_and_brightness_are_clamped() {
        assert_eq!(hsb_to_rgb(0.0, 2.0, 5.0), Rgb8::new(255, 0, 0));
        assert_eq!(hsb_to_rgb(0.0, -1.0, -1.0), Rgb8::new(0, 0, 0));
    }

    #[test]
    fn nan_input_does_not_propagate() {
        assert_eq!(hsb_to_rgb(f32::NAN, 1.0, 1.0), Rgb8::new(255, 0, 0));
        assert_eq!(hsb_to_rgb(0.0, f32::NAN, 1.0), Rgb8::new(255, 255, 255));
    }

    #[test]
    fn channels_stay_in_range_across_the_wheel() {
        // Channels are u8, so the real check is that nothing panics and
        // the dominant channel equals brightness.
        let mut h = 0.0;
        while h < 360.0 {
            for (s, b) in [(0.0, 0.0), (0.5, 0.5), (1.0, 1.0), (0.3, 0.9)] {
                let c = hsb_to_rgb(h, s, b);
                let max = c.r.max(c.g).max(c.b);
                assert_eq!(max, (b * 255.0_f32).round() as u8, "h={h} s={s} b={b}");
            }
            h += 0.5;
        }
    }

    // ── Hsb ───────────────────────────────────────────────────────────────

    #[test]
    fn new_normalizes_components() {
        let c = Hsb::new(-30.0, 1.5, -0.2);
        assert_eq!(c, Hsb { h: 330.0, s: 1.0, b: 0.0 });
    }

    #[test]
    fn tiny_negative_hue_does_not_produce_360() {
        assert!(wrap_hue(-1e-7) < 360.0);
    }
}
