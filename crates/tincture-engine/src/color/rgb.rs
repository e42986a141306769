use std::fmt;

use bytemuck::{Pod, Zeroable};

/// Opaque 8-bit sRGB color.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-channel linear interpolation, `t` clamped to `[0, 1]`.
    ///
    /// `t == 0` returns `a` and `t == 1` returns `b` exactly; intermediate
    /// channels are rounded to nearest.
    #[inline]
    pub fn lerp(a: Rgb8, b: Rgb8, t: f32) -> Rgb8 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let mix = |x: u8, y: u8| -> u8 {
            let x = x as f32;
            (x + t * (y as f32 - x)).round().clamp(0.0, 255.0) as u8
        };
        Rgb8::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
    }

    /// `#rrggbb`, lowercase.
    #[inline]
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    #[inline]
    pub const fn opaque(self) -> Rgba8 {
        Rgba8::new(self.r, self.g, self.b, 255)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Formats three channels as a 7-character `#rrggbb` string.
#[inline]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    Rgb8::new(r, g, b).to_hex()
}

/// Straight-alpha RGBA pixel as stored in a [`Raster`](crate::raster::Raster).
///
/// `#[repr(C)]` + `Pod` so a pixel slice can be reinterpreted as the tightly
/// packed RGBA byte stream image encoders expect.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Builds a pixel from a color and a fractional opacity in `[0, 1]`.
    #[inline]
    pub fn with_opacity(color: Rgb8, opacity: f32) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(color.r, color.g, color.b, a)
    }

    #[inline]
    pub const fn rgb(self) -> Rgb8 {
        Rgb8::new(self.r, self.g, self.b)
    }

    /// Source-over compositing of `self` onto `dst`.
    pub fn over(self, dst: Rgba8) -> Rgba8 {
        match self.a {
            255 => return self,
            0 => return dst,
            _ => {}
        }

        let sa = self.a as f32 / 255.0;
        let da = dst.a as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return Rgba8::transparent();
        }

        let mix = |s: u8, d: u8| -> u8 {
            let c = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
            c.round().clamp(0.0, 255.0) as u8
        };

        Rgba8::new(
            mix(self.r, dst.r),
            mix(self.g, dst.g),
            mix(self.b, dst.b),
            (out_a * 255.0).round() as u8,
        )
    }
}

impl From<Rgb8> for Rgba8 {
    #[inline]
    fn from(c: Rgb8) -> Self {
        c.opaque()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── hex ───────────────────────────────────────────────────────────────

    #[test]
    fn hex_pads_and_lowercases() {
        assert_eq!(rgb_to_hex(255, 0, 0), "#ff0000");
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
        assert_eq!(rgb_to_hex(10, 171, 205), "#0aabcd");
    }

    #[test]
    fn hex_is_seven_chars() {
        assert_eq!(Rgb8::new(1, 2, 3).to_hex().len(), 7);
    }

    // ── lerp ──────────────────────────────────────────────────────────────

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = Rgb8::new(204, 41, 41);
        let b = Rgb8::new(41, 41, 204);
        assert_eq!(Rgb8::lerp(a, b, 0.0), a);
        assert_eq!(Rgb8::lerp(a, b, 1.0), b);
    }

    #[test]
    fn lerp_midpoint_rounds() {
        let m = Rgb8::lerp(Rgb8::new(0, 0, 0), Rgb8::new(255, 1, 10), 0.5);
        assert_eq!(m, Rgb8::new(128, 1, 5));
    }

    #[test]
    fn lerp_clamps_t() {
        let a = Rgb8::new(10, 20, 30);
        let b = Rgb8::new(40, 50, 60);
        assert_eq!(Rgb8::lerp(a, b, -3.0), a);
        assert_eq!(Rgb8::lerp(a, b, 7.0), b);
    }

    // ── compositing ───────────────────────────────────────────────────────

    #[test]
    fn opaque_source_replaces_destination() {
        let src = Rgba8::new(1, 2, 3, 255);
        assert_eq!(src.over(Rgba8::new(200, 200, 200, 255)), src);
    }

    #[test]
    fn transparent_source_keeps_destination() {
        let dst = Rgba8::new(9, 8, 7, 255);
        assert_eq!(Rgba8::transparent().over(dst), dst);
    }

    #[test]
    fn translucent_black_darkens_opaque_white() {
        let src = Rgba8::with_opacity(Rgb8::new(0, 0, 0), 0.3);
        let out = src.over(Rgba8::new(255, 255, 255, 255));
        assert_eq!(out.a, 255);
        assert_eq!(out.r, 178);
        assert_eq!(out.r, out.g);
        assert_eq!(out.g, out.b);
    }

    #[test]
    fn pixels_cast_to_packed_bytes() {
        let px = [Rgba8::new(1, 2, 3, 4), Rgba8::new(5, 6, 7, 8)];
        let bytes: &[u8] = bytemuck::cast_slice(&px);
        assert_eq!(bytes, &[1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
