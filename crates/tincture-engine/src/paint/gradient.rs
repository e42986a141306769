use crate::color::{Rgb8, Rgba8};
use crate::coords::Vec2;

/// A single gradient stop.
///
/// `t` is the stop position along the gradient parameter, expected in `[0, 1]`
/// and in ascending order across a stop slice.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientStop {
    pub t: f32,
    pub color: Rgb8,
}

impl GradientStop {
    #[inline]
    pub const fn new(t: f32, color: Rgb8) -> Self {
        Self { t, color }
    }
}

/// Samples a stop slice at parameter `t`.
///
/// Outside the first/last stop the edge color is held (pad spread). Between
/// stops the two neighbours are interpolated per channel. An empty slice
/// yields transparent black.
pub fn sample_stops(stops: &[GradientStop], t: f32) -> Rgba8 {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return Rgba8::transparent(),
    };

    let t = if t.is_finite() { t } else { 0.0 };
    if t <= first.t {
        return first.color.opaque();
    }
    if t >= last.t {
        return last.color.opaque();
    }

    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.t {
            let span = b.t - a.t;
            let local = if span > 0.0 { (t - a.t) / span } else { 1.0 };
            return Rgb8::lerp(a.color, b.color, local).opaque();
        }
    }

    last.color.opaque()
}

fn stops_are_valid(stops: &[GradientStop]) -> bool {
    stops.len() >= 2
        && stops.iter().all(|s| s.t.is_finite())
        && stops.windows(2).all(|w| w[0].t <= w[1].t)
}

/// Linear gradient in pixel space.
///
/// Semantics:
/// - `start` maps to `t = 0`, `end` to `t = 1`
/// - a point is projected onto the `start → end` axis
/// - outside `[0, 1]` the edge stops are held
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<GradientStop>) -> Self {
        Self { start, end, stops }
    }

    /// Gradient parameter at `p`. A degenerate axis (start == end) yields 0.
    #[inline]
    pub fn param_at(&self, p: Vec2) -> f32 {
        let axis = self.end - self.start;
        let len_sq = axis.dot(axis);
        if len_sq <= 0.0 {
            return 0.0;
        }
        (p - self.start).dot(axis) / len_sq
    }

    #[inline]
    pub fn shade(&self, p: Vec2) -> Rgba8 {
        sample_stops(&self.stops, self.param_at(p))
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && stops_are_valid(&self.stops)
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }
}

/// Radial gradient in pixel space: `t = distance(center, p) / radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f32,
    pub stops: Vec<GradientStop>,
}

impl RadialGradient {
    pub fn new(center: Vec2, radius: f32, stops: Vec<GradientStop>) -> Self {
        Self { center, radius, stops }
    }

    /// Gradient parameter at `p`. A zero radius yields 0 everywhere.
    #[inline]
    pub fn param_at(&self, p: Vec2) -> f32 {
        if self.radius <= 0.0 {
            return 0.0;
        }
        (p - self.center).length() / self.radius
    }

    #[inline]
    pub fn shade(&self, p: Vec2) -> Rgba8 {
        sample_stops(&self.stops, self.param_at(p))
    }

    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.radius.is_finite()
            && self.radius > 0.0
            && stops_are_valid(&self.stops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb8 = Rgb8::new(255, 0, 0);
    const BLUE: Rgb8 = Rgb8::new(0, 0, 255);

    fn two_stops() -> Vec<GradientStop> {
        vec![GradientStop::new(0.0, RED), GradientStop::new(1.0, BLUE)]
    }

    // ── sample_stops ──────────────────────────────────────────────────────

    #[test]
    fn pads_outside_range() {
        let stops = two_stops();
        assert_eq!(sample_stops(&stops, -1.0), RED.opaque());
        assert_eq!(sample_stops(&stops, 2.0), BLUE.opaque());
    }

    #[test]
    fn interpolates_inside_segment() {
        let stops = vec![
            GradientStop::new(0.0, RED),
            GradientStop::new(0.5, BLUE),
            GradientStop::new(1.0, RED),
        ];
        assert_eq!(sample_stops(&stops, 0.5), BLUE.opaque());
        assert_eq!(sample_stops(&stops, 0.75), Rgba8::new(128, 0, 128, 255));
    }

    #[test]
    fn empty_slice_is_transparent() {
        assert_eq!(sample_stops(&[], 0.3), Rgba8::transparent());
    }

    // ── LinearGradient ────────────────────────────────────────────────────

    #[test]
    fn diagonal_projection() {
        let g = LinearGradient::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0), two_stops());
        assert_eq!(g.param_at(Vec2::new(0.0, 0.0)), 0.0);
        assert_eq!(g.param_at(Vec2::new(10.0, 10.0)), 1.0);
        assert_eq!(g.param_at(Vec2::new(10.0, 0.0)), 0.5);
    }

    #[test]
    fn degenerate_axis_is_invalid() {
        let g = LinearGradient::new(Vec2::new(3.0, 3.0), Vec2::new(3.0, 3.0), two_stops());
        assert!(!g.is_valid());
        assert_eq!(g.param_at(Vec2::new(8.0, 1.0)), 0.0);
    }

    #[test]
    fn unsorted_stops_are_invalid() {
        let mut stops = two_stops();
        stops.reverse();
        let g = LinearGradient::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), stops);
        assert!(!g.is_valid());
    }

    // ── RadialGradient ────────────────────────────────────────────────────

    #[test]
    fn radial_center_and_edge() {
        let g = RadialGradient::new(Vec2::new(5.0, 5.0), 5.0, two_stops());
        assert_eq!(g.shade(Vec2::new(5.0, 5.0)), RED.opaque());
        assert_eq!(g.shade(Vec2::new(10.0, 5.0)), BLUE.opaque());
        assert_eq!(g.shade(Vec2::new(20.0, 20.0)), BLUE.opaque());
    }
}
