use tincture_engine::color::{Hsb, Rgb8};
use tincture_engine::paint::gradient::{sample_stops, GradientStop};

use crate::error::SynthError;

/// Stops converted to RGB once, ready for per-pixel sampling.
///
/// `[0, 1]` is split into `N − 1` equal segments; segment `i` blends stop `i`
/// into stop `i + 1`. Sampling goes through the engine's
/// [`sample_stops`], the same interpolation the linear and radial paints use.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    colors: Vec<Rgb8>,
    stops: Vec<GradientStop>,
}

impl ColorRamp {
    pub fn new(stops: &[Hsb]) -> Result<Self, SynthError> {
        if stops.len() < 2 {
            return Err(SynthError::TooFewStops { count: stops.len() });
        }
        let colors: Vec<Rgb8> = stops.iter().map(|s| s.to_rgb()).collect();
        let last = (colors.len() - 1) as f32;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, c)| GradientStop::new(i as f32 / last, *c))
            .collect();
        Ok(Self { colors, stops })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn colors(&self) -> &[Rgb8] {
        &self.colors
    }

    /// Color at ramp position `t` (clamped to `[0, 1]`).
    #[inline]
    pub fn sample(&self, t: f32) -> Rgb8 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        sample_stops(&self.stops, t).rgb()
    }

    /// Stops placed at `index / (N − 1)` for the engine's gradient paints.
    #[inline]
    pub fn gradient_stops(&self) -> &[GradientStop] {
        &self.stops
    }
}
