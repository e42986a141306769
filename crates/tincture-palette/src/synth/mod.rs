//! Gradient synthesizer.
//!
//! Turns a resolved stop list into a square raster under one of four modes.
//! Every mode consumes at least two stops and treats consecutive indices as
//! interpolation neighbours; stops are never re-sorted by hue.

mod angular;
mod noise;
mod ramp;
mod sweep;

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use tincture_engine::color::Hsb;
use tincture_engine::raster::Raster;

use crate::error::{PaletteError, SynthError};

pub use angular::sector_at;
pub use noise::noise_field;
pub use ramp::ColorRamp;

/// Side length of the preview raster in the reference layout.
pub const DEFAULT_SIZE: u32 = 300;

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum GradientMode {
    #[default]
    Noise,
    Linear,
    Radial,
    Angular,
}

impl GradientMode {
    pub const ALL: [GradientMode; 4] = [
        GradientMode::Noise,
        GradientMode::Linear,
        GradientMode::Radial,
        GradientMode::Angular,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GradientMode::Noise => "noise",
            GradientMode::Linear => "linear",
            GradientMode::Radial => "radial",
            GradientMode::Angular => "angular",
        }
    }

    /// Parses an external mode tag, falling back to [`GradientMode::Noise`]
    /// for anything unrecognized.
    pub fn parse_or_default(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|err: PaletteError| {
            log::warn!("{err}; using {}", GradientMode::default());
            GradientMode::default()
        })
    }
}

impl fmt::Display for GradientMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradientMode {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        GradientMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| PaletteError::UnknownMode(tag.to_owned()))
    }
}

/// Renders `stops` as a `size × size` raster.
///
/// `stops` must already carry their effective saturation/brightness (see
/// [`GlobalOverride::resolve`](crate::stops::GlobalOverride::resolve)).
pub fn synthesize(stops: &[Hsb], mode: GradientMode, size: u32) -> Result<Raster, SynthError> {
    let ramp = ColorRamp::new(stops)?;
    let started = Instant::now();

    let raster = match mode {
        GradientMode::Noise => noise::render(&ramp, size),
        GradientMode::Linear => sweep::render_linear(&ramp, size),
        GradientMode::Radial => sweep::render_radial(&ramp, size),
        GradientMode::Angular => angular::render(&ramp, size),
    };

    log::debug!(
        "synthesized {mode} gradient: {size}x{size}, {} stops, {:?}",
        ramp.len(),
        started.elapsed()
    );
    Ok(raster)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── GradientMode ──────────────────────────────────────────────────────

    #[test]
    fn parses_known_tags_case_insensitively() {
        assert_eq!("linear".parse(), Ok(GradientMode::Linear));
        assert_eq!(" Radial ".parse(), Ok(GradientMode::Radial));
        assert_eq!("ANGULAR".parse(), Ok(GradientMode::Angular));
        assert_eq!("noise".parse(), Ok(GradientMode::Noise));
    }

    #[test]
    fn unknown_tag_is_an_error_but_defaults_to_noise() {
        assert_eq!(
            "conic".parse::<GradientMode>(),
            Err(PaletteError::UnknownMode("conic".into()))
        );
        assert_eq!(GradientMode::parse_or_default("conic"), GradientMode::Noise);
        assert_eq!(GradientMode::parse_or_default(""), GradientMode::Noise);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for mode in GradientMode::ALL {
            assert_eq!(mode.to_string().parse(), Ok(mode));
        }
    }

    // ── synthesize ────────────────────────────────────────────────────────

    #[test]
    fn rejects_fewer_than_two_stops() {
        let one = [Hsb::new(0.0, 1.0, 1.0)];
        for mode in GradientMode::ALL {
            assert_eq!(synthesize(&one, mode, 4), Err(SynthError::TooFewStops { count: 1 }));
        }
        assert_eq!(
            synthesize(&[], GradientMode::Linear, 4),
            Err(SynthError::TooFewStops { count: 0 })
        );
    }

    #[test]
    fn every_mode_produces_a_square_raster() {
        let stops = [Hsb::new(0.0, 1.0, 1.0), Hsb::new(180.0, 1.0, 1.0)];
        for mode in GradientMode::ALL {
            let r = synthesize(&stops, mode, 17).unwrap();
            assert_eq!((r.width(), r.height()), (17, 17));
        }
    }

    #[test]
    fn zero_size_yields_an_empty_raster() {
        let stops = [Hsb::new(0.0, 1.0, 1.0), Hsb::new(180.0, 1.0, 1.0)];
        let r = synthesize(&stops, GradientMode::Noise, 0).unwrap();
        assert!(r.pixels().is_empty());
    }
}
