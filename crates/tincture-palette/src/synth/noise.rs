//! Layered trigonometric "noise" field.
//!
//! Not a true noise function: three octaves of a smooth sine/cosine wave are
//! summed, which gives soft, deterministic marbling that is identical on
//! every render.

use tincture_engine::raster::Raster;

use super::ColorRamp;

/// Base angular frequency of the wave.
const FREQUENCY: f64 = 0.01;
/// Pixel-to-domain scale.
const NOISE_SCALE: f64 = 0.05;

/// (frequency multiplier, weight) per octave.
const OCTAVES: [(f64, f64); 3] = [(1.0, 1.0), (2.0, 0.5), (4.0, 0.25)];

#[inline]
fn wave(nx: f64, ny: f64) -> f64 {
    (nx * FREQUENCY).sin() * (ny * FREQUENCY).cos() + ((nx + ny) * FREQUENCY * 1.5).sin() * 0.5
}

/// Ramp position in `[0, 1]` for pixel `(x, y)`.
pub fn noise_field(x: u32, y: u32) -> f32 {
    let nx = x as f64 * NOISE_SCALE;
    let ny = y as f64 * NOISE_SCALE;

    let sum: f64 = OCTAVES
        .iter()
        .map(|(mul, weight)| wave(nx * mul, ny * mul) * weight)
        .sum();

    (sum * 0.35 + 0.5).clamp(0.0, 1.0) as f32
}

pub(super) fn render(ramp: &ColorRamp, size: u32) -> Raster {
    let mut raster = Raster::new(size, size);
    for (y, row) in raster.rows_mut() {
        for (x, px) in row.iter_mut().enumerate() {
            *px = ramp.sample(noise_field(x as u32, y)).opaque();
        }
    }
    raster
}
