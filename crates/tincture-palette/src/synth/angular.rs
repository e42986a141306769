use std::f32::consts::TAU;

use tincture_engine::color::Rgba8;
use tincture_engine::coords::Vec2;
use tincture_engine::raster::Raster;

use super::ColorRamp;

/// Sector of an `n`-way split that contains `angle` (radians, clockwise from
/// +X in y-down space). Sector `i` spans `[i·2π/n, (i+1)·2π/n)`.
pub fn sector_at(angle: f32, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let angle = if angle.is_finite() { angle.rem_euclid(TAU) } else { 0.0 };
    let step = TAU / n as f32;
    ((angle / step).floor() as usize).min(n - 1)
}

/// Flat pie wedges, one per stop, inside the disc inscribed in the raster.
/// Pixels outside the disc stay transparent.
pub(super) fn render(ramp: &ColorRamp, size: u32) -> Raster {
    let colors: Vec<Rgba8> = ramp.colors().iter().map(|c| c.opaque()).collect();
    let radius = size as f32 * 0.5;
    let center = Vec2::splat(radius);

    let mut raster = Raster::new(size, size);
    for (y, row) in raster.rows_mut() {
        for (x, px) in row.iter_mut().enumerate() {
            let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
            if d.length() <= radius {
                *px = colors[sector_at(d.angle(), colors.len())];
            }
        }
    }
    raster
}
