//! Linear and radial ramps built on the engine's gradient paints.
//!
//! Both are evaluated at integer pixel indices, not pixel centers: the first
//! and last pixels along the ramp land exactly on the end stops, which keeps
//! small previews faithful to the stop colors.

use tincture_engine::coords::Vec2;
use tincture_engine::paint::{LinearGradient, Paint, RadialGradient};
use tincture_engine::raster::Raster;

use super::ColorRamp;

#[inline]
fn pixel_index(x: u32, y: u32) -> Vec2 {
    Vec2::new(x as f32, y as f32)
}

/// Diagonal ramp from pixel `(0, 0)` to pixel `(size − 1, size − 1)`.
pub(super) fn render_linear(ramp: &ColorRamp, size: u32) -> Raster {
    let far = size.saturating_sub(1) as f32;
    let paint = Paint::Linear(LinearGradient::new(
        Vec2::splat(0.0),
        Vec2::splat(far),
        ramp.gradient_stops().to_vec(),
    ));
    fill(paint, size)
}

/// Ramp from the raster center (first stop) to the half-width (last stop).
/// Corners beyond the radius hold the last stop.
pub(super) fn render_radial(ramp: &ColorRamp, size: u32) -> Raster {
    let half = size.saturating_sub(1) as f32 * 0.5;
    let paint = Paint::Radial(RadialGradient::new(Vec2::splat(half), half, ramp.gradient_stops().to_vec()));
    fill(paint, size)
}

fn fill(paint: Paint, size: u32) -> Raster {
    if !paint.is_valid() {
        // Only a 1×1 raster collapses the ramp; it shows the first stop.
        log::trace!("degenerate {size}x{size} ramp, sampling t = 0");
    }
    let mut raster = Raster::new(size, size);
    raster.fill_with(&paint, pixel_index);
    raster
}
