//! CPU RGBA8 raster.
//!
//! A `Raster` is the finished output of every renderer in the workspace. Pixels
//! are straight-alpha, row-major, origin top-left. Sampling positions are pixel
//! centers (`x + 0.5, y + 0.5`) unless a renderer states otherwise.

mod draw;

use std::path::Path;

use thiserror::Error;

use crate::color::Rgba8;
use crate::coords::{Rect, Vec2};
use crate::paint::Paint;

/// Errors raised while exporting a raster.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("raster is empty ({width}x{height})")]
    Empty { width: u32, height: u32 },
    #[error("failed to encode raster: {0}")]
    Encode(#[from] image::ImageError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl Raster {
    /// Creates a fully transparent raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgba8::transparent())
    }

    pub fn filled(width: u32, height: u32, color: Rgba8) -> Self {
        let len = width as usize * height as usize;
        Self { width, height, pixels: vec![color; len] }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// Packed RGBA bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Pixel at `(x, y)`, or `None` outside the raster.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Overwrites a pixel. Writes outside the raster are dropped.
    #[inline]
    pub fn put(&mut self, x: u32, y: u32, color: Rgba8) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Composites `color` over the existing pixel.
    #[inline]
    pub fn blend(&mut self, x: u32, y: u32, color: Rgba8) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.over(self.pixels[i]);
        }
    }

    /// Mutable rows, top to bottom, for renderers that compute whole scanlines.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = (u32, &mut [Rgba8])> {
        let width = self.width.max(1) as usize;
        self.pixels
            .chunks_exact_mut(width)
            .enumerate()
            .map(|(y, row)| (y as u32, row))
    }

    /// Shades every pixel from `paint`, sampled at pixel positions produced by
    /// `position` (which lets callers pick centers or corners).
    pub fn fill_with(&mut self, paint: &Paint, position: impl Fn(u32, u32) -> Vec2) {
        for (y, row) in self.rows_mut() {
            for (x, px) in row.iter_mut().enumerate() {
                *px = paint.shade(position(x as u32, y));
            }
        }
    }

    /// Composites a solid color over every pixel whose center lies in `rect`.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        let span = rect.pixel_span(self.width, self.height);
        for y in span.y0..span.y1 {
            for x in span.x0..span.x1 {
                self.blend(x, y, color);
            }
        }
    }

    /// Writes the raster as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RasterError> {
        if self.pixels.is_empty() {
            return Err(RasterError::Empty { width: self.width, height: self.height });
        }
        image::save_buffer_with_format(
            path.as_ref(),
            self.as_bytes(),
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
            image::ImageFormat::Png,
        )?;
        log::debug!("wrote {}x{} png to {}", self.width, self.height, path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb8;
    use crate::paint::{GradientStop, LinearGradient};

    #[test]
    fn new_raster_is_transparent() {
        let r = Raster::new(3, 2);
        assert_eq!(r.pixels().len(), 6);
        assert!(r.pixels().iter().all(|p| *p == Rgba8::transparent()));
    }

    #[test]
    fn out_of_bounds_access_is_ignored() {
        let mut r = Raster::new(2, 2);
        r.put(5, 0, Rgba8::new(1, 1, 1, 255));
        assert_eq!(r.pixel(5, 0), None);
        assert!(r.pixels().iter().all(|p| p.a == 0));
    }

    #[test]
    fn rows_are_row_major() {
        let mut r = Raster::new(2, 3);
        for (y, row) in r.rows_mut() {
            row[1] = Rgba8::new(y as u8, 0, 0, 255);
        }
        assert_eq!(r.pixel(1, 2), Some(Rgba8::new(2, 0, 0, 255)));
        assert_eq!(r.as_bytes().len(), 24);
    }

    #[test]
    fn fill_rect_covers_only_the_rect() {
        let mut r = Raster::new(4, 4);
        r.fill_rect(Rect::new(1.0, 1.0, 2.0, 2.0), Rgba8::new(9, 9, 9, 255));
        assert_eq!(r.pixel(1, 1).map(|p| p.a), Some(255));
        assert_eq!(r.pixel(2, 2).map(|p| p.a), Some(255));
        assert_eq!(r.pixel(0, 0).map(|p| p.a), Some(0));
        assert_eq!(r.pixel(3, 3).map(|p| p.a), Some(0));
    }

    #[test]
    fn fill_with_uses_caller_positions() {
        let g = LinearGradient::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            vec![
                GradientStop::new(0.0, Rgb8::new(0, 0, 0)),
                GradientStop::new(1.0, Rgb8::new(255, 255, 255)),
            ],
        );
        let mut r = Raster::new(2, 1);
        r.fill_with(&Paint::Linear(g), |x, y| Vec2::new(x as f32, y as f32));
        assert_eq!(r.pixel(0, 0), Some(Rgba8::new(0, 0, 0, 255)));
        assert_eq!(r.pixel(1, 0), Some(Rgba8::new(255, 255, 255, 255)));
    }

    #[test]
    fn saving_empty_raster_fails() {
        let err = Raster::new(0, 0).save_png("unused.png").unwrap_err();
        assert!(matches!(err, RasterError::Empty { .. }));
    }
}
