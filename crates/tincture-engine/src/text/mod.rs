//! Small-label text drawing.
//!
//! A [`LabelFont`] wraps one parsed TrueType/OpenType face. Glyphs are
//! rasterized with `fontdue` on demand and composited straight into a
//! [`Raster`]; there is no glyph cache, since labels here are a few
//! characters per frame.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::color::Rgba8;
use crate::coords::Vec2;
use crate::raster::Raster;

/// Common locations of a sans-serif face on Linux desktops.
const SYSTEM_FONT_PATHS: [&str; 5] = [
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("failed to read font {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("font load error: {0}")]
    Parse(String),
}

/// A parsed font used for marker labels and captions.
#[derive(Clone)]
pub struct LabelFont {
    font: fontdue::Font,
}

impl fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelFont")
            .field("name", &self.font.name())
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl LabelFont {
    /// Parses a font from raw TrueType or OpenType bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError::Parse(e.to_string()))?;
        Ok(Self { font })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, FontLoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| FontLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes)
    }

    /// First usable face from the usual system locations, if any.
    pub fn system() -> Option<Self> {
        SYSTEM_FONT_PATHS.iter().find_map(|p| match Self::load(p) {
            Ok(font) => {
                log::debug!("using system font {p}");
                Some(font)
            }
            Err(FontLoadError::Io { .. }) => None,
            Err(err) => {
                log::warn!("{p}: {err}");
                None
            }
        })
    }

    /// Horizontal advance of `text` at `size` pixels.
    pub fn measure(&self, text: &str, size: f32) -> f32 {
        text.chars().map(|c| self.font.metrics(c, size).advance_width).sum()
    }
}

impl Raster {
    /// Draws `text` horizontally centred on `anchor.x` with its baseline at
    /// `anchor.y`. Glyph coverage scales the alpha of `color`.
    pub fn draw_text(&mut self, font: &LabelFont, text: &str, anchor: Vec2, size: f32, color: Rgba8) {
        if text.is_empty() || size <= 0.0 || !anchor.is_finite() {
            return;
        }

        let mut pen_x = anchor.x - font.measure(text, size) * 0.5;
        for ch in text.chars() {
            let (metrics, coverage) = font.font.rasterize(ch, size);
            let left = (pen_x + metrics.xmin as f32).round() as i64;
            let top = (anchor.y - (metrics.height as i32 + metrics.ymin) as f32).round() as i64;

            for (i, &cov) in coverage.iter().enumerate() {
                if cov == 0 {
                    continue;
                }
                let x = left + (i % metrics.width) as i64;
                let y = top + (i / metrics.width) as i64;
                if x < 0 || y < 0 {
                    continue;
                }
                let a = (color.a as u32 * cov as u32 + 127) / 255;
                self.blend(x as u32, y as u32, Rgba8::new(color.r, color.g, color.b, a as u8));
            }
            pen_x += metrics.advance_width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_rejected() {
        let err = LabelFont::from_bytes(&[0, 1, 2, 3]).unwrap_err();
        assert!(matches!(err, FontLoadError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = LabelFont::load("/nonexistent/tincture/font.ttf").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tincture/font.ttf"));
        assert!(matches!(err, FontLoadError::Io { .. }));
    }

    // Glyph checks need a real face; hosts without one skip them.

    #[test]
    fn digits_leave_ink_near_the_anchor() {
        let Some(font) = LabelFont::system() else { return };
        let mut r = Raster::new(40, 30);
        r.draw_text(&font, "7", Vec2::new(20.0, 20.0), 14.0, Rgba8::new(0, 0, 0, 255));

        let inked: Vec<(u32, u32)> = (0..30)
            .flat_map(|y| (0..40).map(move |x| (x, y)))
            .filter(|&(x, y)| r.pixel(x, y).is_some_and(|p| p.a > 0))
            .collect();
        assert!(!inked.is_empty());
        assert!(inked.iter().all(|&(x, y)| (10..30).contains(&x) && y <= 21));
    }

    #[test]
    fn empty_text_draws_nothing() {
        let Some(font) = LabelFont::system() else { return };
        let mut r = Raster::new(8, 8);
        r.draw_text(&font, "", Vec2::new(4.0, 6.0), 10.0, Rgba8::new(0, 0, 0, 255));
        assert_eq!(r, Raster::new(8, 8));
    }

    #[test]
    fn wider_text_measures_wider() {
        let Some(font) = LabelFont::system() else { return };
        assert!(font.measure("88", 10.0) > font.measure("8", 10.0));
    }
}
