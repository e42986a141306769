use super::Vec2;

/// Axis-aligned rectangle in pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

/// Integer pixel range `[x0, x1) × [y0, y1)` already clipped to a raster.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PixelSpan {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl PixelSpan {
    #[inline]
    pub fn is_empty(self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < max.x && p.y < max.y
    }

    /// Pixels whose centers fall inside the rect, clipped to `width × height`.
    ///
    /// A pixel `(x, y)` is covered when `x + 0.5` lies in `[min.x, max.x)`,
    /// so a rect on integer edges covers exactly the pixels it spans.
    pub fn pixel_span(self, width: u32, height: u32) -> PixelSpan {
        let max = self.max();
        let to_px = |v: f32, limit: u32| -> u32 {
            if v.is_nan() {
                0
            } else {
                (v - 0.5).ceil().clamp(0.0, limit as f32) as u32
            }
        };

        PixelSpan {
            x0: to_px(self.origin.x, width),
            y0: to_px(self.origin.y, height),
            x1: to_px(max.x, width),
            y1: to_px(max.y, height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
    }

    // ── pixel_span ────────────────────────────────────────────────────────

    #[test]
    fn integer_rect_covers_its_pixels() {
        let span = r(2.0, 3.0, 4.0, 5.0).pixel_span(100, 100);
        assert_eq!(span, PixelSpan { x0: 2, y0: 3, x1: 6, y1: 8 });
    }

    #[test]
    fn span_is_clipped_to_raster() {
        let span = r(-10.0, -10.0, 50.0, 50.0).pixel_span(20, 30);
        assert_eq!(span, PixelSpan { x0: 0, y0: 0, x1: 20, y1: 30 });
    }

    #[test]
    fn thin_rect_between_centers_is_empty() {
        // [1.6, 2.4) holds no pixel center (1.5 and 2.5 both fall outside).
        assert!(r(1.6, 0.0, 0.8, 4.0).pixel_span(10, 10).is_empty());
    }

    #[test]
    fn rect_outside_raster_is_empty() {
        assert!(r(50.0, 50.0, 5.0, 5.0).pixel_span(10, 10).is_empty());
    }
}
