//! Aliased vector primitives. Coverage is decided per pixel center.

use crate::color::Rgba8;
use crate::coords::{Rect, Vec2};

use super::Raster;

#[inline]
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.dot(ab);
    let t = if len_sq > 0.0 { ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0) } else { 0.0 };
    (p - (a + ab * t)).length()
}

fn bounds(points: &[Vec2], pad: f32) -> Rect {
    let (mut min, mut max) = (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY));
    for p in points {
        min = Vec2::new(min.x.min(p.x), min.y.min(p.y));
        max = Vec2::new(max.x.max(p.x), max.y.max(p.y));
    }
    Rect::new(min.x - pad, min.y - pad, max.x - min.x + 2.0 * pad, max.y - min.y + 2.0 * pad)
}

impl Raster {
    /// Strokes the outline of `rect` with a band of `width` pixels drawn
    /// inside the rect.
    pub fn stroke_rect(&mut self, rect: Rect, width: f32, color: Rgba8) {
        if rect.is_empty() || width <= 0.0 {
            return;
        }
        let w = width.min(rect.size.x * 0.5).min(rect.size.y * 0.5);
        let Rect { origin: o, size: s } = rect;

        self.fill_rect(Rect::new(o.x, o.y, s.x, w), color);
        self.fill_rect(Rect::new(o.x, o.y + s.y - w, s.x, w), color);
        self.fill_rect(Rect::new(o.x, o.y + w, w, s.y - 2.0 * w), color);
        self.fill_rect(Rect::new(o.x + s.x - w, o.y + w, w, s.y - 2.0 * w), color);
    }

    /// Fills a triangle regardless of winding order.
    pub fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgba8) {
        let area = edge(a, b, c);
        if area == 0.0 || !area.is_finite() {
            return;
        }

        let span = bounds(&[a, b, c], 0.0).pixel_span(self.width, self.height);
        for y in span.y0..span.y1 {
            for x in span.x0..span.x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let (w0, w1, w2) = (edge(b, c, p), edge(c, a, p), edge(a, b, p));
                let inside = if area > 0.0 {
                    w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
                } else {
                    w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
                };
                if inside {
                    self.blend(x, y, color);
                }
            }
        }
    }

    /// Strokes a closed polyline; each pixel is blended at most once so
    /// translucent strokes do not darken at the joins.
    pub fn stroke_polygon(&mut self, points: &[Vec2], width: f32, color: Rgba8) {
        if points.len() < 2 || width <= 0.0 {
            return;
        }
        let half = width * 0.5;

        let span = bounds(points, half).pixel_span(self.width, self.height);
        for y in span.y0..span.y1 {
            for x in span.x0..span.x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let hit = (0..points.len()).any(|i| {
                    let a = points[i];
                    let b = points[(i + 1) % points.len()];
                    distance_to_segment(p, a, b) <= half
                });
                if hit {
                    self.blend(x, y, color);
                }
            }
        }
    }
}
