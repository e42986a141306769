//! Hue track renderer: spectrum strip plus one triangular marker per stop,
//! optionally labelled with its 1-based index.

use tincture_engine::color::{hsb_to_rgb, Rgb8, Rgba8};
use tincture_engine::coords::{Rect, Vec2};
use tincture_engine::raster::Raster;
use tincture_engine::text::LabelFont;

use crate::marker::{marker_x, TrackGeometry};
use crate::state::PaletteState;

/// Visual parameters of the hue track.
///
/// # Example
/// ```rust
/// use tincture_palette::track::TrackStyle;
///
/// let style = TrackStyle::new().size(300, 40).spectrum(4.0, 20.0);
/// assert_eq!(style.geometry().width, 300.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TrackStyle {
    width: u32,
    height: u32,
    background: Rgba8,
    spectrum_y: f32,
    spectrum_height: f32,
    border_color: Rgba8,
    border_width: f32,
    /// Gap between the spectrum's bottom edge and a marker's apex.
    marker_gap: f32,
    marker_width: f32,
    marker_height: f32,
    stroke: Rgba8,
    stroke_width: f32,
    active_stroke: Rgba8,
    active_stroke_width: f32,
    label_size: f32,
    /// Label baseline distance above the marker's base.
    label_lift: f32,
}

impl Default for TrackStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackStyle {
    pub fn new() -> Self {
        Self {
            width: 600,
            height: 80,
            background: Rgb8::new(0xf8, 0xf9, 0xfa).opaque(),
            spectrum_y: 10.0,
            spectrum_height: 40.0,
            border_color: Rgb8::new(0xde, 0xe2, 0xe6).opaque(),
            border_width: 1.0,
            marker_gap: 2.0,
            marker_width: 10.0,
            marker_height: 15.0,
            stroke: Rgba8::with_opacity(Rgb8::new(0, 0, 0), 0.3),
            stroke_width: 1.0,
            active_stroke: Rgb8::new(0x3b, 0x82, 0xf6).opaque(),
            active_stroke_width: 2.0,
            label_size: 10.0,
            label_lift: 4.0,
        }
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
    pub fn background(mut self, v: Rgba8) -> Self { self.background = v; self }
    pub fn spectrum(mut self, y: f32, height: f32) -> Self {
        self.spectrum_y = y;
        self.spectrum_height = height;
        self
    }
    pub fn border(mut self, color: Rgba8, width: f32) -> Self {
        self.border_color = color;
        self.border_width = width;
        self
    }
    pub fn marker_size(mut self, width: f32, height: f32) -> Self {
        self.marker_width = width;
        self.marker_height = height;
        self
    }
    pub fn marker_gap(mut self, v: f32) -> Self { self.marker_gap = v; self }
    pub fn stroke(mut self, color: Rgba8, width: f32) -> Self {
        self.stroke = color;
        self.stroke_width = width;
        self
    }
    pub fn active_stroke(mut self, color: Rgba8, width: f32) -> Self {
        self.active_stroke = color;
        self.active_stroke_width = width;
        self
    }

    pub fn label(mut self, size: f32, lift: f32) -> Self {
        self.label_size = size;
        self.label_lift = lift;
        self
    }

    /// Geometry for a [`MarkerController`](crate::marker::MarkerController)
    /// driving a track drawn with this style at its natural size.
    pub fn geometry(&self) -> TrackGeometry {
        TrackGeometry::unscaled(self.width as f32, self.height as f32)
    }

    /// Vertical middle of the spectrum band, where markers are grabbed.
    #[inline]
    pub fn spectrum_center_y(&self) -> f32 {
        self.spectrum_y + self.spectrum_height * 0.5
    }

    /// Marker triangle for a hue: apex on the spectrum, base below it.
    pub fn marker_points(&self, hue: f32) -> [Vec2; 3] {
        let x = marker_x(hue, self.width as f32);
        let top = self.spectrum_y + self.spectrum_height + self.marker_gap;
        let half = self.marker_width * 0.5;
        [
            Vec2::new(x, top),
            Vec2::new(x - half, top + self.marker_height),
            Vec2::new(x + half, top + self.marker_height),
        ]
    }
}

/// Label ink for a marker whose effective brightness is `brightness`:
/// dark on light fills, light on dark ones.
pub fn label_color(brightness: f32) -> Rgba8 {
    if brightness > 0.5 {
        Rgba8::with_opacity(Rgb8::new(0, 0, 0), 0.7)
    } else {
        Rgba8::with_opacity(Rgb8::new(255, 255, 255), 0.9)
    }
}

/// [`render_track`] plus each marker's 1-based index drawn inside it.
pub fn render_track_labeled(
    state: &PaletteState,
    active: Option<usize>,
    style: &TrackStyle,
    font: &LabelFont,
) -> Raster {
    let mut raster = render_track(state, active, style);
    for (index, color) in state.resolved_stops().into_iter().enumerate() {
        let [apex, _, right] = style.marker_points(color.h);
        let baseline = Vec2::new(apex.x, right.y - style.label_lift);
        raster.draw_text(font, &(index + 1).to_string(), baseline, style.label_size, label_color(color.b));
    }
    raster
}

/// Draws the track for `state`, highlighting the marker at `active`.
pub fn render_track(state: &PaletteState, active: Option<usize>, style: &TrackStyle) -> Raster {
    let mut raster = Raster::filled(style.width, style.height, style.background);
    let width = style.width as f32;

    for x in 0..style.width {
        let hue = (x as f32 / width) * 360.0;
        let column = Rect::new(x as f32, style.spectrum_y, 1.0, style.spectrum_height);
        raster.fill_rect(column, hsb_to_rgb(hue, 1.0, 1.0).opaque());
    }

    let strip = Rect::new(0.0, style.spectrum_y, width, style.spectrum_height);
    raster.stroke_rect(strip, style.border_width, style.border_color);

    let global = state.global();
    for (index, stop) in state.stops().iter().enumerate() {
        let [apex, left, right] = style.marker_points(stop.hue);
        let fill = global.resolve(stop).to_rgb().opaque();
        raster.fill_triangle(apex, left, right, fill);

        let (stroke, stroke_width) = if active == Some(index) {
            (style.active_stroke, style.active_stroke_width)
        } else {
            (style.stroke, style.stroke_width)
        };
        raster.stroke_polygon(&[apex, left, right], stroke_width, stroke);
    }

    raster
}
