//! Color stops and the ordered stop list.
//!
//! Hue convention: half-open `[0, 360)` everywhere. A hue of 360 is stored
//! as 0, whether it comes from a constructor or from a marker drag.

use std::sync::Arc;

use tincture_engine::color::Hsb;

use crate::error::PaletteError;

pub const MIN_STOPS: usize = 2;
pub const MAX_STOPS: usize = 8;

/// One control point of the palette.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
}

impl ColorStop {
    /// Hue wrapped modulo 360, saturation/brightness clamped to `[0, 1]`.
    pub fn new(hue: f32, saturation: f32, brightness: f32) -> Self {
        Hsb::new(hue, saturation, brightness).into()
    }

    #[inline]
    pub fn hsb(self) -> Hsb {
        Hsb { h: self.hue, s: self.saturation, b: self.brightness }
    }
}

impl From<Hsb> for ColorStop {
    #[inline]
    fn from(c: Hsb) -> Self {
        Self { hue: c.h, saturation: c.s, brightness: c.b }
    }
}

/// Global saturation/brightness applied on top of every stop.
///
/// Overriding never writes into the stops: turning `enabled` off makes each
/// stop's own values visible again.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlobalOverride {
    pub enabled: bool,
    pub saturation: f32,
    pub brightness: f32,
}

impl Default for GlobalOverride {
    fn default() -> Self {
        Self { enabled: true, saturation: 0.8, brightness: 0.8 }
    }
}

impl GlobalOverride {
    /// Effective color of `stop` for rendering and swatches.
    #[inline]
    pub fn resolve(&self, stop: ColorStop) -> Hsb {
        if self.enabled {
            stop.hsb().with_sb(self.saturation, self.brightness)
        } else {
            stop.hsb()
        }
    }
}

/// Evenly spaced hue for slot `index` of `count`.
#[inline]
fn even_hue(index: usize, count: usize) -> f32 {
    (360.0 / count as f32) * index as f32
}

/// Ordered, immutable list of 2..=8 stops.
///
/// Every edit returns a new list; clones share storage, so a renderer holding
/// an older snapshot never observes a half-applied update.
#[derive(Debug, Clone, PartialEq)]
pub struct StopList {
    stops: Arc<[ColorStop]>,
}

impl StopList {
    /// Fresh list of `count` stops with evenly spaced hues.
    ///
    /// `count` is clamped into `[MIN_STOPS, MAX_STOPS]`; changing the count is a
    /// hard reset, so no previous per-stop values survive.
    pub fn regenerate(count: usize, saturation: f32, brightness: f32) -> Self {
        let count = count.clamp(MIN_STOPS, MAX_STOPS);
        let stops = (0..count)
            .map(|i| ColorStop::new(even_hue(i, count), saturation, brightness))
            .collect();
        Self { stops }
    }

    /// Wraps caller-provided stops, rejecting lists outside 2..=8.
    pub fn from_stops(stops: impl IntoIterator<Item = ColorStop>) -> Result<Self, PaletteError> {
        let stops: Vec<ColorStop> = stops
            .into_iter()
            .map(|s| ColorStop::new(s.hue, s.saturation, s.brightness))
            .collect();
        if !(MIN_STOPS..=MAX_STOPS).contains(&stops.len()) {
            return Err(PaletteError::InvalidStopCount {
                count: stops.len(),
                min: MIN_STOPS,
                max: MAX_STOPS,
            });
        }
        Ok(Self { stops: stops.into() })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<ColorStop> {
        self.stops.get(index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[ColorStop] {
        &self.stops
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = ColorStop> + '_ {
        self.stops.iter().copied()
    }

    /// Re-spaces hues by index, keeping saturation/brightness and length.
    pub fn distribute_evenly(&self) -> Self {
        let count = self.len();
        let stops = self
            .iter()
            .enumerate()
            .map(|(i, s)| ColorStop { hue: even_hue(i, count), ..s })
            .collect();
        Self { stops }
    }

    /// Sets the hue of one stop.
    ///
    /// The hue is clamped to `[0, 360]` (the marker track's extent) and then
    /// wrapped, so 360 lands on 0.
    pub fn with_hue(&self, index: usize, hue: f32) -> Self {
        let hue = if hue.is_nan() { 0.0 } else { hue.clamp(0.0, 360.0) };
        self.edit(index, |s| ColorStop::new(hue, s.saturation, s.brightness))
    }

    pub fn with_saturation(&self, index: usize, saturation: f32) -> Self {
        self.edit(index, |s| ColorStop::new(s.hue, saturation, s.brightness))
    }

    pub fn with_brightness(&self, index: usize, brightness: f32) -> Self {
        self.edit(index, |s| ColorStop::new(s.hue, s.saturation, brightness))
    }

    fn edit(&self, index: usize, f: impl FnOnce(ColorStop) -> ColorStop) -> Self {
        let Some(current) = self.get(index) else {
            log::debug!("ignoring edit of stop {index}; list has {} stops", self.len());
            return self.clone();
        };
        let mut stops = self.stops.to_vec();
        stops[index] = f(current);
        Self { stops: stops.into() }
    }
}
