//! Palette state snapshots.
//!
//! `PaletteState` is immutable. Every user action goes through
//! [`PaletteState::apply`] and produces a new snapshot, so the gradient
//! preview and the hue track always render from the same consistent state.

use tincture_engine::color::{Hsb, Rgb8};
use tincture_engine::raster::Raster;

use crate::error::SynthError;
use crate::stops::{GlobalOverride, StopList};
use crate::synth::{self, GradientMode, DEFAULT_SIZE};

/// Stop count of a freshly opened palette.
pub const DEFAULT_STOP_COUNT: usize = 3;

/// One user-level change to the palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Replaces the whole list with `n` evenly spaced stops (clamped to 2..=8).
    SetStopCount(usize),
    DistributeEvenly,
    SetStopHue { index: usize, hue: f32 },
    SetStopSaturation { index: usize, value: f32 },
    SetStopBrightness { index: usize, value: f32 },
    SetGlobalSaturation(f32),
    SetGlobalBrightness(f32),
    SetOverride(bool),
    SetMode(GradientMode),
    SetSize(u32),
}

/// What a swatch shows for one stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub index: usize,
    /// Hue rounded to whole degrees for display.
    pub hue_degrees: u16,
    pub rgb: Rgb8,
    pub hex: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaletteState {
    stops: StopList,
    global: GlobalOverride,
    mode: GradientMode,
    size: u32,
}

impl Default for PaletteState {
    fn default() -> Self {
        let global = GlobalOverride::default();
        Self {
            stops: StopList::regenerate(DEFAULT_STOP_COUNT, global.saturation, global.brightness),
            global,
            mode: GradientMode::default(),
            size: DEFAULT_SIZE,
        }
    }
}

#[inline]
fn unit(v: f32) -> f32 {
    if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
}

impl PaletteState {
    /// Starts from an explicit stop list with default settings otherwise.
    pub fn with_stops(stops: StopList) -> Self {
        Self { stops, ..Self::default() }
    }

    #[inline]
    pub fn stops(&self) -> &StopList {
        &self.stops
    }

    #[inline]
    pub fn global(&self) -> GlobalOverride {
        self.global
    }

    #[inline]
    pub fn mode(&self) -> GradientMode {
        self.mode
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the snapshot that results from `action`.
    pub fn apply(&self, action: Action) -> PaletteState {
        log::trace!("apply {action:?}");
        let mut next = self.clone();

        match action {
            Action::SetStopCount(n) => {
                next.stops = StopList::regenerate(n, self.global.saturation, self.global.brightness);
                log::debug!("palette reset to {} stops", next.stops.len());
            }
            Action::DistributeEvenly => next.stops = self.stops.distribute_evenly(),
            Action::SetStopHue { index, hue } => next.stops = self.stops.with_hue(index, hue),
            Action::SetStopSaturation { index, value } => {
                next.stops = self.stops.with_saturation(index, value);
            }
            Action::SetStopBrightness { index, value } => {
                next.stops = self.stops.with_brightness(index, value);
            }
            Action::SetGlobalSaturation(v) => next.global.saturation = unit(v),
            Action::SetGlobalBrightness(v) => next.global.brightness = unit(v),
            Action::SetOverride(enabled) => next.global.enabled = enabled,
            Action::SetMode(mode) => next.mode = mode,
            Action::SetSize(size) => next.size = size,
        }

        next
    }

    /// Applies a sequence of actions in order.
    pub fn apply_all(&self, actions: impl IntoIterator<Item = Action>) -> PaletteState {
        actions.into_iter().fold(self.clone(), |state, action| state.apply(action))
    }

    /// Effective color of every stop, override applied.
    pub fn resolved_stops(&self) -> Vec<Hsb> {
        self.stops.iter().map(|s| self.global.resolve(s)).collect()
    }

    pub fn swatches(&self) -> Vec<Swatch> {
        self.stops
            .iter()
            .enumerate()
            .map(|(index, stop)| {
                let rgb = self.global.resolve(stop).to_rgb();
                Swatch {
                    index,
                    hue_degrees: stop.hue.round() as u16,
                    rgb,
                    hex: rgb.to_hex(),
                }
            })
            .collect()
    }

    /// Renders the gradient preview for this snapshot.
    pub fn render(&self) -> Result<Raster, SynthError> {
        synth::synthesize(&self.resolved_stops(), self.mode, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── defaults ──────────────────────────────────────────────────────────

    #[test]
    fn default_matches_reference_layout() {
        let s = PaletteState::default();
        assert_eq!(s.stops().len(), 3);
        assert_eq!(s.mode(), GradientMode::Noise);
        assert_eq!(s.size(), 300);
        assert!(s.global().enabled);
        assert_eq!(s.global().saturation, 0.8);
    }

    // ── apply ─────────────────────────────────────────────────────────────

    #[test]
    fn apply_leaves_the_previous_snapshot_alone() {
        let before = PaletteState::default();
        let after = before.apply(Action::SetStopHue { index: 0, hue: 45.0 });
        assert_eq!(before.stops().get(0).map(|s| s.hue), Some(0.0));
        assert_eq!(after.stops().get(0).map(|s| s.hue), Some(45.0));
    }

    #[test]
    fn stop_count_change_is_a_hard_reset() {
        let s = PaletteState::default()
            .apply(Action::SetStopHue { index: 1, hue: 10.0 })
            .apply(Action::SetGlobalSaturation(0.3))
            .apply(Action::SetStopCount(4));
        let hues: Vec<f32> = s.stops().iter().map(|s| s.hue).collect();
        assert_eq!(hues, vec![0.0, 90.0, 180.0, 270.0]);
        assert!(s.stops().iter().all(|st| st.saturation == 0.3));
    }

    #[test]
    fn global_values_are_clamped() {
        let s = PaletteState::default()
            .apply(Action::SetGlobalSaturation(1.7))
            .apply(Action::SetGlobalBrightness(-2.0));
        assert_eq!(s.global().saturation, 1.0);
        assert_eq!(s.global().brightness, 0.0);
    }

    #[test]
    fn disabling_override_restores_per_stop_values() {
        let s = PaletteState::default()
            .apply(Action::SetStopSaturation { index: 0, value: 0.2 })
            .apply(Action::SetStopBrightness { index: 0, value: 0.4 });

        assert_eq!(s.resolved_stops()[0], Hsb::new(0.0, 0.8, 0.8));
        let off = s.apply(Action::SetOverride(false));
        assert_eq!(off.resolved_stops()[0], Hsb::new(0.0, 0.2, 0.4));
        let on = off.apply(Action::SetOverride(true));
        assert_eq!(on.resolved_stops()[0], Hsb::new(0.0, 0.8, 0.8));
    }

    // ── swatches ──────────────────────────────────────────────────────────

    #[test]
    fn swatches_report_effective_hex() {
        let s = PaletteState::default();
        let hex: Vec<String> = s.swatches().into_iter().map(|w| w.hex).collect();
        assert_eq!(hex, vec!["#cc2929", "#29cc29", "#2929cc"]);
    }

    #[test]
    fn swatch_hue_is_rounded() {
        let s = PaletteState::default().apply(Action::SetStopHue { index: 1, hue: 200.6 });
        assert_eq!(s.swatches()[1].hue_degrees, 201);
    }
}
