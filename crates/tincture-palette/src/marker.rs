//! Hue-marker dragging.
//!
//! A single-pointer state machine: `Idle → Tracking → Idle`. A press on the
//! track picks the nearest marker within [`DEFAULT_TOLERANCE`] track pixels;
//! every move while tracking sets that stop's hue; a release (or focus loss)
//! ends the session.
//!
//! The controller expects to see window-wide pointer events, so releases that
//! happen off the track still end the drag.

use tincture_engine::coords::{Rect, Vec2};
use tincture_engine::input::{InputEvent, InputState, MouseButton, MouseButtonState, PointerButtonEvent};

use crate::state::Action;
use crate::stops::StopList;

/// Maximum distance, in track pixels, between a press and a marker.
pub const DEFAULT_TOLERANCE: f32 = 20.0;

/// X position of a hue on a track `track_width` pixels wide.
#[inline]
pub fn marker_x(hue: f32, track_width: f32) -> f32 {
    (hue / 360.0) * track_width
}

/// Placement of the hue track.
///
/// `width` is the track's own pixel width (what markers are laid out in).
/// `bounds` is where the track is shown in pointer coordinates; when the two
/// widths differ, pointer positions are rescaled into track pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TrackGeometry {
    pub width: f32,
    pub bounds: Rect,
}

impl Default for TrackGeometry {
    fn default() -> Self {
        Self::unscaled(600.0, 80.0)
    }
}

impl TrackGeometry {
    /// Track drawn at the origin at its natural size.
    pub const fn unscaled(width: f32, height: f32) -> Self {
        Self { width, bounds: Rect::new(0.0, 0.0, width, height) }
    }

    pub fn bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Converts a pointer x coordinate into track pixels.
    #[inline]
    pub fn to_track_x(&self, x: f32) -> f32 {
        let shown = self.bounds.size.x;
        let scale = if shown > 0.0 { self.width / shown } else { 1.0 };
        (x - self.bounds.origin.x) * scale
    }

    /// Hue under a pointer x coordinate, clamped to `[0, 360]`.
    #[inline]
    pub fn hue_at(&self, x: f32) -> f32 {
        if self.width <= 0.0 {
            return 0.0;
        }
        ((self.to_track_x(x) / self.width) * 360.0).clamp(0.0, 360.0)
    }
}

/// Index of the marker nearest to `track_x`, if any lies strictly within
/// `tolerance`. Ties go to the lower index.
pub fn select_marker(stops: &StopList, track_x: f32, track_width: f32, tolerance: f32) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, stop) in stops.iter().enumerate() {
        let distance = (track_x - marker_x(stop.hue, track_width)).abs();
        if distance >= tolerance {
            continue;
        }
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}

/// An in-progress marker drag.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DragSession {
    pub index: usize,
}

#[derive(Debug, Clone)]
pub struct MarkerController {
    geometry: TrackGeometry,
    tolerance: f32,
    input: InputState,
    session: Option<DragSession>,
}

impl Default for MarkerController {
    fn default() -> Self {
        Self::new(TrackGeometry::default())
    }
}

impl MarkerController {
    pub fn new(geometry: TrackGeometry) -> Self {
        Self {
            geometry,
            tolerance: DEFAULT_TOLERANCE,
            input: InputState::default(),
            session: None,
        }
    }

    pub fn tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[inline]
    pub fn geometry(&self) -> TrackGeometry {
        self.geometry
    }

    /// Moves or rescales the track, e.g. after a layout change.
    pub fn set_geometry(&mut self, geometry: TrackGeometry) {
        self.geometry = geometry;
    }

    #[inline]
    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    /// Stop to highlight as the actively dragged marker.
    #[inline]
    pub fn active_index(&self) -> Option<usize> {
        self.session.map(|s| s.index)
    }

    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    /// Feeds one pointer event. Returns the state change it causes, if any.
    ///
    /// `stops` is the snapshot currently on screen; it is only read on press,
    /// to hit-test markers.
    pub fn handle(&mut self, ev: &InputEvent, stops: &StopList) -> Option<Action> {
        self.input.apply_event(ev);

        match ev {
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state,
                x,
                y,
            }) => match state {
                MouseButtonState::Pressed => {
                    self.begin(Vec2::new(*x, *y), stops);
                    None
                }
                MouseButtonState::Released => {
                    self.end("released");
                    None
                }
            },

            InputEvent::PointerMoved(m) => {
                let session = self.session?;
                if !self.input.button_down(MouseButton::Left) {
                    // The release never reached us; do not keep dragging.
                    self.end("button no longer held");
                    return None;
                }
                let hue = self.geometry.hue_at(m.x);
                log::trace!("drag stop {} to hue {hue:.1}", session.index);
                Some(Action::SetStopHue { index: session.index, hue })
            }

            InputEvent::Focused(false) => {
                self.end("focus lost");
                None
            }

            InputEvent::PointerButton(_) | InputEvent::PointerLeft | InputEvent::Focused(true) => None,
        }
    }

    fn begin(&mut self, pos: Vec2, stops: &StopList) {
        if self.session.is_some() || !self.geometry.bounds.contains(pos) {
            return;
        }
        let track_x = self.geometry.to_track_x(pos.x);
        self.session = select_marker(stops, track_x, self.geometry.width, self.tolerance)
            .map(|index| DragSession { index });

        match self.session {
            Some(s) => log::debug!("drag started on stop {} at track x {track_x:.1}", s.index),
            None => log::trace!("press at track x {track_x:.1} missed every marker"),
        }
    }

    fn end(&mut self, reason: &str) {
        if let Some(s) = self.session.take() {
            log::debug!("drag of stop {} ended: {reason}", s.index);
        }
    }
}
