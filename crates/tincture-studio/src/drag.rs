use tincture_palette::prelude::*;

/// Pointer moves generated between press and release.
const STEPS: u32 = 8;

/// Replays a left-button drag along the spectrum band from `from` to `to`
/// (track pixels) and returns the resulting snapshot plus the stop that was
/// grabbed, if any.
pub fn replay(state: &PaletteState, style: &TrackStyle, from: f32, to: f32) -> (PaletteState, Option<usize>) {
    let mut controller = MarkerController::new(style.geometry());
    let y = style.spectrum_center_y();

    let mut events = vec![InputEvent::press(from, y)];
    events.extend((1..=STEPS).map(|i| {
        let t = i as f32 / STEPS as f32;
        InputEvent::moved(from + (to - from) * t, y)
    }));
    events.push(InputEvent::release(to, y));

    let mut state = state.clone();
    let mut grabbed = None;
    for ev in &events {
        if let Some(action) = controller.handle(ev, state.stops()) {
            state = state.apply(action);
        }
        grabbed = grabbed.or(controller.active_index());
    }

    match grabbed {
        Some(index) => log::info!("dragged stop {index} to x={to}"),
        None => log::warn!("no marker within reach of x={from}; drag ignored"),
    }
    (state, grabbed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_moves_nearest_marker() {
        // Default stops sit at x = 0, 200, 400 on a 600px track.
        let (state, grabbed) = replay(&PaletteState::default(), &TrackStyle::default(), 205.0, 450.0);
        assert_eq!(grabbed, Some(1));
        assert_eq!(state.stops().get(1).map(|s| s.hue), Some(270.0));
    }

    #[test]
    fn drag_far_from_markers_is_noop() {
        let before = PaletteState::default();
        let (after, grabbed) = replay(&before, &TrackStyle::default(), 300.0, 500.0);
        assert_eq!(grabbed, None);
        assert_eq!(after, before);
    }
}
