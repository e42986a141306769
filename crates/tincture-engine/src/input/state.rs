use std::collections::HashSet;

use super::types::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent};

/// Current pointer state for a single window.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in display pixels. `None` once the pointer leaves.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies an input event to the current state.
    ///
    /// Returns `true` when the event changed the held-button set (a real
    /// press or release, not a duplicate).
    pub fn apply_event(&mut self, ev: &InputEvent) -> bool {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f && !self.buttons_down.is_empty() {
                    // Release events are not delivered while unfocused;
                    // forget held buttons so nothing stays stuck.
                    self.buttons_down.clear();
                    return true;
                }
                false
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
                false
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
                false
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }) => {
                self.pointer_pos = Some((*x, *y));
                match state {
                    MouseButtonState::Pressed => self.buttons_down.insert(*button),
                    MouseButtonState::Released => self.buttons_down.remove(button),
                }
            }
        }
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}
