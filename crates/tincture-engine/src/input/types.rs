/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Pointer move event in display pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Pointer button event.
///
/// Coordinates are included so a press can be hit-tested without relying on
/// an earlier move event having been delivered.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f32,
    pub y: f32,
}

impl PointerButtonEvent {
    #[inline]
    pub fn pressed(button: MouseButton, x: f32, y: f32) -> Self {
        Self { button, state: MouseButtonState::Pressed, x, y }
    }

    #[inline]
    pub fn released(button: MouseButton, x: f32, y: f32) -> Self {
        Self { button, state: MouseButtonState::Released, x, y }
    }
}

/// Platform-agnostic input events emitted by a front end.
///
/// Front ends deliver these for the whole window, not only for the widget
/// under the pointer, so drags that leave a widget still see their release.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),

    /// Pointer left the window surface.
    PointerLeft,

    /// Window focus change.
    Focused(bool),
}

impl InputEvent {
    #[inline]
    pub fn moved(x: f32, y: f32) -> Self {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    #[inline]
    pub fn press(x: f32, y: f32) -> Self {
        InputEvent::PointerButton(PointerButtonEvent::pressed(MouseButton::Left, x, y))
    }

    #[inline]
    pub fn release(x: f32, y: f32) -> Self {
        InputEvent::PointerButton(PointerButtonEvent::released(MouseButton::Left, x, y))
    }
}
