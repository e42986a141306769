//! Platform-agnostic pointer input.
//!
//! Front ends translate their native pointer events into [`InputEvent`] and
//! feed them to [`InputState`], which tracks the pointer position and held
//! buttons. Coordinates are in the front end's display pixels; consumers map
//! them into their own spaces.

mod state;
mod types;

pub use state::InputState;
pub use types::{
    InputEvent,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
