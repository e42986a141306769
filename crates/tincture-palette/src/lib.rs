//! Palette construction and gradient preview on top of `tincture-engine`.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`stops`] | `ColorStop`, `StopList`, `GlobalOverride` |
//! | [`state`] | `PaletteState` snapshots and the `Action`s that produce them |
//! | [`marker`] | `MarkerController` drag state machine over the hue track |
//! | [`synth`] | `GradientMode` and the noise/linear/radial/angular synthesizer |
//! | [`track`] | Hue track renderer, with optional index labels |
//! | [`error`] | `PaletteError`, `SynthError` |
//!
//! # Quick start
//!
//! ```rust
//! use tincture_palette::prelude::*;
//!
//! let state = PaletteState::default()
//!     .apply(Action::SetStopCount(4))
//!     .apply(Action::SetMode(GradientMode::Radial))
//!     .apply(Action::SetSize(64));
//!
//! let preview = state.render().unwrap();
//! assert_eq!(preview.width(), 64);
//! assert_eq!(state.swatches()[0].hex, "#cc2929");
//! ```

pub mod error;
pub mod marker;
pub mod state;
pub mod stops;
pub mod synth;
pub mod track;

pub use error::{PaletteError, SynthError};
pub use state::{Action, PaletteState};

/// Everything a front end needs to drive a palette.
pub mod prelude {
    pub use crate::error::{PaletteError, SynthError};
    pub use crate::marker::{DragSession, MarkerController, TrackGeometry};
    pub use crate::state::{Action, PaletteState, Swatch};
    pub use crate::stops::{ColorStop, GlobalOverride, StopList};
    pub use crate::synth::{synthesize, GradientMode};
    pub use crate::track::{render_track, render_track_labeled, TrackStyle};

    pub use tincture_engine::color::{hsb_to_rgb, rgb_to_hex, Hsb, Rgb8, Rgba8};
    pub use tincture_engine::input::InputEvent;
    pub use tincture_engine::raster::Raster;
    pub use tincture_engine::text::LabelFont;
}
