//! Color model shared between the synthesizer and renderers.
//!
//! Scope:
//! - hue/saturation/brightness (`Hsb`) as the editing space
//! - 8-bit sRGB (`Rgb8`) as the display space, with `#rrggbb` formatting
//! - straight-alpha pixels (`Rgba8`) stored in rasters
//!
//! No color management happens here; channels are treated as display values.

mod hsb;
mod rgb;

pub use hsb::{hsb_to_rgb, Hsb};
pub use rgb::{rgb_to_hex, Rgb8, Rgba8};
