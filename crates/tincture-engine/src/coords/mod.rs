//! Coordinate and geometry types shared across rasters and the palette layer.
//!
//! Canonical CPU space:
//! - Pixels, origin top-left
//! - +X right, +Y down
//!
//! Angles measured in this space therefore run clockwise from +X.

mod rect;
mod vec2;

pub use rect::{PixelSpan, Rect};
pub use vec2::Vec2;
