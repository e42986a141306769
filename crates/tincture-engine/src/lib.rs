//! Tincture engine crate.
//!
//! This crate owns the rendering-agnostic pieces used by the palette layer:
//! color conversion, gradient paint sources, a CPU RGBA raster with label
//! text, and platform-agnostic pointer input.

pub mod color;
pub mod coords;
pub mod input;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod text;
