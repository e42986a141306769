//! Paint sources for filling rasters.
//!
//! Scope:
//! - linear and radial gradients with positioned 8-bit stops
//!
//! Geometry types remain in `coords`.

pub mod gradient;

pub use gradient::{GradientStop, LinearGradient, RadialGradient};

use crate::color::Rgba8;
use crate::coords::Vec2;

/// Paint source for filling geometry.
///
/// Renderers dispatch on the variant per pixel through [`Paint::shade`].
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl Paint {
    /// Color of the paint at pixel position `p`.
    #[inline]
    pub fn shade(&self, p: Vec2) -> Rgba8 {
        match self {
            Paint::Linear(g) => g.shade(p),
            Paint::Radial(g) => g.shade(p),
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        match self {
            Paint::Linear(g) => g.is_valid(),
            Paint::Radial(g) => g.is_valid(),
        }
    }
}
