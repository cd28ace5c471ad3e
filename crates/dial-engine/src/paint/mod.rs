//! Paint model shared between UI and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid, linear and radial gradients)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{LinearGradient, RadialGradient};

/// Paint source for filling or stroking geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
    RadialGradient(RadialGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Paint::Solid(c) => c.a >= 1.0,
            Paint::LinearGradient(g) => g.from.a >= 1.0 && g.to.a >= 1.0,
            Paint::RadialGradient(g) => g.from.a >= 1.0 && g.to.a >= 1.0,
        }
    }
}

impl From<Color> for Paint {
    #[inline]
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

impl From<LinearGradient> for Paint {
    #[inline]
    fn from(g: LinearGradient) -> Self {
        Paint::LinearGradient(g)
    }
}

impl From<RadialGradient> for Paint {
    #[inline]
    fn from(g: RadialGradient) -> Self {
        Paint::RadialGradient(g)
    }
}
