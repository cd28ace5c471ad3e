use crate::coords::Vec2;

use super::Color;

/// Two-color linear gradient in logical pixel space.
///
/// `t` is the projection of a point onto `start..end`, clamped to [0, 1], so
/// points beyond either end take the nearest end color.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    /// Color at `start`.
    pub from: Color,
    /// Color at `end`.
    pub to: Color,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, from: Color, to: Color) -> Self {
        Self { start, end, from, to }
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.from.is_finite()
            && self.to.is_finite()
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }
}

/// Two-color radial gradient: `t = distance(p, center) / radius`, clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f32,
    /// Color at the center.
    pub from: Color,
    /// Color at `radius` and beyond.
    pub to: Color,
}

impl RadialGradient {
    pub fn new(center: Vec2, radius: f32, from: Color, to: Color) -> Self {
        Self { center, radius, from, to }
    }

    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.radius.is_finite()
            && self.radius > 0.0
            && self.from.is_finite()
            && self.to.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white() -> Color { Color::from_straight(1.0, 1.0, 1.0, 1.0) }
    fn black() -> Color { Color::from_straight(0.0, 0.0, 0.0, 1.0) }

    #[test]
    fn linear_with_distinct_endpoints_is_valid() {
        let g = LinearGradient::new(Vec2::zero(), Vec2::new(10.0, 10.0), white(), black());
        assert!(g.is_valid());
    }

    #[test]
    fn linear_with_coincident_endpoints_is_invalid() {
        let p = Vec2::new(3.0, 3.0);
        assert!(!LinearGradient::new(p, p, white(), black()).is_valid());
    }

    #[test]
    fn radial_needs_positive_radius() {
        assert!(RadialGradient::new(Vec2::zero(), 5.0, white(), black()).is_valid());
        assert!(!RadialGradient::new(Vec2::zero(), 0.0, white(), black()).is_valid());
    }

    #[test]
    fn non_finite_color_is_invalid() {
        let nan = Color { r: f32::NAN, ..white() };
        assert!(!RadialGradient::new(Vec2::zero(), 5.0, nan, black()).is_valid());
    }
}
