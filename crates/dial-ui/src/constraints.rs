use dial_engine::coords::Vec2;

/// Layout constraints passed down from parent to child during measure.
///
/// A child may return any size in `[min, max]`. Parents enforce their own
/// policy by calling [`Constraints::constrain`] on the returned size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Tight: child must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// No constraint: child can take any positive size.
    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::new(f32::INFINITY, f32::INFINITY) }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }

    /// Same maximum, no minimum.
    #[inline]
    #[must_use]
    pub fn loosen(self) -> Self {
        Self::loose(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constrain_clamps_below_min() {
        let c = Constraints { min: Vec2::new(10.0, 10.0), max: Vec2::new(100.0, 100.0) };
        let out = c.constrain(Vec2::new(5.0, 3.0));
        assert_eq!(out.x, 10.0);
        assert_eq!(out.y, 10.0);
    }

    #[test]
    fn constrain_clamps_above_max() {
        let c = Constraints::loose(Vec2::new(50.0, 50.0));
        let out = c.constrain(Vec2::new(200.0, 200.0));
        assert_eq!(out.x, 50.0);
        assert_eq!(out.y, 50.0);
    }

    #[test]
    fn constrain_inside_range_unchanged() {
        let c = Constraints { min: Vec2::new(5.0, 5.0), max: Vec2::new(50.0, 50.0) };
        let v = Vec2::new(20.0, 30.0);
        assert_eq!(c.constrain(v), v);
    }

    #[test]
    fn tight_forces_exact_size() {
        let c = Constraints::tight(Vec2::new(30.0, 40.0));
        assert_eq!(c.constrain(Vec2::zero()), Vec2::new(30.0, 40.0));
        assert_eq!(c.constrain(Vec2::new(500.0, 500.0)), Vec2::new(30.0, 40.0));
    }

    #[test]
    fn loosen_drops_minimum() {
        let c = Constraints::tight(Vec2::new(30.0, 40.0)).loosen();
        assert_eq!(c.min, Vec2::zero());
        assert_eq!(c.max, Vec2::new(30.0, 40.0));
    }

    #[test]
    fn unbounded_keeps_any_size() {
        let v = Vec2::new(1.0e6, 3.0);
        assert_eq!(Constraints::unbounded().constrain(v), v);
    }
}
