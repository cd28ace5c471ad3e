use dial_engine::coords::Vec2;

/// Radius of the solid disc the hands pivot on.
pub const HUB_RADIUS: f32 = 15.0;

/// Number of tick marks around the dial.
pub const TICK_COUNT: u32 = 60;

/// Dial geometry for one paint, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceGeometry {
    pub center: Vec2,
    pub circle_radius: f32,
    pub outer_circle_thickness: f32,
}

impl FaceGeometry {
    pub fn new(center: Vec2, circle_radius: f32, outer_circle_thickness: f32) -> Self {
        Self { center, circle_radius, outer_circle_thickness }
    }

    /// Radius the ring stroke is centered on, so its inner edge meets the face.
    pub fn ring_radius(&self) -> f32 {
        self.circle_radius + self.outer_circle_thickness / 2.0
    }

    pub fn face_radius(&self) -> f32 {
        self.circle_radius
    }

    pub fn hub_radius(&self) -> f32 {
        HUB_RADIUS
    }

    pub fn ticks(&self) -> impl Iterator<Item = Tick> {
        (0..TICK_COUNT).map(Tick::new)
    }
}

/// A tick mark, `index` minutes clockwise from the bottom of the dial.
///
/// The mark is first laid out pointing down from its anchor on the face edge
/// and then turned about that anchor so that it points at the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub index: u32,
}

impl Tick {
    pub fn new(index: u32) -> Self {
        Self { index: index % TICK_COUNT }
    }

    /// Hour marks are large.
    pub fn is_large(self) -> bool {
        self.index % 5 == 0
    }

    pub fn length_fraction(self) -> f32 {
        if self.is_large() { 0.2 } else { 0.1 }
    }

    pub fn thickness(self) -> f32 {
        if self.is_large() { 5.0 } else { 2.0 }
    }

    /// `index * 6` degrees.
    pub fn angle(self) -> f32 {
        self.index as f32 * 360.0 / TICK_COUNT as f32
    }

    /// Point on the face edge the tick hangs from.
    pub fn anchor(self, g: &FaceGeometry) -> Vec2 {
        g.center + Vec2::from_angle(self.angle() + 90.0) * g.circle_radius
    }

    /// Unrotated end point, straight below the anchor.
    pub fn local_end(self, g: &FaceGeometry) -> Vec2 {
        self.anchor(g) + Vec2::new(0.0, g.circle_radius * self.length_fraction())
    }

    /// Rotation applied about [`Tick::anchor`].
    pub fn rotation(self) -> f32 {
        self.angle() + 180.0
    }

    /// Final screen-space end point.
    pub fn end(self, g: &FaceGeometry) -> Vec2 {
        self.local_end(g).rotated_about(self.anchor(g), self.rotation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> FaceGeometry {
        FaceGeometry::new(Vec2::new(250.0, 250.0), 180.0, 18.0)
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn radii() {
        let g = geometry();
        assert_eq!(g.ring_radius(), 189.0);
        assert_eq!(g.face_radius(), 180.0);
        assert_eq!(g.hub_radius(), 15.0);
    }

    #[test]
    fn exactly_twelve_large_ticks() {
        let g = geometry();
        let large: Vec<u32> = g.ticks().filter(|t| t.is_large()).map(|t| t.index).collect();
        assert_eq!(large.len(), 12);
        assert!(large.iter().all(|i| i % 5 == 0));
        assert_eq!(g.ticks().count(), 60);
    }

    #[test]
    fn tick_sizes() {
        assert_eq!(Tick::new(0).length_fraction(), 0.2);
        assert_eq!(Tick::new(0).thickness(), 5.0);
        assert_eq!(Tick::new(7).length_fraction(), 0.1);
        assert_eq!(Tick::new(7).thickness(), 2.0);
        assert_eq!(Tick::new(59).angle(), 354.0);
    }

    #[test]
    fn anchors_sit_on_the_face_edge() {
        let g = geometry();
        for t in g.ticks() {
            let r = (t.anchor(&g) - g.center).length();
            assert!((r - g.circle_radius).abs() < 1e-3, "tick {} at {r}", t.index);
        }
    }

    #[test]
    fn ticks_point_at_the_center() {
        let g = geometry();
        for t in g.ticks() {
            let anchor = t.anchor(&g);
            let end = t.end(&g);
            let len = g.circle_radius * t.length_fraction();
            assert!(((end - anchor).length() - len).abs() < 1e-3);
            let inward = (g.center - anchor).length() - (g.center - end).length();
            assert!((inward - len).abs() < 1e-2, "tick {} moved {inward}", t.index);
        }
    }

    #[test]
    fn tick_zero_hangs_at_the_bottom() {
        let g = geometry();
        let t = Tick::new(0);
        assert!(close(t.anchor(&g), Vec2::new(250.0, 430.0)));
        assert!(close(t.end(&g), Vec2::new(250.0, 394.0)));
    }
}
