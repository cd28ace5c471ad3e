use crate::coords::Vec2;
use crate::paint::{Color, Paint};
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// How a closed shape is painted.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum DrawStyle {
    /// Paint the interior.
    #[default]
    Fill,
    /// Paint a band of `width` centered on the outline.
    Stroke { width: f32 },
}

/// Circle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub paint: Paint,
    pub style: DrawStyle,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, paint: Paint, style: DrawStyle) -> Self {
        Self { center, radius, paint, style }
    }

    /// Outermost extent of painted pixels from the center.
    #[inline]
    pub fn outer_radius(&self) -> f32 {
        match self.style {
            DrawStyle::Fill => self.radius,
            DrawStyle::Stroke { width } => self.radius + width.max(0.0) / 2.0,
        }
    }
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        paint: Paint,
        style: DrawStyle,
    ) {
        self.push(z, DrawCmd::Circle(CircleCmd::new(center, radius, paint, style)));
    }

    /// Records a solid filled circle.
    #[inline]
    pub fn push_solid_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, color: Color) {
        self.push_circle(z, center, radius, Paint::Solid(color), DrawStyle::Fill);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_extends_half_its_width_outside() {
        let c = CircleCmd::new(
            Vec2::zero(),
            100.0,
            Paint::Solid(Color::transparent()),
            DrawStyle::Stroke { width: 20.0 },
        );
        assert_eq!(c.outer_radius(), 110.0);
    }

    #[test]
    fn fill_extent_is_radius() {
        let c = CircleCmd::new(Vec2::zero(), 15.0, Paint::Solid(Color::transparent()), DrawStyle::Fill);
        assert_eq!(c.outer_radius(), 15.0);
    }
}
