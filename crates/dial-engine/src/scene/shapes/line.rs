use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Straight line segment with butt caps.
///
/// `width` is measured across the segment; the ends are not extended.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub start: Vec2,
    pub end: Vec2,
    pub width: f32,
    pub color: Color,
}

impl LineCmd {
    #[inline]
    pub fn new(start: Vec2, end: Vec2, width: f32, color: Color) -> Self {
        Self { start, end, width, color }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        (self.end - self.start).length()
    }
}

impl DrawList {
    /// Records a line draw command.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, start: Vec2, end: Vec2, width: f32, color: Color) {
        self.push(z, DrawCmd::Line(LineCmd::new(start, end, width, color)));
    }
}
