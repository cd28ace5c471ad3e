use dial_engine::coords::Vec2;
use dial_engine::paint::{Color, Paint};
use dial_engine::scene::{DrawList, DrawStyle, ZIndex};

/// A rotation by `degrees` (clockwise on screen) around `pivot`.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Rotation {
    pivot: Vec2,
    degrees: f32,
}

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a high-level API. Every call records
/// exactly one draw command with a z-index one above the previous call, so
/// paint order equals call order.
///
/// Geometry passed while inside [`Painter::rotate`] is transformed before it
/// is recorded; the draw list only ever sees final screen positions.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    z: i32,
    rotations: Vec<Rotation>,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0, rotations: Vec::new() }
    }

    // ── transforms ────────────────────────────────────────────────────────

    /// Runs `f` with every drawn point rotated by `degrees` around `pivot`.
    ///
    /// Positive angles turn clockwise on screen. Nested calls compose: the
    /// innermost rotation is applied first.
    pub fn rotate<F>(&mut self, degrees: f32, pivot: Vec2, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.rotations.push(Rotation { pivot, degrees });
        f(self);
        self.rotations.pop();
    }

    /// Maps a point from the current local space to screen space.
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        self.rotations
            .iter()
            .rev()
            .fold(p, |p, r| p.rotated_about(r.pivot, r.degrees))
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Filled circle.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, paint: impl Into<Paint>) {
        self.circle(center, radius, paint.into(), DrawStyle::Fill);
    }

    /// Circular outline `width` wide, centered on `radius`.
    pub fn stroke_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        width: f32,
        paint: impl Into<Paint>,
    ) {
        self.circle(center, radius, paint.into(), DrawStyle::Stroke { width });
    }

    /// Butt-capped line segment.
    pub fn line(&mut self, start: Vec2, end: Vec2, width: f32, color: Color) {
        let z = self.next_z();
        let start = self.transform_point(start);
        let end = self.transform_point(end);
        self.draw_list.push_line(z, start, end, width, color);
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn circle(&mut self, center: Vec2, radius: f32, paint: Paint, style: DrawStyle) {
        let z = self.next_z();
        let center = self.transform_point(center);
        let paint = self.transform_paint(paint);
        self.draw_list.push_circle(z, center, radius, paint, style);
    }

    fn transform_paint(&self, paint: Paint) -> Paint {
        if self.rotations.is_empty() {
            return paint;
        }
        match paint {
            Paint::Solid(c) => Paint::Solid(c),
            Paint::LinearGradient(mut g) => {
                g.start = self.transform_point(g.start);
                g.end = self.transform_point(g.end);
                Paint::LinearGradient(g)
            }
            Paint::RadialGradient(mut g) => {
                g.center = self.transform_point(g.center);
                Paint::RadialGradient(g)
            }
        }
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dial_engine::paint::LinearGradient;
    use dial_engine::scene::DrawCmd;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn calls_record_in_order() {
        let mut list = DrawList::new();
        {
            let mut p = Painter::new(&mut list);
            p.fill_circle(Vec2::new(10.0, 10.0), 5.0, Color::from_straight(1.0, 0.0, 0.0, 1.0));
            p.line(Vec2::zero(), Vec2::new(0.0, 10.0), 2.0, Color::from_straight(0.0, 1.0, 0.0, 1.0));
            p.stroke_circle(Vec2::zero(), 3.0, 1.0, Color::from_straight(0.0, 0.0, 1.0, 1.0));
        }
        let kinds: Vec<_> = list.iter_in_paint_order().map(|i| i.cmd.kind()).collect();
        assert_eq!(kinds.len(), 3);
        assert!(matches!(list.items()[0].cmd, DrawCmd::Circle(_)));
        assert!(matches!(list.items()[1].cmd, DrawCmd::Line(_)));
        match &list.items()[2].cmd {
            DrawCmd::Circle(c) => assert_eq!(c.style, DrawStyle::Stroke { width: 1.0 }),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rotate_moves_line_endpoints() {
        let mut list = DrawList::new();
        {
            let mut p = Painter::new(&mut list);
            // Down from the pivot, turned a quarter clockwise, points left.
            p.rotate(90.0, Vec2::new(50.0, 50.0), |p| {
                p.line(Vec2::new(50.0, 50.0), Vec2::new(50.0, 60.0), 1.0, Color::transparent());
            });
        }
        match &list.items()[0].cmd {
            DrawCmd::Line(l) => {
                assert!(close(l.start, Vec2::new(50.0, 50.0)));
                assert!(close(l.end, Vec2::new(40.0, 50.0)), "end = {:?}", l.end);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rotation_is_scoped_to_the_closure() {
        let mut list = DrawList::new();
        {
            let mut p = Painter::new(&mut list);
            p.rotate(180.0, Vec2::zero(), |_| {});
            assert!(close(p.transform_point(Vec2::new(1.0, 0.0)), Vec2::new(1.0, 0.0)));
        }
    }

    #[test]
    fn nested_rotations_compose() {
        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list);
        p.rotate(45.0, Vec2::zero(), |p| {
            p.rotate(45.0, Vec2::zero(), |p| {
                let q = p.transform_point(Vec2::new(1.0, 0.0));
                assert!(close(q, Vec2::new(0.0, 1.0)), "q = {q:?}");
            });
        });
    }

    #[test]
    fn gradient_geometry_follows_rotation() {
        let mut list = DrawList::new();
        {
            let mut p = Painter::new(&mut list);
            let g = LinearGradient::new(
                Vec2::new(0.0, 0.0),
                Vec2::new(10.0, 0.0),
                Color::transparent(),
                Color::from_straight(1.0, 1.0, 1.0, 1.0),
            );
            p.rotate(90.0, Vec2::zero(), |p| p.fill_circle(Vec2::zero(), 4.0, g));
        }
        match &list.items()[0].cmd {
            DrawCmd::Circle(c) => match &c.paint {
                Paint::LinearGradient(g) => assert!(close(g.end, Vec2::new(0.0, 10.0))),
                other => panic!("unexpected {other:?}"),
            },
            other => panic!("unexpected {other:?}"),
        }
    }
}
