use dial_engine::coords::{Rect, Vec2};
use dial_engine::paint::{LinearGradient, RadialGradient};
use dial_ui::constraints::Constraints;
use dial_ui::painter::Painter;
use dial_ui::widget::Widget;

use crate::face::FaceGeometry;
use crate::hand::ClockHand;
use crate::theme;
use crate::time::{TimeOfDay, TimeSource};

/// Analog clock face with second, minute and hour hands.
///
/// The timestamp is read from `time` on every paint, and all geometry is
/// recomputed from the rect the widget is given, so the clock follows both
/// the clock and the layout without any cached state.
pub struct Clock {
    time: Box<dyn TimeSource>,
    circle_radius: f32,
    outer_circle_thickness: f32,
    size: Vec2,
}

impl Clock {
    pub fn new(time: impl TimeSource + 'static) -> Self {
        Self {
            time: Box::new(time),
            circle_radius: 180.0,
            outer_circle_thickness: 18.0,
            size: Vec2::new(500.0, 500.0),
        }
    }

    pub fn radius(mut self, circle_radius: f32) -> Self {
        self.circle_radius = circle_radius;
        self
    }

    pub fn thickness(mut self, outer_circle_thickness: f32) -> Self {
        self.outer_circle_thickness = outer_circle_thickness;
        self
    }

    /// Preferred layout size.
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = Vec2::new(width, height);
        self
    }

    fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from_millis_local(self.time.now_millis())
    }

    fn paint_face(&self, painter: &mut Painter, rect: Rect, g: &FaceGeometry) {
        let ring = LinearGradient::new(
            rect.min(),
            rect.max(),
            theme::white().with_alpha(0.45),
            theme::dark_gray().with_alpha(0.35),
        );
        painter.stroke_circle(g.center, g.ring_radius(), g.outer_circle_thickness, ring);

        let face = RadialGradient::new(
            g.center,
            rect.min_dimension() / 2.0,
            theme::white().with_alpha(0.45),
            theme::dark_gray().with_alpha(0.25),
        );
        painter.fill_circle(g.center, g.face_radius(), face);

        painter.fill_circle(g.center, g.hub_radius(), theme::gray());
    }

    fn paint_ticks(&self, painter: &mut Painter, g: &FaceGeometry) {
        for tick in g.ticks() {
            let anchor = tick.anchor(g);
            let end = tick.local_end(g);
            painter.rotate(tick.rotation(), anchor, |p| {
                p.line(anchor, end, tick.thickness(), theme::gray());
            });
        }
    }

    fn paint_hands(&self, painter: &mut Painter, g: &FaceGeometry, t: &TimeOfDay) {
        for hand in ClockHand::ALL {
            let length = g.circle_radius * hand.length_fraction();
            let end = g.center + Vec2::new(0.0, length);
            painter.rotate(hand.angle(t) - 180.0, g.center, |p| {
                p.line(g.center, end, hand.thickness(), hand.color());
            });
        }
    }
}

impl Widget for Clock {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.constrain(self.size)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let g = FaceGeometry::new(rect.center(), self.circle_radius, self.outer_circle_thickness);
        let t = self.time_of_day();

        self.paint_face(painter, rect, &g);
        self.paint_ticks(painter, &g);
        self.paint_hands(painter, &g, &t);
    }
}
