use dial_engine::coords::{Rect, Vec2};

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// A single-child widget that applies a fixed size and/or centering of its
/// child.
///
/// All properties are optional; an empty `Container` is a no-op.
///
/// # Example
/// ```rust,ignore
/// Container::new()
///     .center()
///     .child(Container::new().size(500.0, 500.0).child(dial))
/// ```
pub struct Container {
    child: Option<Element>,
    size: Option<Vec2>,
    center: bool,
}

impl Container {
    pub fn new() -> Self {
        Self { child: None, size: None, center: false }
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.child = Some(child.into());
        self
    }

    /// Requests a fixed size, still clamped by the parent's constraints.
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = Some(Vec2::new(width, height));
        self
    }

    /// Places the child at its measured size in the middle of the container.
    pub fn center(mut self) -> Self {
        self.center = true;
        self
    }

    /// Rect the child is painted into, given the container's own `rect`.
    fn child_rect(&self, child: &Element, rect: Rect) -> Rect {
        if !self.center {
            return rect;
        }
        let child_size = child.measure(Constraints::loose(rect.size));
        Rect::from_center_size(rect.center(), child_size)
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Container {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        if let Some(size) = self.size {
            return constraints.constrain(size);
        }

        let child_size = self
            .child
            .as_ref()
            .map(|c| c.measure(constraints.loosen()))
            .unwrap_or(Vec2::zero());

        if self.center {
            // A centering container takes all the room it is offered.
            let max = constraints.max;
            let fill = Vec2::new(
                if max.x.is_finite() { max.x } else { child_size.x },
                if max.y.is_finite() { max.y } else { child_size.y },
            );
            return constraints.constrain(fill);
        }

        constraints.constrain(child_size)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if let Some(child) = &self.child {
            child.paint(painter, self.child_rect(child, rect));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use dial_engine::scene::DrawList;

    use super::*;

    /// Records the rect it was painted into.
    struct Probe {
        size: Vec2,
        painted: Rc<Cell<Option<Rect>>>,
    }

    impl Widget for Probe {
        fn measure(&self, constraints: Constraints) -> Vec2 {
            constraints.constrain(self.size)
        }

        fn paint(&self, _painter: &mut Painter, rect: Rect) {
            self.painted.set(Some(rect));
        }
    }

    fn probe(w: f32, h: f32) -> (Probe, Rc<Cell<Option<Rect>>>) {
        let painted = Rc::new(Cell::new(None));
        (Probe { size: Vec2::new(w, h), painted: Rc::clone(&painted) }, painted)
    }

    #[test]
    fn fixed_size_is_clamped_by_parent() {
        let c = Container::new().size(500.0, 500.0);
        assert_eq!(c.measure(Constraints::loose(Vec2::new(800.0, 800.0))), Vec2::new(500.0, 500.0));
        assert_eq!(c.measure(Constraints::loose(Vec2::new(300.0, 400.0))), Vec2::new(300.0, 400.0));
    }

    #[test]
    fn center_places_child_in_the_middle() {
        let (p, painted) = probe(100.0, 50.0);
        let c = Container::new().center().child(p);

        let mut list = DrawList::new();
        let mut painter = Painter::new(&mut list);
        c.paint(&mut painter, Rect::new(0.0, 0.0, 300.0, 200.0));

        assert_eq!(painted.get(), Some(Rect::new(100.0, 75.0, 100.0, 50.0)));
    }

    #[test]
    fn uncentered_child_gets_whole_rect() {
        let (p, painted) = probe(10.0, 10.0);
        let c = Container::new().child(p);

        let mut list = DrawList::new();
        let mut painter = Painter::new(&mut list);
        let rect = Rect::new(5.0, 5.0, 40.0, 40.0);
        c.paint(&mut painter, rect);

        assert_eq!(painted.get(), Some(rect));
    }

    #[test]
    fn centering_container_fills_bounded_space() {
        let (p, _) = probe(10.0, 10.0);
        let c = Container::new().center().child(p);
        assert_eq!(c.measure(Constraints::loose(Vec2::new(300.0, 200.0))), Vec2::new(300.0, 200.0));
        assert_eq!(c.measure(Constraints::unbounded()), Vec2::new(10.0, 10.0));
    }
}
