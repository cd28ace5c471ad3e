use dial_engine::coords::{Rect, Vec2};
use dial_engine::scene::DrawList;

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::Element;

/// Owns the `DrawList` that is repopulated each frame by [`UiScene::frame_ref`].
///
/// The GPU side (`SceneRenderer`) lives in the application and receives the
/// `&mut DrawList` returned by `frame_ref`.
///
/// ```rust,ignore
/// let draw_list = ui.frame_ref(&root, viewport);
/// scene_renderer.render(rctx, target, draw_list);
/// ```
#[derive(Default)]
pub struct UiScene {
    /// Draw list populated by the most recent [`UiScene::frame_ref`] call.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lays out and paints `root` over the full `viewport`.
    ///
    /// The root is borrowed so it can persist across frames; the draw list is
    /// cleared first and is valid until the next call.
    pub fn frame_ref(&mut self, root: &Element, viewport: Vec2) -> &mut DrawList {
        self.draw_list.clear();

        // Pre-pass: let children compute their natural sizes. The root itself
        // always occupies the full viewport, so its measured size is unused.
        let _ = root.measure(Constraints::loose(viewport));
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);

        {
            let mut painter = Painter::new(&mut self.draw_list);
            root.paint(&mut painter, rect);
        }

        &mut self.draw_list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dial_engine::paint::Color;
    use dial_engine::scene::DrawCmd;

    use crate::widget::Widget;

    struct Dot;

    impl Widget for Dot {
        fn measure(&self, constraints: Constraints) -> Vec2 {
            constraints.constrain(Vec2::new(10.0, 10.0))
        }

        fn paint(&self, painter: &mut Painter, rect: Rect) {
            painter.fill_circle(rect.center(), 5.0, Color::from_straight(1.0, 1.0, 1.0, 1.0));
        }
    }

    #[test]
    fn root_fills_viewport() {
        let mut ui = UiScene::new();
        let root = Element::new(Dot);
        let list = ui.frame_ref(&root, Vec2::new(200.0, 100.0));
        assert_eq!(list.len(), 1);
        match &list.items()[0].cmd {
            DrawCmd::Circle(c) => assert_eq!(c.center, Vec2::new(100.0, 50.0)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn each_frame_starts_from_an_empty_list() {
        let mut ui = UiScene::new();
        let root = Element::new(Dot);
        let _ = ui.frame_ref(&root, Vec2::new(50.0, 50.0));
        let list = ui.frame_ref(&root, Vec2::new(50.0, 50.0));
        assert_eq!(list.len(), 1);
    }
}
