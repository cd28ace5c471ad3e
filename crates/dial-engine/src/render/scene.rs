use std::ops::Range;

use crate::scene::{DrawCmd, DrawKind, DrawList, DrawStyle};

use super::shapes::circle::CircleRenderer;
use super::shapes::line::LineRenderer;
use super::{RenderCtx, RenderTarget};

/// A run of consecutive same-kind draw items, addressed by instance index
/// inside that kind's renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub kind: DrawKind,
    pub instances: Range<u32>,
}

/// Paint-order batch plan for one frame.
///
/// Consecutive commands of the same kind share a draw call; a change of kind
/// starts a new batch so interleaved shapes keep their paint order.
#[derive(Debug, Default)]
pub struct BatchPlan {
    batches: Vec<Batch>,
    circles: u32,
    lines: u32,
}

impl BatchPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plans a whole draw list, skipping commands that paint nothing.
    pub fn for_list(list: &mut DrawList) -> Self {
        let mut plan = Self::new();
        for item in list.iter_in_paint_order() {
            if is_drawable(&item.cmd) {
                plan.push(item.cmd.kind());
            }
        }
        plan
    }

    pub fn clear(&mut self) {
        self.batches.clear();
        self.circles = 0;
        self.lines = 0;
    }

    /// Appends one instance of `kind`.
    pub fn push(&mut self, kind: DrawKind) {
        let counter = match kind {
            DrawKind::Circle => &mut self.circles,
            DrawKind::Line => &mut self.lines,
        };
        let index = *counter;
        *counter += 1;

        match self.batches.last_mut() {
            Some(last) if last.kind == kind => last.instances.end = index + 1,
            _ => self.batches.push(Batch { kind, instances: index..index + 1 }),
        }
    }

    #[inline]
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

/// Commands that would produce no pixels are dropped before batching.
fn is_drawable(cmd: &DrawCmd) -> bool {
    match cmd {
        DrawCmd::Circle(c) => {
            let stroke_ok = match c.style {
                DrawStyle::Fill => true,
                DrawStyle::Stroke { width } => width > 0.0,
            };
            c.radius > 0.0 && c.center.is_finite() && stroke_ok
        }
        DrawCmd::Line(l) => l.width > 0.0 && l.start.is_finite() && l.end.is_finite(),
    }
}

/// Renders a [`DrawList`] in paint order within a single render pass.
#[derive(Default)]
pub struct SceneRenderer {
    circles: CircleRenderer,
    lines: LineRenderer,
    plan: BatchPlan,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        if !ctx.viewport.is_valid() {
            return;
        }

        self.plan.clear();
        self.circles.begin();
        self.lines.begin();

        for item in draw_list.iter_in_paint_order() {
            if !is_drawable(&item.cmd) {
                continue;
            }
            match &item.cmd {
                DrawCmd::Circle(c) => {
                    self.circles.push(c);
                }
                DrawCmd::Line(l) => {
                    self.lines.push(l);
                }
            }
            self.plan.push(item.cmd.kind());
        }

        if self.plan.is_empty() {
            return;
        }

        self.circles.upload(ctx);
        self.lines.upload(ctx);

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("dial scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        for batch in self.plan.batches() {
            match batch.kind {
                DrawKind::Circle => self.circles.draw(&mut rpass, batch.instances.clone()),
                DrawKind::Line => self.lines.draw(&mut rpass, batch.instances.clone()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::{Color, Paint};
    use crate::scene::ZIndex;

    fn gray() -> Color { Color::from_straight(0.5, 0.5, 0.5, 1.0) }

    #[test]
    fn consecutive_kinds_merge() {
        let mut plan = BatchPlan::new();
        for kind in [DrawKind::Circle, DrawKind::Circle, DrawKind::Line, DrawKind::Line, DrawKind::Line] {
            plan.push(kind);
        }
        assert_eq!(
            plan.batches(),
            &[
                Batch { kind: DrawKind::Circle, instances: 0..2 },
                Batch { kind: DrawKind::Line, instances: 0..3 },
            ]
        );
    }

    #[test]
    fn interleaved_kinds_keep_paint_order() {
        let mut plan = BatchPlan::new();
        for kind in [DrawKind::Circle, DrawKind::Line, DrawKind::Circle] {
            plan.push(kind);
        }
        assert_eq!(
            plan.batches(),
            &[
                Batch { kind: DrawKind::Circle, instances: 0..1 },
                Batch { kind: DrawKind::Line, instances: 0..1 },
                Batch { kind: DrawKind::Circle, instances: 1..2 },
            ]
        );
    }

    #[test]
    fn degenerate_commands_are_skipped() {
        let mut list = DrawList::new();
        let z = ZIndex::default();
        list.push_solid_circle(z, Vec2::zero(), 0.0, gray());
        list.push_circle(z, Vec2::zero(), 10.0, Paint::Solid(gray()), DrawStyle::Stroke { width: 0.0 });
        list.push_line(z, Vec2::zero(), Vec2::new(1.0, 1.0), 0.0, gray());
        assert!(BatchPlan::for_list(&mut list).is_empty());
    }

    #[test]
    fn plan_follows_z_not_insertion() {
        let mut list = DrawList::new();
        list.push_line(ZIndex::new(2), Vec2::zero(), Vec2::new(5.0, 0.0), 1.0, gray());
        list.push_solid_circle(ZIndex::new(1), Vec2::zero(), 3.0, gray());
        let plan = BatchPlan::for_list(&mut list);
        let kinds: Vec<DrawKind> = plan.batches().iter().map(|b| b.kind).collect();
        assert_eq!(kinds, vec![DrawKind::Circle, DrawKind::Line]);
    }
}
