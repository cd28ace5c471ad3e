use bytemuck::{Pod, Zeroable};

use crate::render::RenderCtx;
use crate::scene::{CircleCmd, DrawStyle};

use super::common::{resolve_paint, InstanceBuffer, ShapePipeline};

/// Renderer for `DrawCmd::Circle`.
///
/// Supported paints: solid, linear gradient, radial gradient.
/// `DrawStyle::Stroke` renders an AA band centered on the radius.
pub struct CircleRenderer {
    pipeline: Option<ShapePipeline>,
    instances: InstanceBuffer<CircleInstance>,
}

impl Default for CircleRenderer {
    fn default() -> Self {
        Self {
            pipeline: None,
            instances: InstanceBuffer::new("dial circle instances"),
        }
    }
}

impl CircleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops instances staged for the previous frame.
    pub fn begin(&mut self) {
        self.instances.clear();
    }

    /// Stages `cmd`; returns its instance index.
    pub fn push(&mut self, cmd: &CircleCmd) -> u32 {
        let paint = resolve_paint(&cmd.paint);
        let stroke_width = match cmd.style {
            DrawStyle::Fill => 0.0,
            DrawStyle::Stroke { width } => width.max(0.0),
        };

        let index = self.instances.len() as u32;
        self.instances.push(CircleInstance {
            center: [cmd.center.x, cmd.center.y],
            radius_stroke: [cmd.radius, stroke_width],
            color0: paint.color0,
            color1: paint.color1,
            gradient: paint.geometry,
            paint_kind: paint.kind,
        });
        index
    }

    /// Builds GPU resources on first use and uploads staged instances.
    pub fn upload(&mut self, ctx: &RenderCtx<'_>) {
        if !self.pipeline.as_ref().is_some_and(|p| p.matches(ctx.surface_format)) {
            self.pipeline = Some(ShapePipeline::new(
                ctx,
                "dial circle",
                include_str!("shaders/circle.wgsl"),
                CircleInstance::layout(),
            ));
        }
        if let Some(pipeline) = &self.pipeline {
            pipeline.write_viewport(ctx);
        }
        self.instances.upload(ctx);
    }

    /// Draws staged instances `range` into an open render pass.
    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, range: std::ops::Range<u32>) {
        let (Some(pipeline), Some(buffer)) = (&self.pipeline, self.instances.buffer()) else {
            return;
        };
        pipeline.draw(rpass, buffer, range);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (68 bytes):
///
///  offset  0  center         [f32; 2]  loc 1
///  offset  8  radius_stroke  [f32; 2]  loc 2  (.x = radius, .y = stroke width, 0 = fill)
///  offset 16  color0         [f32; 4]  loc 3
///  offset 32  color1         [f32; 4]  loc 4
///  offset 48  gradient       [f32; 4]  loc 5
///  offset 64  paint_kind     u32       loc 6
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct CircleInstance {
    center: [f32; 2],
    radius_stroke: [f32; 2],
    color0: [f32; 4],
    color1: [f32; 4],
    gradient: [f32; 4],
    paint_kind: u32,
}

impl CircleInstance {
    const ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        1 => Float32x2, // center
        2 => Float32x2, // radius_stroke
        3 => Float32x4, // color0
        4 => Float32x4, // color1
        5 => Float32x4, // gradient
        6 => Uint32     // paint_kind
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CircleInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
