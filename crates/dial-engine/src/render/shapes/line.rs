use bytemuck::{Pod, Zeroable};

use crate::render::RenderCtx;
use crate::scene::LineCmd;

use super::common::{InstanceBuffer, ShapePipeline};

/// Renderer for `DrawCmd::Line`: solid, butt-capped segments with AA edges.
pub struct LineRenderer {
    pipeline: Option<ShapePipeline>,
    instances: InstanceBuffer<LineInstance>,
}

impl Default for LineRenderer {
    fn default() -> Self {
        Self {
            pipeline: None,
            instances: InstanceBuffer::new("dial line instances"),
        }
    }
}

impl LineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) {
        self.instances.clear();
    }

    /// Stages `cmd`; returns its instance index.
    pub fn push(&mut self, cmd: &LineCmd) -> u32 {
        let index = self.instances.len() as u32;
        self.instances.push(LineInstance {
            start: [cmd.start.x, cmd.start.y],
            end: [cmd.end.x, cmd.end.y],
            width: cmd.width,
            color: cmd.color.to_array(),
        });
        index
    }

    pub fn upload(&mut self, ctx: &RenderCtx<'_>) {
        if !self.pipeline.as_ref().is_some_and(|p| p.matches(ctx.surface_format)) {
            self.pipeline = Some(ShapePipeline::new(
                ctx,
                "dial line",
                include_str!("shaders/line.wgsl"),
                LineInstance::layout(),
            ));
        }
        if let Some(pipeline) = &self.pipeline {
            pipeline.write_viewport(ctx);
        }
        self.instances.upload(ctx);
    }

    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, range: std::ops::Range<u32>) {
        let (Some(pipeline), Some(buffer)) = (&self.pipeline, self.instances.buffer()) else {
            return;
        };
        pipeline.draw(rpass, buffer, range);
    }
}

/// Instance data layout (36 bytes):
///
///  offset  0  start  [f32; 2]  loc 1
///  offset  8  end    [f32; 2]  loc 2
///  offset 16  width  f32       loc 3
///  offset 20  color  [f32; 4]  loc 4
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct LineInstance {
    start: [f32; 2],
    end: [f32; 2],
    width: f32,
    color: [f32; 4],
}

impl LineInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2, // start
        2 => Float32x2, // end
        3 => Float32,   // width
        4 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
