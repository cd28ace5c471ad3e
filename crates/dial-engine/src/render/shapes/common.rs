//! Shared GPU types and utilities used by all shape renderers.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::paint::Paint;
use crate::render::RenderCtx;

// ── blend ─────────────────────────────────────────────────────────────────

fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState { color: component, alpha: component }
}

// ── viewport uniform ──────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ViewportUniform {
    viewport: [f32; 2],
    /// Logical size of one physical pixel (AA ramp width).
    pixel: f32,
    _pad: f32, // 16-byte alignment
}

fn viewport_ubo_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<ViewportUniform>() as u64)
        .expect("ViewportUniform has non-zero size by construction")
}

// ── quad vertex ───────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct QuadVertex {
    corner: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { corner: [0.0, 0.0] },
    QuadVertex { corner: [1.0, 0.0] },
    QuadVertex { corner: [1.0, 1.0] },
    QuadVertex { corner: [0.0, 1.0] },
];

const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

// ── pipeline ──────────────────────────────────────────────────────────────

/// Instanced unit-quad pipeline shared by every shape renderer.
///
/// Slot 0 is the static quad, slot 1 the per-instance data described by the
/// renderer's layout. Group 0 binding 0 is the viewport uniform.
pub(super) struct ShapePipeline {
    format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    viewport_ubo: wgpu::Buffer,
    quad_vbo: wgpu::Buffer,
    quad_ibo: wgpu::Buffer,
}

impl ShapePipeline {
    pub(super) fn new(
        ctx: &RenderCtx<'_>,
        label: &str,
        wgsl: &str,
        instance_layout: wgpu::VertexBufferLayout<'static>,
    ) -> Self {
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(wgsl.into()),
        });

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some(label),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: Some(viewport_ubo_min_binding_size()),
                    },
                    count: None,
                }],
            });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some(label),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout(), instance_layout],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        let quad_vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let quad_ibo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::debug!("built {label} pipeline for {:?}", ctx.surface_format);

        Self {
            format: ctx.surface_format,
            pipeline,
            bind_group,
            viewport_ubo,
            quad_vbo,
            quad_ibo,
        }
    }

    /// The pipeline is tied to a surface format; rebuild when it changes.
    #[inline]
    pub(super) fn matches(&self, format: wgpu::TextureFormat) -> bool {
        self.format == format
    }

    pub(super) fn write_viewport(&self, ctx: &RenderCtx<'_>) {
        ctx.queue.write_buffer(
            &self.viewport_ubo,
            0,
            bytemuck::bytes_of(&ViewportUniform {
                viewport: [ctx.viewport.width.max(1.0), ctx.viewport.height.max(1.0)],
                pixel: ctx.pixel_size(),
                _pad: 0.0,
            }),
        );
    }

    /// Binds pipeline, uniforms, quad and `instances`, then draws `range`.
    pub(super) fn draw(
        &self,
        rpass: &mut wgpu::RenderPass<'_>,
        instances: &wgpu::Buffer,
        range: std::ops::Range<u32>,
    ) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.quad_vbo.slice(..));
        rpass.set_vertex_buffer(1, instances.slice(..));
        rpass.set_index_buffer(self.quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, range);
    }
}

// ── instance staging ──────────────────────────────────────────────────────

/// CPU staging vector plus a grow-only GPU vertex buffer.
pub(super) struct InstanceBuffer<T: Pod> {
    label: &'static str,
    staged: Vec<T>,
    buffer: Option<wgpu::Buffer>,
    capacity: usize,
}

impl<T: Pod> InstanceBuffer<T> {
    pub(super) fn new(label: &'static str) -> Self {
        Self { label, staged: Vec::new(), buffer: None, capacity: 0 }
    }

    #[inline]
    pub(super) fn clear(&mut self) {
        self.staged.clear();
    }

    #[inline]
    pub(super) fn push(&mut self, instance: T) {
        self.staged.push(instance);
    }

    #[inline]
    pub(super) fn len(&self) -> usize {
        self.staged.len()
    }

    /// Copies staged instances to the GPU, growing the buffer when needed.
    pub(super) fn upload(&mut self, ctx: &RenderCtx<'_>) {
        if self.staged.is_empty() {
            return;
        }

        if self.staged.len() > self.capacity || self.buffer.is_none() {
            let new_cap = self.staged.len().next_power_of_two().max(64);
            self.buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(self.label),
                size: (new_cap * std::mem::size_of::<T>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.capacity = new_cap;
        }

        if let Some(buffer) = &self.buffer {
            ctx.queue.write_buffer(buffer, 0, bytemuck::cast_slice(&self.staged));
        }
    }

    #[inline]
    pub(super) fn buffer(&self) -> Option<&wgpu::Buffer> {
        self.buffer.as_ref()
    }
}

// ── paint resolution ──────────────────────────────────────────────────────

/// Shader-side paint selector.
pub(super) const PAINT_SOLID: u32 = 0;
pub(super) const PAINT_LINEAR: u32 = 1;
pub(super) const PAINT_RADIAL: u32 = 2;

/// GPU-ready form of a [`Paint`].
///
/// `geometry` is `(start.xy, end.xy)` for linear gradients and
/// `(center.xy, radius, 0)` for radial ones.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(super) struct ResolvedPaint {
    pub kind: u32,
    pub color0: [f32; 4],
    pub color1: [f32; 4],
    pub geometry: [f32; 4],
}

impl ResolvedPaint {
    fn solid(color: [f32; 4]) -> Self {
        Self { kind: PAINT_SOLID, color0: color, color1: color, geometry: [0.0; 4] }
    }
}

/// Converts a `Paint` for the gradient-capable shaders.
///
/// Invalid gradients fall back to a solid fill with their `from` color.
pub(super) fn resolve_paint(paint: &Paint) -> ResolvedPaint {
    let (from, to, kind, geometry, valid) = match paint {
        Paint::Solid(c) => return ResolvedPaint::solid(c.to_array()),
        Paint::LinearGradient(g) => (
            g.from,
            g.to,
            PAINT_LINEAR,
            [g.start.x, g.start.y, g.end.x, g.end.y],
            g.is_valid(),
        ),
        Paint::RadialGradient(g) => (
            g.from,
            g.to,
            PAINT_RADIAL,
            [g.center.x, g.center.y, g.radius, 0.0],
            g.is_valid(),
        ),
    };

    if !valid {
        return ResolvedPaint::solid(from.to_array());
    }

    ResolvedPaint { kind, color0: from.to_array(), color1: to.to_array(), geometry }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::{Color, LinearGradient, RadialGradient};

    fn white() -> Color { Color::from_straight(1.0, 1.0, 1.0, 1.0) }
    fn gray() -> Color { Color::from_straight(0.5, 0.5, 0.5, 1.0) }

    #[test]
    fn solid_resolves_to_uniform_colors() {
        let r = resolve_paint(&Paint::Solid(gray()));
        assert_eq!(r.kind, PAINT_SOLID);
        assert_eq!(r.color0, r.color1);
    }

    #[test]
    fn radial_carries_center_and_radius() {
        let g = RadialGradient::new(Vec2::new(10.0, 20.0), 30.0, white(), gray());
        let r = resolve_paint(&Paint::RadialGradient(g));
        assert_eq!(r.kind, PAINT_RADIAL);
        assert_eq!(r.geometry, [10.0, 20.0, 30.0, 0.0]);
        assert_eq!(r.color0, white().to_array());
        assert_eq!(r.color1, gray().to_array());
    }

    #[test]
    fn linear_carries_endpoints_and_both_colors() {
        let g = LinearGradient::new(Vec2::zero(), Vec2::new(1.0, 0.0), gray(), white());
        let r = resolve_paint(&Paint::LinearGradient(g));
        assert_eq!(r.kind, PAINT_LINEAR);
        assert_eq!(r.geometry, [0.0, 0.0, 1.0, 0.0]);
        assert_eq!(r.color0, gray().to_array());
        assert_eq!(r.color1, white().to_array());
    }

    #[test]
    fn degenerate_gradient_falls_back_to_solid() {
        let p = Vec2::new(4.0, 4.0);
        let g = LinearGradient::new(p, p, gray(), white());
        let r = resolve_paint(&Paint::LinearGradient(g));
        assert_eq!(r.kind, PAINT_SOLID);
        assert_eq!(r.color0, gray().to_array());
    }
}
