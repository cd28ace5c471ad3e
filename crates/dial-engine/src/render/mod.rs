//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each shape renderer owns its own GPU resources (pipeline, buffers);
//! [`SceneRenderer`] walks the draw list in paint order and interleaves them.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shader converts to NDC using a viewport uniform.

mod ctx;
mod scene;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use scene::{Batch, BatchPlan, SceneRenderer};
