use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::line::LineCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here and in [`DrawKind`]
/// - implement push helpers inside that shape module
/// - add a matching renderer under `render::shapes::*`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Circle(CircleCmd),
    Line(LineCmd),
}

/// Payload-free discriminant of [`DrawCmd`], used to batch consecutive
/// commands that share a pipeline.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DrawKind {
    Circle,
    Line,
}

impl DrawCmd {
    #[inline]
    pub fn kind(&self) -> DrawKind {
        match self {
            DrawCmd::Circle(_) => DrawKind::Circle,
            DrawCmd::Line(_) => DrawKind::Line,
        }
    }
}
