//! Drawing targets handed to `Drawable::visit`.
//!
//! Responsibilities:
//! - accept renderer-agnostic draw commands in submission order
//! - keep a translation stack so hierarchical nodes can draw in local space
//! - expose frame hooks the frame loop calls around `RenderList::render`

mod cmd;
mod error;
mod recording;

pub use cmd::{DrawCmd, ParticlesCmd, SpriteCmd, TextureId};
pub use error::SurfaceError;
pub use recording::RecordingSurface;

use crate::coords::Vec2;

/// A target that drawables submit commands to.
///
/// Offsets pushed with [`push_offset`](Self::push_offset) accumulate; every
/// submitted command is interpreted relative to the current accumulated offset.
pub trait DrawSurface {
    /// Submits one draw command at the current offset.
    fn submit(&mut self, cmd: DrawCmd) -> Result<(), SurfaceError>;

    /// Enters a nested coordinate space translated by `offset`.
    fn push_offset(&mut self, offset: Vec2);

    /// Leaves the coordinate space entered by the matching [`push_offset`](Self::push_offset).
    fn pop_offset(&mut self) -> Result<(), SurfaceError>;

    /// Called by the frame loop before the scene is rendered.
    fn begin_frame(&mut self) {}

    /// Called by the frame loop after every node visited successfully.
    fn end_frame(&mut self) {}

    /// Called by the frame loop when a visit failed mid-frame.
    fn abandon_frame(&mut self) {}
}
