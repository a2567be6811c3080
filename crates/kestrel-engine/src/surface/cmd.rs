use crate::coords::{Rect, Vec2};
use crate::paint::Color;

/// Opaque handle to a texture owned by an asset pipeline outside this crate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(pub u32);

/// Textured quad.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteCmd {
    pub texture: TextureId,
    pub rect: Rect,
    pub tint: Color,
}

/// Batch of equally sized, equally colored point sprites.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticlesCmd {
    pub positions: Vec<Vec2>,
    pub size: f32,
    pub color: Color,
}

/// Renderer-agnostic draw command.
///
/// Extending:
/// - add a payload struct and a variant here
/// - teach `DrawCmd::translated` how to move it
/// - add a node kind under `scene::nodes` that submits it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Sprite(SpriteCmd),
    Particles(ParticlesCmd),
}

impl DrawCmd {
    /// Returns the command moved into a parent space by `offset`.
    pub fn translated(self, offset: Vec2) -> Self {
        if offset == Vec2::ZERO {
            return self;
        }
        match self {
            DrawCmd::Sprite(s) => DrawCmd::Sprite(SpriteCmd { rect: s.rect.translated(offset), ..s }),
            DrawCmd::Particles(mut p) => {
                for pos in &mut p.positions {
                    *pos += offset;
                }
                DrawCmd::Particles(p)
            }
        }
    }
}
