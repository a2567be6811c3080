//! Geometry value types used by drawables and surfaces.
//!
//! Canonical space is logical pixels, origin top-left, +X right, +Y down.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
