//! Concrete drawable kinds.
//!
//! Every node keeps its z-order in a `Cell` so it can be re-layered through a
//! shared handle. Owners must call `RenderList::mark_reorder_dirty` (or
//! `Container::mark_children_dirty`) after doing so.

mod container;
mod particles;
mod sprite;

pub use container::Container;
pub use particles::{Particle, ParticleBatch};
pub use sprite::Sprite;
