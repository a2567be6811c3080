//! Scene graph dispatch.
//!
//! Responsibilities:
//! - define the `Drawable` capability the render list consumes
//! - keep attached drawables in deterministic paint order (z-order + attach order)
//! - provide the concrete node kinds under `scene::nodes`

mod drawable;
mod key;
mod render_list;
mod z_order;

pub mod nodes;

pub use drawable::{Drawable, NodeRef, same_node};
pub use key::SortKey;
pub use render_list::RenderList;
pub use z_order::ZOrder;
