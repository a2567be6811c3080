use std::ptr;
use std::rc::Rc;

use anyhow::Result;

use crate::surface::DrawSurface;

use super::ZOrder;

/// Capability consumed by [`RenderList`](super::RenderList).
///
/// The list only needs a z-order to sort by and a visit entry point to call.
/// Implementors keep mutable state (z-order included) behind interior
/// mutability so they can be shared through [`NodeRef`].
pub trait Drawable {
    /// Current z-order. Called during sorting; must not have side effects.
    fn z_order(&self) -> ZOrder;

    /// Draws the node (and, for composites, its children) onto `surface`.
    ///
    /// Errors propagate out of `RenderList::render` unchanged.
    fn visit(&self, surface: &mut dyn DrawSurface) -> Result<()>;

    /// Short label for diagnostics.
    fn label(&self) -> &str {
        "node"
    }
}

/// Shared handle to a drawable.
///
/// Cloning the handle is a retain, dropping it is a release; the node is
/// destroyed when the last handle goes away. `Rc::strong_count` is the hold count.
pub type NodeRef = Rc<dyn Drawable>;

/// Identity comparison: true when both handles point at the same node.
///
/// Compares data addresses only, so two handles to one node created through
/// different unsizing coercions still compare equal.
#[inline]
pub fn same_node(a: &NodeRef, b: &NodeRef) -> bool {
    ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
