use std::fmt;

use anyhow::Result;

use crate::surface::DrawSurface;

use super::{NodeRef, SortKey, same_node};

/// One attached drawable plus the attach sequence number that breaks z ties.
struct Member {
    node: NodeRef,
    seq: u64,
}

/// Z-ordered set of drawables walked once per frame.
///
/// Behavior:
/// - `attach` / `detach` are idempotent and compare nodes by identity
/// - the list holds one `Rc` clone per member; detaching or dropping the list releases it
/// - sorting is deferred to the next `render` and only happens when the list is dirty
/// - equal z-orders paint in attach order, even across later re-sorts
///
/// Z-order changes made in place on a member are not observed; call
/// [`mark_reorder_dirty`](Self::mark_reorder_dirty) after mutating one.
///
/// Handles are `Rc`, so the list stays on the thread that owns the surface.
#[derive(Default)]
pub struct RenderList {
    members: Vec<Member>,
    next_seq: u64,

    needs_reorder: bool,
    sort_passes: u64,
}

impl RenderList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns true when the next `render` will re-sort.
    #[inline]
    pub fn needs_reorder(&self) -> bool {
        self.needs_reorder
    }

    /// Number of re-sorts performed since construction.
    #[inline]
    pub fn sort_passes(&self) -> u64 {
        self.sort_passes
    }

    pub fn contains(&self, node: &NodeRef) -> bool {
        self.position(node).is_some()
    }

    /// Members in their current order (paint order after a clean `render`).
    pub fn iter(&self) -> impl Iterator<Item = &NodeRef> {
        self.members.iter().map(|m| &m.node)
    }

    /// Attaches `node`, taking a shared hold on it.
    ///
    /// Returns `false` and changes nothing if the node is already a member.
    pub fn attach(&mut self, node: &NodeRef) -> bool {
        if self.contains(node) {
            return false;
        }

        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);

        self.members.push(Member { node: NodeRef::clone(node), seq });
        self.needs_reorder = true;

        log::trace!("attached {} (seq {seq}, {} members)", node.label(), self.members.len());
        true
    }

    /// Detaches `node`, releasing the list's hold on it.
    ///
    /// Returns `false` and changes nothing if the node is not a member.
    pub fn detach(&mut self, node: &NodeRef) -> bool {
        let Some(index) = self.position(node) else {
            return false;
        };

        // Drops the list's Rc clone.
        self.members.remove(index);
        self.needs_reorder = true;

        log::trace!("detached {} ({} members)", node.label(), self.members.len());
        true
    }

    /// Releases every member.
    pub fn clear(&mut self) {
        self.members.clear();
        self.needs_reorder = true;
    }

    /// Forces the next `render` to re-sort.
    ///
    /// Use after changing a member's z-order in place.
    #[inline]
    pub fn mark_reorder_dirty(&mut self) {
        self.needs_reorder = true;
    }

    /// Sorts members into paint order if the list is dirty.
    pub fn ensure_sorted(&mut self) {
        if self.needs_reorder {
            self.sort_members();
        }
    }

    /// Sorts if needed, then visits every member back-to-front.
    ///
    /// The first visit error stops the traversal and is returned unchanged.
    /// The list is clean afterwards whether or not a visit failed.
    pub fn render(&mut self, surface: &mut dyn DrawSurface) -> Result<()> {
        self.ensure_sorted();

        for member in &self.members {
            member.node.visit(surface)?;
        }
        Ok(())
    }

    fn position(&self, node: &NodeRef) -> Option<usize> {
        self.members.iter().position(|m| same_node(&m.node, node))
    }

    fn sort_members(&mut self) {
        // z_order() is read exactly once per member per pass.
        self.members
            .sort_by_cached_key(|m| SortKey::new(m.node.z_order(), m.seq));

        self.needs_reorder = false;
        self.sort_passes = self.sort_passes.wrapping_add(1);

        log::trace!("render list re-sorted ({} members)", self.members.len());
    }
}

impl fmt::Debug for RenderList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderList")
            .field("len", &self.members.len())
            .field("needs_reorder", &self.needs_reorder)
            .field("sort_passes", &self.sort_passes)
            .finish()
    }
}
