use std::cell::{Cell, Ref, RefCell, RefMut};

use anyhow::{Context, Result, anyhow};

use crate::coords::Vec2;
use crate::scene::{Drawable, NodeRef, RenderList, ZOrder};
use crate::surface::DrawSurface;

/// Composite node that draws its own z-ordered children.
///
/// Children are held in a nested [`RenderList`] and drawn in the container's
/// local space: the container's position is pushed as a surface offset for the
/// duration of the visit.
///
/// Children cannot be touched while the container is being drawn. A container
/// that ends up inside its own subtree fails its visit instead of recursing,
/// and a child that adds, removes, counts or re-sorts its parent's children
/// from inside `visit` gets an error instead of a panic. A cycle also keeps the
/// nodes alive; break it with [`remove_child`](Self::remove_child).
#[derive(Debug)]
pub struct Container {
    label: String,
    z: Cell<ZOrder>,
    position: Cell<Vec2>,
    children: RefCell<RenderList>,
}

impl Container {
    pub fn new() -> Self {
        Self {
            label: "container".to_string(),
            z: Cell::new(ZOrder::default()),
            position: Cell::new(Vec2::ZERO),
            children: RefCell::new(RenderList::new()),
        }
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_z(self, z: impl Into<ZOrder>) -> Self {
        self.z.set(z.into());
        self
    }

    pub fn at(self, position: Vec2) -> Self {
        self.position.set(position);
        self
    }

    /// Number of children.
    pub fn child_count(&self) -> Result<usize> {
        Ok(self.children()?.len())
    }

    /// Attaches `child` to this container. See [`RenderList::attach`].
    pub fn add_child(&self, child: &NodeRef) -> Result<bool> {
        Ok(self.children_mut()?.attach(child))
    }

    /// Detaches `child` from this container. See [`RenderList::detach`].
    pub fn remove_child(&self, child: &NodeRef) -> Result<bool> {
        Ok(self.children_mut()?.detach(child))
    }

    /// Re-sorts children on the next visit. Call after changing a child's z-order.
    pub fn mark_children_dirty(&self) -> Result<()> {
        self.children_mut()?.mark_reorder_dirty();
        Ok(())
    }

    fn children(&self) -> Result<Ref<'_, RenderList>> {
        self.children.try_borrow().map_err(|_| self.busy())
    }

    fn children_mut(&self) -> Result<RefMut<'_, RenderList>> {
        self.children.try_borrow_mut().map_err(|_| self.busy())
    }

    fn busy(&self) -> anyhow::Error {
        anyhow!("container `{}` is already being drawn (cycle in scene graph or mutation during visit)", self.label)
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawable for Container {
    fn z_order(&self) -> ZOrder {
        self.z.get()
    }

    fn visit(&self, surface: &mut dyn DrawSurface) -> Result<()> {
        let mut children = self.children_mut()?;

        surface.push_offset(self.position.get());
        let drawn = children
            .render(surface)
            .with_context(|| format!("drawing children of `{}`", self.label));
        // Pop even when a child failed so the surface stack stays balanced.
        let popped = surface.pop_offset();

        drawn?;
        popped?;
        Ok(())
    }

    fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use std::rc::{Rc, Weak};

    use super::*;
    use crate::coords::Rect;
    use crate::scene::nodes::Sprite;
    use crate::surface::{DrawCmd, RecordingSurface, TextureId};

    fn sprite(tex: u32, z: i32) -> Rc<Sprite> {
        Rc::new(Sprite::new(TextureId(tex), Rect::new(1.0, 1.0, 2.0, 2.0)).with_z(z))
    }

    fn textures(cmds: &[DrawCmd]) -> Vec<u32> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCmd::Sprite(s) => Some(s.texture.0),
                DrawCmd::Particles(_) => None,
            })
            .collect()
    }

    #[test]
    fn children_draw_in_z_order_at_container_offset() {
        let c = Container::new().at(Vec2::new(10.0, 20.0));
        let (back, front) = (sprite(1, 0), sprite(2, 5));
        c.add_child(&(front.clone() as NodeRef)).unwrap();
        c.add_child(&(back.clone() as NodeRef)).unwrap();

        let mut surface = RecordingSurface::new();
        c.visit(&mut surface).unwrap();

        assert_eq!(textures(surface.commands()), [1, 2]);
        match &surface.commands()[0] {
            DrawCmd::Sprite(s) => assert_eq!(s.rect.origin, Vec2::new(11.0, 21.0)),
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn nested_containers_compose_offsets() {
        let outer = Rc::new(Container::new().at(Vec2::new(100.0, 0.0)));
        let inner = Rc::new(Container::new().at(Vec2::new(0.0, 50.0)));
        inner.add_child(&(sprite(3, 0) as NodeRef)).unwrap();
        outer.add_child(&(inner.clone() as NodeRef)).unwrap();

        let mut surface = RecordingSurface::new();
        outer.visit(&mut surface).unwrap();

        match &surface.commands()[0] {
            DrawCmd::Sprite(s) => assert_eq!(s.rect.origin, Vec2::new(101.0, 51.0)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn child_reorder_needs_mark_dirty() {
        let c = Container::new();
        let (a, b) = (sprite(1, 0), sprite(2, 1));
        c.add_child(&(a.clone() as NodeRef)).unwrap();
        c.add_child(&(b.clone() as NodeRef)).unwrap();

        let mut surface = RecordingSurface::new();
        c.visit(&mut surface).unwrap();

        a.set_z_order(9);
        c.mark_children_dirty().unwrap();
        surface.begin_frame();
        c.visit(&mut surface).unwrap();
        assert_eq!(textures(surface.commands()), [2, 1]);
    }

    #[test]
    fn child_failure_keeps_offset_stack_balanced() {
        let c = Container::new().labeled("hud").at(Vec2::new(5.0, 5.0));
        c.add_child(&(sprite(1, 0) as NodeRef)).unwrap();
        c.add_child(&(sprite(2, 1) as NodeRef)).unwrap();

        let mut surface = RecordingSurface::with_budget(1);
        let err = c.visit(&mut surface).unwrap_err();

        assert_eq!(err.to_string(), "drawing children of `hud`");
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn self_containment_is_reported_not_recursed() {
        let c = Rc::new(Container::new().labeled("loop"));
        let as_node: NodeRef = c.clone();
        c.add_child(&as_node).unwrap();

        let err = c.visit(&mut RecordingSurface::new()).unwrap_err();
        assert!(format!("{err:#}").contains("already being drawn"));

        c.remove_child(&as_node).unwrap();
        assert_eq!(Rc::strong_count(&c), 2);
    }

    #[test]
    fn remove_child_releases_hold() {
        let c = Container::new();
        let s = sprite(1, 0);
        let node: NodeRef = s.clone();
        c.add_child(&node).unwrap();
        assert_eq!(Rc::strong_count(&s), 3);

        assert!(c.remove_child(&node).unwrap());
        drop(node);
        assert_eq!(Rc::strong_count(&s), 1);
        assert_eq!(c.child_count().unwrap(), 0);
    }

    /// Child that tries to re-sort its parent's children while being drawn.
    struct Meddler {
        parent: Weak<Container>,
    }

    impl Drawable for Meddler {
        fn z_order(&self) -> ZOrder {
            ZOrder::default()
        }

        fn visit(&self, _surface: &mut dyn DrawSurface) -> Result<()> {
            let parent = self.parent.upgrade().context("parent dropped")?;
            parent.mark_children_dirty()?;
            parent.child_count()?;
            Ok(())
        }
    }

    #[test]
    fn mutating_children_during_visit_is_an_error() {
        let c = Rc::new(Container::new().labeled("panel"));
        let meddler: NodeRef = Rc::new(Meddler { parent: Rc::downgrade(&c) });
        c.add_child(&meddler).unwrap();

        let mut surface = RecordingSurface::new();
        let err = c.visit(&mut surface).unwrap_err();

        assert!(format!("{err:#}").contains("container `panel` is already being drawn"));
        assert_eq!(surface.depth(), 0);
        // Outside the visit the same calls succeed.
        c.mark_children_dirty().unwrap();
        assert_eq!(c.child_count().unwrap(), 1);
    }
}
