use std::cell::Cell;

use anyhow::Result;

use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{Drawable, ZOrder};
use crate::surface::{DrawCmd, DrawSurface, SpriteCmd, TextureId};

/// Single textured quad.
#[derive(Debug)]
pub struct Sprite {
    label: String,
    texture: TextureId,
    z: Cell<ZOrder>,
    rect: Cell<Rect>,
    tint: Cell<Color>,
    visible: Cell<bool>,
}

impl Sprite {
    pub fn new(texture: TextureId, rect: Rect) -> Self {
        Self {
            label: "sprite".to_string(),
            texture,
            z: Cell::new(ZOrder::default()),
            rect: Cell::new(rect),
            tint: Cell::new(Color::WHITE),
            visible: Cell::new(true),
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

    pub fn with_tint(self, tint: Color) -> Self {
        self.tint.set(tint);
        self
    }

    /// Changes the z-order in place. Lists holding this sprite are not notified.
    #[inline]
    pub fn set_z_order(&self, z: impl Into<ZOrder>) {
        self.z.set(z.into());
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect.get()
    }

    #[inline]
    pub fn set_rect(&self, rect: Rect) {
        self.rect.set(rect);
    }

    /// Moves the sprite, keeping its size.
    #[inline]
    pub fn set_position(&self, origin: Vec2) {
        let r = self.rect.get();
        self.rect.set(Rect { origin, ..r });
    }

    #[inline]
    pub fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }
}

impl Drawable for Sprite {
    fn z_order(&self) -> ZOrder {
        self.z.get()
    }

    fn visit(&self, surface: &mut dyn DrawSurface) -> Result<()> {
        let rect = self.rect.get();
        let tint = self.tint.get();
        if !self.visible.get() || rect.is_empty() || tint.is_transparent() {
            return Ok(());
        }

        surface.submit(DrawCmd::Sprite(SpriteCmd { texture: self.texture, rect, tint }))?;
        Ok(())
    }

    fn label(&self) -> &str {
        &self.label
    }
}
