//! Kestrel engine crate.
//!
//! Scene-graph dispatch for a 2D engine: a z-ordered render list over shared
//! drawable nodes, the node kinds that plug into it, a draw-surface
//! abstraction and a headless frame loop.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`scene`] | `Drawable`, `RenderList`, `ZOrder`, node kinds |
//! | [`surface`] | `DrawSurface`, `DrawCmd`, `RecordingSurface` |
//! | [`core`] | `Director`, `App`, `FrameCtx`, `EngineConfig` |
//!
//! ```rust
//! use std::rc::Rc;
//! use kestrel_engine::coords::Rect;
//! use kestrel_engine::scene::{NodeRef, RenderList, nodes::Sprite};
//! use kestrel_engine::surface::{RecordingSurface, TextureId};
//!
//! let back: NodeRef = Rc::new(Sprite::new(TextureId(1), Rect::new(0.0, 0.0, 8.0, 8.0)).with_z(-1));
//! let front: NodeRef = Rc::new(Sprite::new(TextureId(2), Rect::new(4.0, 4.0, 8.0, 8.0)).with_z(1));
//!
//! let mut list = RenderList::new();
//! list.attach(&front);
//! list.attach(&back);
//!
//! let mut surface = RecordingSurface::new();
//! list.render(&mut surface).unwrap();
//! assert_eq!(surface.commands().len(), 2);
//! ```

pub mod core;
pub mod time;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod surface;
