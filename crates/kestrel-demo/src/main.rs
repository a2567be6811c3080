use std::rc::Rc;

use anyhow::{Context, Result};

use kestrel_engine::coords::{Rect, Vec2};
use kestrel_engine::core::{AppControl, Director, EngineConfig, FrameCtx};
use kestrel_engine::logging::init_logging;
use kestrel_engine::paint::Color;
use kestrel_engine::scene::NodeRef;
use kestrel_engine::scene::nodes::{Container, Particle, ParticleBatch, Sprite};
use kestrel_engine::surface::{DrawCmd, RecordingSurface, TextureId};

const DEFAULT_FRAMES: u64 = 120;
const COMMAND_BUDGET: usize = 64;

/// Demo scene: a background, a hero that hops between layers, a particle
/// fountain and a HUD container drawn on top.
struct Demo {
    hero: Rc<Sprite>,
    coin: NodeRef,
    fountain: Rc<ParticleBatch>,
    hud: Rc<Container>,
    blink: Rc<Sprite>,
}

impl Demo {
    fn build(director: &mut Director<RecordingSurface>) -> Result<Self> {
        let background: NodeRef = Rc::new(
            Sprite::new(TextureId(1), Rect::new(0.0, 0.0, 320.0, 240.0))
                .labeled("background")
                .with_z(-10),
        );
        let hero = Rc::new(
            Sprite::new(TextureId(2), Rect::new(140.0, 180.0, 16.0, 24.0))
                .labeled("hero")
                .with_z(1),
        );
        let coin: NodeRef = Rc::new(
            Sprite::new(TextureId(3), Rect::new(200.0, 190.0, 8.0, 8.0))
                .labeled("coin")
                .with_z(1),
        );
        let fountain = Rc::new(
            ParticleBatch::new(32, 2.0, Color::from_srgb_u8(120, 180, 255, 200))
                .labeled("fountain"),
        );

        let hud = Rc::new(Container::new().labeled("hud").with_z(10).at(Vec2::new(8.0, 8.0)));
        let panel: NodeRef = Rc::new(
            Sprite::new(TextureId(4), Rect::new(0.0, 0.0, 96.0, 16.0))
                .labeled("hud panel")
                .with_tint(Color::from_straight(0.0, 0.0, 0.0, 0.6)),
        );
        let blink = Rc::new(
            Sprite::new(TextureId(5), Rect::new(4.0, 4.0, 8.0, 8.0))
                .labeled("hud blink")
                .with_z(1),
        );
        hud.add_child(&panel)?;
        hud.add_child(&(blink.clone() as NodeRef))?;

        let scene = director.scene_mut();
        scene.attach(&background);
        scene.attach(&(hero.clone() as NodeRef));
        scene.attach(&coin);
        scene.attach(&(fountain.clone() as NodeRef));
        scene.attach(&(hud.clone() as NodeRef));

        Ok(Self { hero, coin, fountain, hud, blink })
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let frame = ctx.time.frame_index;

        self.fountain.step(ctx.time.dt);
        let spread = (frame % 7) as f32 - 3.0;
        self.fountain.emit(Particle::new(
            Vec2::new(160.0, 200.0),
            Vec2::new(spread * 8.0, -60.0),
            0.5,
        ));

        // Hop the hero in front of / behind the fountain.
        if frame % 30 == 29 {
            let z = if self.hero.rect().origin.y > 170.0 { -1 } else { 1 };
            self.hero.set_z_order(z);
            self.hero.set_position(Vec2::new(140.0, if z < 0 { 160.0 } else { 180.0 }));
            ctx.scene.mark_reorder_dirty();
            log::debug!("frame {frame}: hero moved to z {z}");
        }

        if frame == 60 && ctx.scene.detach(&self.coin) {
            log::info!("frame {frame}: coin collected");
        }

        self.blink.set_visible(frame % 20 < 10);
        if frame % 45 == 44 {
            self.blink.set_z_order(-(frame as i32 % 3));
            if let Err(err) = self.hud.mark_children_dirty() {
                log::warn!("frame {frame}: {err:#}");
            }
        }

        // Nothing moved on screen for odd frames past 100.
        if frame > 100 && frame % 2 == 1 {
            ctx.skip_render();
        }
        AppControl::Continue
    }
}

fn main() -> Result<()> {
    let config = EngineConfig::default();
    init_logging(config.logging.clone());

    let frames = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<u64>())
        .transpose()
        .context("frame count must be a non-negative integer")?
        .unwrap_or(DEFAULT_FRAMES);

    let mut director = Director::new(config, RecordingSurface::with_budget(COMMAND_BUDGET));
    let mut demo = Demo::build(&mut director).context("building demo scene")?;

    let stats = director.run(&mut |ctx: &mut FrameCtx<'_>| demo.on_frame(ctx), Some(frames));

    let last = director.surface().last_frame();
    let sprites = last.iter().filter(|c| matches!(c, DrawCmd::Sprite(_))).count();
    let particles: usize = last
        .iter()
        .map(|c| match c {
            DrawCmd::Particles(p) => p.positions.len(),
            DrawCmd::Sprite(_) => 0,
        })
        .sum();

    println!();
    println!("  kestrel demo");
    println!("  ─────────────────────────────");
    println!("  frames rendered   {:>8}", stats.rendered);
    println!("  frames skipped    {:>8}", stats.skipped);
    println!("  frames abandoned  {:>8}", stats.abandoned);
    println!("  scene re-sorts    {:>8}", director.scene().sort_passes());
    println!("  last frame        {sprites:>3} sprites, {particles} particles");
    println!();

    Ok(())
}
