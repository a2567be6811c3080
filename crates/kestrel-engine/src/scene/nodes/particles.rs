use std::cell::{Cell, RefCell};

use anyhow::Result;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{Drawable, ZOrder};
use crate::surface::{DrawCmd, DrawSurface, ParticlesCmd};

/// One simulated particle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Logical pixels per second.
    pub velocity: Vec2,
    /// Remaining lifetime in seconds.
    pub life: f32,
}

impl Particle {
    #[inline]
    pub const fn new(position: Vec2, velocity: Vec2, life: f32) -> Self {
        Self { position, velocity, life }
    }
}

/// Fixed-capacity pool of particles drawn as one batch.
#[derive(Debug)]
pub struct ParticleBatch {
    label: String,
    z: Cell<ZOrder>,
    particles: RefCell<Vec<Particle>>,
    capacity: usize,
    size: f32,
    color: Color,
}

impl ParticleBatch {
    pub fn new(capacity: usize, size: f32, color: Color) -> Self {
        Self {
            label: "particles".to_string(),
            z: Cell::new(ZOrder::default()),
            particles: RefCell::new(Vec::with_capacity(capacity)),
            capacity,
            size,
            color,
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

    pub fn live_count(&self) -> usize {
        self.particles.borrow().len()
    }

    /// Adds a particle.
    ///
    /// Returns `false` when the pool is full or the particle's life is not a
    /// positive number (dead or NaN).
    pub fn emit(&self, particle: Particle) -> bool {
        let mut particles = self.particles.borrow_mut();
        if particles.len() >= self.capacity || !(particle.life > 0.0) {
            return false;
        }
        particles.push(particle);
        true
    }

    /// Advances the simulation by `dt` seconds and drops expired particles.
    pub fn step(&self, dt: f32) {
        let mut particles = self.particles.borrow_mut();
        for p in particles.iter_mut() {
            p.position += p.velocity * dt;
            p.life -= dt;
        }
        particles.retain(|p| p.life > 0.0);
    }
}

impl Drawable for ParticleBatch {
    fn z_order(&self) -> ZOrder {
        self.z.get()
    }

    fn visit(&self, surface: &mut dyn DrawSurface) -> Result<()> {
        let particles = self.particles.borrow();
        if particles.is_empty() || self.color.is_transparent() {
            return Ok(());
        }

        surface.submit(DrawCmd::Particles(ParticlesCmd {
            positions: particles.iter().map(|p| p.position).collect(),
            size: self.size,
            color: self.color,
        }))?;
        Ok(())
    }

    fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    fn batch(capacity: usize) -> ParticleBatch {
        ParticleBatch::new(capacity, 2.0, Color::WHITE)
    }

    #[test]
    fn emit_respects_capacity() {
        let b = batch(2);
        let p = Particle::new(Vec2::ZERO, Vec2::ZERO, 1.0);
        assert!(b.emit(p));
        assert!(b.emit(p));
        assert!(!b.emit(p));
        assert_eq!(b.live_count(), 2);
    }

    #[test]
    fn emit_rejects_dead_particles() {
        assert!(!batch(4).emit(Particle::new(Vec2::ZERO, Vec2::ZERO, 0.0)));
    }

    #[test]
    fn emit_rejects_nan_life() {
        let b = batch(1);
        assert!(!b.emit(Particle::new(Vec2::ZERO, Vec2::ZERO, f32::NAN)));
        assert_eq!(b.live_count(), 0);
        assert!(b.emit(Particle::new(Vec2::ZERO, Vec2::ZERO, 1.0)));
    }

    #[test]
    fn step_integrates_and_expires() {
        let b = batch(4);
        b.emit(Particle::new(Vec2::ZERO, Vec2::new(10.0, 0.0), 1.0));
        b.emit(Particle::new(Vec2::ZERO, Vec2::ZERO, 0.25));

        b.step(0.5);
        assert_eq!(b.live_count(), 1);

        let mut surface = RecordingSurface::new();
        b.visit(&mut surface).unwrap();
        match &surface.commands()[0] {
            DrawCmd::Particles(cmd) => assert_eq!(cmd.positions, vec![Vec2::new(5.0, 0.0)]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn empty_batch_draws_nothing() {
        let mut surface = RecordingSurface::new();
        batch(4).visit(&mut surface).unwrap();
        assert!(surface.commands().is_empty());
    }
}
