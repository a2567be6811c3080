use crate::coords::Vec2;

use super::{DrawCmd, DrawSurface, SurfaceError};

/// Headless surface that records translated commands.
///
/// Frame protocol:
/// - `begin_frame` clears the in-progress recording and the offset stack
/// - `end_frame` publishes the recording as [`last_frame`](Self::last_frame)
/// - `abandon_frame` drops the partial recording; `last_frame` keeps the previous frame
///
/// Allocations are reused across frames once warmed.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    current: Vec<DrawCmd>,
    last_frame: Vec<DrawCmd>,

    /// Stack of accumulated offsets; the top is the effective one.
    offsets: Vec<Vec2>,

    budget: Option<usize>,
}

impl RecordingSurface {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a surface that rejects more than `limit` commands per frame.
    pub fn with_budget(limit: usize) -> Self {
        Self { budget: Some(limit), ..Self::default() }
    }

    /// Commands submitted since the last `begin_frame`, in submission order.
    #[inline]
    pub fn commands(&self) -> &[DrawCmd] {
        &self.current
    }

    /// Commands of the most recent frame that ended successfully.
    #[inline]
    pub fn last_frame(&self) -> &[DrawCmd] {
        &self.last_frame
    }

    /// Current accumulated offset.
    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offsets.last().copied().unwrap_or(Vec2::ZERO)
    }

    /// Nesting depth of the offset stack.
    #[inline]
    pub fn depth(&self) -> usize {
        self.offsets.len()
    }
}

impl DrawSurface for RecordingSurface {
    fn submit(&mut self, cmd: DrawCmd) -> Result<(), SurfaceError> {
        if let Some(limit) = self.budget {
            if self.current.len() >= limit {
                return Err(SurfaceError::BudgetExceeded { limit });
            }
        }
        let offset = self.offset();
        self.current.push(cmd.translated(offset));
        Ok(())
    }

    fn push_offset(&mut self, offset: Vec2) {
        let effective = self.offset() + offset;
        self.offsets.push(effective);
    }

    fn pop_offset(&mut self) -> Result<(), SurfaceError> {
        self.offsets.pop().map(|_| ()).ok_or(SurfaceError::UnbalancedOffset)
    }

    fn begin_frame(&mut self) {
        self.current.clear();
        self.offsets.clear();
    }

    fn end_frame(&mut self) {
        std::mem::swap(&mut self.current, &mut self.last_frame);
        self.current.clear();
        if !self.offsets.is_empty() {
            log::warn!("frame ended with {} unpopped offsets", self.offsets.len());
            self.offsets.clear();
        }
    }

    fn abandon_frame(&mut self) {
        self.current.clear();
        self.offsets.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::paint::Color;
    use crate::surface::{SpriteCmd, TextureId};

    fn sprite_at(x: f32, y: f32) -> DrawCmd {
        DrawCmd::Sprite(SpriteCmd {
            texture: TextureId(1),
            rect: Rect::new(x, y, 4.0, 4.0),
            tint: Color::WHITE,
        })
    }

    fn origin_of(cmd: &DrawCmd) -> Vec2 {
        match cmd {
            DrawCmd::Sprite(s) => s.rect.origin,
            DrawCmd::Particles(p) => p.positions[0],
        }
    }

    // ── offsets ───────────────────────────────────────────────────────────

    #[test]
    fn nested_offsets_accumulate() {
        let mut s = RecordingSurface::new();
        s.push_offset(Vec2::new(10.0, 0.0));
        s.push_offset(Vec2::new(0.0, 5.0));
        s.submit(sprite_at(1.0, 1.0)).unwrap();
        s.pop_offset().unwrap();
        s.submit(sprite_at(1.0, 1.0)).unwrap();
        s.pop_offset().unwrap();
        s.submit(sprite_at(1.0, 1.0)).unwrap();

        let origins: Vec<_> = s.commands().iter().map(origin_of).collect();
        assert_eq!(
            origins,
            vec![Vec2::new(11.0, 6.0), Vec2::new(11.0, 1.0), Vec2::new(1.0, 1.0)]
        );
    }

    #[test]
    fn pop_without_push_is_an_error() {
        let mut s = RecordingSurface::new();
        assert_eq!(s.pop_offset(), Err(SurfaceError::UnbalancedOffset));
    }

    // ── budget ────────────────────────────────────────────────────────────

    #[test]
    fn budget_rejects_overflowing_submit() {
        let mut s = RecordingSurface::with_budget(1);
        s.submit(sprite_at(0.0, 0.0)).unwrap();
        assert_eq!(
            s.submit(sprite_at(0.0, 0.0)),
            Err(SurfaceError::BudgetExceeded { limit: 1 })
        );
        assert_eq!(s.commands().len(), 1);
    }

    #[test]
    fn budget_resets_each_frame() {
        let mut s = RecordingSurface::with_budget(1);
        s.begin_frame();
        s.submit(sprite_at(0.0, 0.0)).unwrap();
        s.end_frame();
        s.begin_frame();
        assert!(s.submit(sprite_at(0.0, 0.0)).is_ok());
    }

    // ── frame protocol ────────────────────────────────────────────────────

    #[test]
    fn end_frame_publishes_recording() {
        let mut s = RecordingSurface::new();
        s.begin_frame();
        s.submit(sprite_at(2.0, 3.0)).unwrap();
        s.end_frame();
        assert!(s.commands().is_empty());
        assert_eq!(s.last_frame(), &[sprite_at(2.0, 3.0)]);
    }

    #[test]
    fn abandon_frame_keeps_previous_frame() {
        let mut s = RecordingSurface::new();
        s.begin_frame();
        s.submit(sprite_at(1.0, 1.0)).unwrap();
        s.end_frame();

        s.begin_frame();
        s.push_offset(Vec2::new(3.0, 3.0));
        s.submit(sprite_at(9.0, 9.0)).unwrap();
        s.abandon_frame();

        assert!(s.commands().is_empty());
        assert_eq!(s.depth(), 0);
        assert_eq!(s.last_frame(), &[sprite_at(1.0, 1.0)]);
    }
}
