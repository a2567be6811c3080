use std::time::Instant;

use crate::scene::RenderList;
use crate::surface::DrawSurface;
use crate::time::{FrameClock, FrameTime};

use super::{App, AppControl, EngineConfig, FrameCtx, VisitFailurePolicy};

/// Frame counters accumulated by a [`Director`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameStats {
    /// Frames whose every node visited successfully.
    pub rendered: u64,
    /// Frames the app asked not to render.
    pub skipped: u64,
    /// Frames discarded after a visit failure.
    pub abandoned: u64,
}

/// Owns the root scene, the clock and the surface, and runs frames.
///
/// Per frame:
/// 1) tick the clock
/// 2) `App::on_frame` (scene mutation, exit or skip requests)
/// 3) `begin_frame`, `RenderList::render`, then `end_frame` or `abandon_frame`
///
/// Skip decisions are made before `render` is called; a started traversal is
/// never cut short by the director.
pub struct Director<S: DrawSurface> {
    config: EngineConfig,
    clock: FrameClock,
    scene: RenderList,
    surface: S,
    stats: FrameStats,
}

impl<S: DrawSurface> Director<S> {
    pub fn new(config: EngineConfig, surface: S) -> Self {
        Self {
            clock: FrameClock::new(config.clock),
            config,
            scene: RenderList::new(),
            surface,
            stats: FrameStats::default(),
        }
    }

    #[inline]
    pub fn scene(&self) -> &RenderList {
        &self.scene
    }

    #[inline]
    pub fn scene_mut(&mut self) -> &mut RenderList {
        &mut self.scene
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Runs one frame timed against the wall clock.
    pub fn run_frame<A: App>(&mut self, app: &mut A) -> AppControl {
        let time = self.clock.tick();
        self.frame(app, time)
    }

    /// Runs one frame as if it started at `now`.
    pub fn run_frame_at<A: App>(&mut self, app: &mut A, now: Instant) -> AppControl {
        let time = self.clock.tick_at(now);
        self.frame(app, time)
    }

    /// Runs frames until the app exits, the failure policy stops the loop, or
    /// `max_frames` frames have run.
    pub fn run<A: App>(&mut self, app: &mut A, max_frames: Option<u64>) -> FrameStats {
        log::info!("frame loop starting ({} nodes attached)", self.scene.len());

        let mut frames = 0u64;
        while max_frames.is_none_or(|max| frames < max) {
            frames += 1;
            if self.run_frame(app) == AppControl::Exit {
                break;
            }
        }

        log::info!(
            "frame loop stopped after {frames} frames ({} rendered, {} skipped, {} abandoned)",
            self.stats.rendered,
            self.stats.skipped,
            self.stats.abandoned,
        );
        self.stats
    }

    fn frame<A: App>(&mut self, app: &mut A, time: FrameTime) -> AppControl {
        let mut ctx = FrameCtx::new(time, &mut self.scene);
        let control = app.on_frame(&mut ctx);
        let skip = ctx.render_skipped();

        if control == AppControl::Exit {
            log::debug!("frame {}: app requested exit", time.frame_index);
            return AppControl::Exit;
        }
        if skip {
            self.stats.skipped += 1;
            log::debug!("frame {}: render skipped", time.frame_index);
            return AppControl::Continue;
        }

        self.surface.begin_frame();
        match self.scene.render(&mut self.surface) {
            Ok(()) => {
                self.surface.end_frame();
                self.stats.rendered += 1;
                AppControl::Continue
            }
            Err(err) => {
                self.surface.abandon_frame();
                self.stats.abandoned += 1;

                match self.config.on_visit_failure {
                    VisitFailurePolicy::AbandonFrame => {
                        log::warn!("frame {} abandoned: {err:#}", time.frame_index);
                        AppControl::Continue
                    }
                    VisitFailurePolicy::Exit => {
                        log::error!("frame {} failed, stopping: {err:#}", time.frame_index);
                        AppControl::Exit
                    }
                }
            }
        }
    }
}
