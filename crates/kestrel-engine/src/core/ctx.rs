use crate::scene::RenderList;
use crate::time::FrameTime;

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
pub struct FrameCtx<'a> {
    pub time: FrameTime,
    /// Root render list. Attach, detach and re-layer nodes here.
    pub scene: &'a mut RenderList,
    skip_render: bool,
}

impl<'a> FrameCtx<'a> {
    pub(crate) fn new(time: FrameTime, scene: &'a mut RenderList) -> Self {
        Self { time, scene, skip_render: false }
    }

    /// Asks the director not to render this frame.
    #[inline]
    pub fn skip_render(&mut self) {
        self.skip_render = true;
    }

    #[inline]
    pub fn render_skipped(&self) -> bool {
        self.skip_render
    }
}
