use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by [`Director`](super::Director).
pub trait App {
    /// Called once per frame, before the scene is rendered.
    ///
    /// Returning [`AppControl::Exit`] stops the loop without rendering this frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}

impl<F> App for F
where
    F: FnMut(&mut FrameCtx<'_>) -> AppControl,
{
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        self(ctx)
    }
}
