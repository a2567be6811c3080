//! Frame loop and the contracts between it and application code.
//!
//! `Director` is an explicitly constructed context (no process-wide singleton):
//! it owns the root render list, the frame clock and the draw surface, and
//! drives one `App` frame by frame.

mod app;
mod config;
mod ctx;
mod director;

pub use app::{App, AppControl};
pub use config::{EngineConfig, VisitFailurePolicy};
pub use ctx::FrameCtx;
pub use director::{Director, FrameStats};
