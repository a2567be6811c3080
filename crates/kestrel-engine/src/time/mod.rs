//! Frame timing.
//!
//! One `FrameClock` per frame loop; call `tick()` once per frame to obtain `FrameTime`.

mod frame_clock;

pub use frame_clock::{ClockConfig, FrameClock, FrameTime};
