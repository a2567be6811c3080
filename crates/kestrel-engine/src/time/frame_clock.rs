use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Clamped time since the previous tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

/// Delta-time clamps.
///
/// The minimum avoids zero-dt frames from tight loops; the maximum keeps
/// simulations stable after stalls (debugger pauses, minimized windows).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockConfig {
    pub dt_min: Duration,
    pub dt_max: Duration,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
        }
    }
}

/// Produces `FrameTime` snapshots with clamped delta time.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    config: ClockConfig,
}

impl FrameClock {
    pub fn new(config: ClockConfig) -> Self {
        Self::starting_at(config, Instant::now())
    }

    /// Creates a clock whose first tick measures from `start`.
    pub fn starting_at(config: ClockConfig, start: Instant) -> Self {
        debug_assert!(config.dt_min <= config.dt_max);
        Self { last: start, frame_index: 0, config }
    }

    #[inline]
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now` and returns a new `FrameTime`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.config.dt_min, self.config.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(start: Instant) -> FrameClock {
        FrameClock::starting_at(ClockConfig::default(), start)
    }

    #[test]
    fn frame_index_counts_from_zero() {
        let t0 = Instant::now();
        let mut c = clock(t0);
        assert_eq!(c.tick_at(t0 + Duration::from_millis(16)).frame_index, 0);
        assert_eq!(c.tick_at(t0 + Duration::from_millis(32)).frame_index, 1);
    }

    #[test]
    fn dt_measures_between_ticks() {
        let t0 = Instant::now();
        let mut c = clock(t0);
        let ft = c.tick_at(t0 + Duration::from_millis(20));
        assert!((ft.dt - 0.020).abs() < 1e-6);
    }

    #[test]
    fn dt_is_clamped_after_stall() {
        let t0 = Instant::now();
        let mut c = clock(t0);
        assert_eq!(c.tick_at(t0 + Duration::from_secs(5)).dt, 0.25);
    }

    #[test]
    fn dt_has_a_floor() {
        let t0 = Instant::now();
        let mut c = clock(t0);
        // Going backwards saturates to zero, then clamps up.
        let ft = c.tick_at(t0);
        assert!((ft.dt - 0.0001).abs() < 1e-7);
    }
}
