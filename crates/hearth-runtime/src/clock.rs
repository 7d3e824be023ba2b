//! Frame clock measuring wall-clock time between host frames

use std::time::Instant;

/// Largest frame delta handed to systems, in seconds
pub const DEFAULT_MAX_DELTA: f64 = 0.1;

/// Tracks elapsed time between frames.
///
/// Uses the actual time since the previous frame, not a fixed step. Deltas are
/// clamped to `[0, max_delta]` so a hidden window or a clock jump never
/// produces a teleport-sized step.
#[derive(Debug)]
pub struct FrameClock {
    /// Total simulated time in seconds (sum of clamped deltas)
    pub total_time: f64,
    /// Clamped time since last frame in seconds
    pub delta_time: f64,
    /// Upper bound for `delta_time`
    pub max_delta: f64,
    /// Whether the last delta had to be clamped
    pub clamped: bool,
    /// Last tick instant
    last_instant: Instant,
    /// Whether this is the first tick
    first_tick: bool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            max_delta: DEFAULT_MAX_DELTA,
            clamped: false,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_delta(max_delta: f64) -> Self {
        Self {
            max_delta,
            ..Self::default()
        }
    }

    /// Advance the clock from the wall clock. Call once per frame.
    pub fn tick(&mut self) {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.delta_time = 0.0;
            self.clamped = false;
            return;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;
        self.apply(elapsed);
    }

    /// Advance the clock by an externally measured elapsed time.
    pub fn advance(&mut self, elapsed: f64) {
        self.first_tick = false;
        self.last_instant = Instant::now();
        self.apply(elapsed);
    }

    fn apply(&mut self, elapsed: f64) {
        let delta = clamp_delta(elapsed, self.max_delta);
        self.clamped = delta != elapsed;
        if self.clamped {
            log::warn!("frame delta {:.4}s clamped to {:.4}s", elapsed, delta);
        }
        self.delta_time = delta;
        self.total_time += delta;
    }
}

/// Clamp a raw delta into `[0, max]`. Non-finite input counts as zero.
pub(crate) fn clamp_delta(elapsed: f64, max: f64) -> f64 {
    if !elapsed.is_finite() || elapsed <= 0.0 {
        return 0.0;
    }
    elapsed.min(max.max(0.0))
}
