use std::time::Instant;

/// Longest frame delta handed to the simulation, in seconds.
/// A stalled window (drag, breakpoint) must not teleport falling objects.
pub const MAX_DELTA: f32 = 0.25;

/// Minimal frame clock - just tracks delta time
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Get delta time since last tick and advance clock.
    /// Returns delta in seconds, capped at [`MAX_DELTA`]
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta.min(MAX_DELTA)
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
