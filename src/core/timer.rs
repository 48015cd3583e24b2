//! Self-contained timers - manage internal state, no Frame dependency
//! Each timer accumulates delta time and decides when to fire

/// Repeating timer - fires once the accumulated time reaches the interval,
/// then starts over from zero (leftover time is dropped)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    interval: f32,
    elapsed: f32,
}

impl Interval {
    /// Create timer that fires every `interval` seconds
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
        }
    }

    /// Update with delta, returns true if should fire
    pub fn tick(&mut self, delta: f32) -> bool {
        self.elapsed += delta;

        if self.elapsed >= self.interval {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }

    /// Seconds accumulated towards the next fire
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

/// Windowed rate meter - reports events per second once per window
#[derive(Debug, Clone, Copy)]
pub struct RateMeter {
    window: f32,
    count: u32,
    elapsed: f32,
}

impl RateMeter {
    pub fn new(window: f32) -> Self {
        Self {
            window,
            count: 0,
            elapsed: 0.0,
        }
    }

    /// Count one event. Returns the rate when a window closes
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        self.count += 1;
        self.elapsed += delta;

        if self.elapsed >= self.window {
            let rate = self.count as f32 / self.elapsed;
            self.count = 0;
            self.elapsed = 0.0;
            Some(rate)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_fires_at_threshold() {
        let mut timer = Interval::new(4.0);

        assert!(!timer.tick(1.5));
        assert!(!timer.tick(2.0));
        assert!(timer.tick(0.5)); // Total 4.0s
        assert_eq!(timer.elapsed(), 0.0);
    }

    #[test]
    fn interval_drops_overshoot() {
        let mut timer = Interval::new(1.0);

        assert!(timer.tick(1.7));
        // Overshoot is not carried into the next period
        assert!(!timer.tick(0.5));
    }

    #[test]
    fn rate_meter_reports_once_per_window() {
        let mut meter = RateMeter::new(1.0);

        for _ in 0..9 {
            assert_eq!(meter.tick(0.1), None);
        }
        let rate = meter.tick(0.1).unwrap();
        assert!((rate - 10.0).abs() < 1e-3);
        assert_eq!(meter.tick(0.1), None);
    }
}
