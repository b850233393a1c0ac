use std::time::{Duration, Instant};

/// Edge-triggered fixed-interval timer for simulation ticks.
///
/// Polled once per frame; fires at most once per poll and restarts the
/// interval from the poll that fired.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    interval: Duration,
    last_tick: Instant,
}

impl TickClock {
    /// Starts the clock at `now`; the first tick fires one interval later.
    #[must_use]
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_tick: now,
        }
    }

    /// Returns true when at least one interval has elapsed since the last tick.
    pub fn tick_due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) >= self.interval {
            self.last_tick = now;
            return true;
        }
        false
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
