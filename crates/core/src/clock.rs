//! Gravity clock
//!
//! Accumulates frame time and reports when the next gravity tick is due.
//! Changing the interval or resetting the clock discards accumulated time,
//! so a level change or a pause/resume applies the new cadence at once.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravityClock {
    interval_ms: u32,
    elapsed_ms: u32,
}

impl GravityClock {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Time accumulated toward the next tick
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Switch to a new interval. No-op if the interval is unchanged.
    pub fn set_interval(&mut self, interval_ms: u32) {
        let interval_ms = interval_ms.max(1);
        if interval_ms != self.interval_ms {
            self.interval_ms = interval_ms;
            self.elapsed_ms = 0;
        }
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }

    /// Advance by `elapsed_ms`. Returns true when a tick is due.
    ///
    /// Time past the due point carries over to the next interval. At most
    /// one tick is reported per call, so after a long stall the carry is
    /// capped just short of another full interval.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms = (self.elapsed_ms - self.interval_ms).min(self.interval_ms - 1);
            return true;
        }
        false
    }
}
