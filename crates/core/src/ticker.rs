//! Fixed-interval scheduler
//!
//! The engine owns no timer. A front end feeds elapsed wall-clock time into a
//! [`FixedTicker`] and calls `Engine::tick()` once per tick it reports due.
//! Keeping time outside the engine lets tests drive it without sleeping.

/// Accumulates elapsed time and releases whole ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTicker {
    interval_ms: u32,
    accumulated_ms: u32,
}

impl FixedTicker {
    /// A zero interval is treated as 1 ms.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Add `elapsed_ms` and return how many ticks are now due.
    ///
    /// The remainder carries over to the next call.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let total = self.accumulated_ms.saturating_add(elapsed_ms);
        let due = total / self.interval_ms;
        self.accumulated_ms = total % self.interval_ms;
        due
    }

    /// Milliseconds until the next tick is due
    pub fn until_next_ms(&self) -> u32 {
        self.interval_ms - self.accumulated_ms
    }

    /// Drop any partially elapsed interval
    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn releases_whole_ticks_and_keeps_remainder() {
        let mut t = FixedTicker::new(100);
        assert_eq!(t.advance(50), 0);
        assert_eq!(t.until_next_ms(), 50);
        assert_eq!(t.advance(60), 1);
        assert_eq!(t.until_next_ms(), 90);
        assert_eq!(t.advance(250), 2);
        assert_eq!(t.until_next_ms(), 40);
    }

    #[test]
    fn reset_discards_partial_interval() {
        let mut t = FixedTicker::new(1300);
        t.advance(1000);
        t.reset();
        assert_eq!(t.until_next_ms(), 1300);
        assert_eq!(t.advance(1299), 0);
    }

    #[test]
    fn zero_interval_is_clamped() {
        let mut t = FixedTicker::new(0);
        assert_eq!(t.interval_ms(), 1);
        assert_eq!(t.advance(3), 3);
    }
}
