//! Monotonic event clock.
//!
//! Event timestamps are nanoseconds since the owning subsystem started. The
//! clock is only monotonic per reader; events stamped on different producer
//! threads may arrive slightly out of order.

use std::time::{Duration, Instant};

/// Nanosecond clock anchored at its creation instant.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    started_at: Instant,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    /// Start a clock at the current instant.
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// Nanoseconds elapsed since the clock started.
    ///
    /// Never returns `0`, so that a stamped timestamp is always distinguishable
    /// from "not stamped yet".
    pub fn now_ns(&self) -> u64 {
        let ns = u64::try_from(self.started_at.elapsed().as_nanos()).unwrap_or(u64::MAX);
        ns.max(1)
    }

    /// Time elapsed since the clock started.
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_never_zero() {
        let clock = Clock::new();
        assert!(clock.now_ns() >= 1);
    }

    #[test]
    fn now_is_monotonic_on_one_thread() {
        let clock = Clock::new();
        let a = clock.now_ns();
        std::thread::sleep(Duration::from_millis(2));
        let b = clock.now_ns();
        assert!(b > a);
        assert!(clock.elapsed() >= Duration::from_millis(2));
    }
}
