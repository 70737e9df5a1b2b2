use std::time::{Duration, Instant};

/// Fixed-period schedule measured against the wall clock.
pub(crate) struct Ticker {
    next: Instant,
    period: Duration,
}

impl Ticker {
    pub(crate) fn new(now: Instant, period: Duration) -> Ticker {
        assert!(period > Duration::ZERO);
        Ticker {
            next: now + period,
            period,
        }
    }

    /// Consumes one due tick, if any. Call in a loop to catch up on missed ticks.
    pub(crate) fn tick(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }

        self.next += self.period;
        true
    }

    pub(crate) fn until_next(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }
}
