use std::cell::Cell;

use web_time::{Duration, Instant};

/// Source of "now" for every deferred action. The playground owns one; tests
/// swap in a [`ManualClock`].
pub trait Clock: 'static {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock you can drive deterministically.
pub struct ManualClock {
    t: Cell<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(t: Instant) -> Self {
        Self { t: Cell::new(t) }
    }

    pub fn advance(&self, by: Duration) {
        self.t.set(self.t.get() + by);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.t.get()
    }
}
