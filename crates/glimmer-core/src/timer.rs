use web_time::{Duration, Instant};

/// A single cancellable deadline.
///
/// Every owner of deferred work (a surface's auto-hide, a target's marker
/// removal, a panel's pending content) holds exactly one `OneShot`. Arming it
/// again replaces the previous deadline, so two callbacks for the same owner
/// can never be pending at once. Nothing fires on its own: the owner calls
/// [`OneShot::fire`] from its `poll`, the same way animated values are
/// advanced once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OneShot {
    deadline: Option<Instant>,
}

impl OneShot {
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arms the timer for `now + delay`. Returns true if an earlier deadline
    /// was replaced.
    pub fn arm(&mut self, now: Instant, delay: Duration) -> bool {
        self.deadline.replace(now + delay).is_some()
    }

    /// Returns true if the timer was armed.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Disarms and returns true if the deadline has been reached.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Earliest of two optional deadlines.
pub fn earliest(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_deadline() {
        let t0 = Instant::now();
        let mut t = OneShot::new();
        assert!(!t.arm(t0, Duration::from_millis(100)));

        assert!(!t.fire(t0 + Duration::from_millis(99)));
        assert!(t.fire(t0 + Duration::from_millis(100)));
        assert!(!t.is_armed());
        assert!(!t.fire(t0 + Duration::from_millis(500)));
    }

    #[test]
    fn rearm_replaces_deadline() {
        let t0 = Instant::now();
        let mut t = OneShot::new();
        t.arm(t0, Duration::from_millis(100));
        assert!(t.arm(t0 + Duration::from_millis(80), Duration::from_millis(100)));

        assert!(!t.fire(t0 + Duration::from_millis(150)));
        assert_eq!(
            t.remaining(t0 + Duration::from_millis(150)),
            Some(Duration::from_millis(30))
        );
        assert!(t.fire(t0 + Duration::from_millis(180)));
    }

    #[test]
    fn cancel_disarms() {
        let t0 = Instant::now();
        let mut t = OneShot::new();
        assert!(!t.cancel());
        t.arm(t0, Duration::ZERO);
        assert!(t.cancel());
        assert!(!t.fire(t0 + Duration::from_secs(1)));
    }
}
