use std::time::{Duration, Instant};

use tracing::trace;

/// Fixed-interval tick source driven by a cooperative event loop.
///
/// The scheduler never spawns a timer of its own: the owner polls it with the
/// current time. Disarming drops the pending deadline, so once `disarm`
/// returns no later `poll` can report a tick until `arm` is called again.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval: Duration,
    next_deadline: Option<Instant>,
}

impl TickScheduler {
    /// Creates a disarmed scheduler.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_deadline: None,
        }
    }

    /// Returns the configured tick interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true while a deadline is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.next_deadline.is_some()
    }

    /// Schedules the first tick one interval after `now`.
    ///
    /// Re-arming an armed scheduler replaces its deadline; there is never
    /// more than one pending tick.
    pub fn arm(&mut self, now: Instant) {
        self.next_deadline = Some(now + self.interval);
        let interval_ms = u64::try_from(self.interval.as_millis()).unwrap_or(u64::MAX);
        trace!(interval_ms, "tick scheduler armed");
    }

    /// Invalidates the pending deadline. Idempotent.
    pub fn disarm(&mut self) {
        if self.next_deadline.take().is_some() {
            trace!("tick scheduler disarmed");
        }
    }

    /// Returns true when a tick is due at `now`, and schedules the next one.
    ///
    /// At most one tick is reported per call. If the loop fell behind by more
    /// than one interval, the missed ticks are skipped rather than replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.next_deadline else {
            return false;
        };

        if now < deadline {
            return false;
        }

        let next = deadline + self.interval;
        self.next_deadline = Some(if next > now { next } else { now + self.interval });
        true
    }

    /// Time remaining until the next deadline, or `None` when disarmed.
    #[must_use]
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::TickScheduler;

    const INTERVAL: Duration = Duration::from_millis(150);

    #[test]
    fn disarmed_scheduler_never_fires() {
        let mut scheduler = TickScheduler::new(INTERVAL);
        let now = Instant::now();

        assert!(!scheduler.poll(now + Duration::from_secs(60)));
        assert_eq!(scheduler.time_until_next(now), None);
    }

    #[test]
    fn armed_scheduler_fires_once_per_interval() {
        let mut scheduler = TickScheduler::new(INTERVAL);
        let start = Instant::now();
        scheduler.arm(start);

        assert!(!scheduler.poll(start + Duration::from_millis(149)));
        assert!(scheduler.poll(start + INTERVAL));
        assert!(!scheduler.poll(start + INTERVAL));
        assert!(scheduler.poll(start + INTERVAL * 2));
    }

    #[test]
    fn disarm_invalidates_pending_deadline() {
        let mut scheduler = TickScheduler::new(INTERVAL);
        let start = Instant::now();
        scheduler.arm(start);

        scheduler.disarm();
        scheduler.disarm();

        assert!(!scheduler.is_armed());
        assert!(!scheduler.poll(start + INTERVAL * 10));
    }

    #[test]
    fn rearming_keeps_a_single_deadline() {
        let mut scheduler = TickScheduler::new(INTERVAL);
        let start = Instant::now();
        scheduler.arm(start);
        scheduler.arm(start + Duration::from_millis(100));

        assert!(!scheduler.poll(start + INTERVAL));
        assert!(scheduler.poll(start + Duration::from_millis(250)));
    }

    #[test]
    fn missed_intervals_are_skipped_not_replayed() {
        let mut scheduler = TickScheduler::new(INTERVAL);
        let start = Instant::now();
        scheduler.arm(start);

        let late = start + INTERVAL * 5;
        assert!(scheduler.poll(late));
        assert!(!scheduler.poll(late));
        assert_eq!(scheduler.time_until_next(late), Some(INTERVAL));
    }
}
