use std::time::{Duration, Instant};

/// Fixed-interval deadline generator for timer-driven animation.
///
/// The pacer behaves like a repeating UI timer: each [`poll`](Self::poll)
/// that reaches the deadline fires once and schedules the next deadline one
/// interval later. If the loop fell behind by more than a whole interval the
/// missed ticks are dropped rather than fired in a burst.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    next: Option<Instant>,
}

impl FramePacer {
    pub fn new(interval: Duration) -> Self {
        debug_assert!(!interval.is_zero());
        Self { interval, next: None }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arms the pacer so the first tick fires at `now`.
    pub fn start(&mut self, now: Instant) {
        self.next = Some(now);
    }

    /// Disarms the pacer; `poll` never fires until `start` is called again.
    pub fn stop(&mut self) {
        self.next = None;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    /// Next deadline, if armed.
    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Returns true once per elapsed deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next else { return false };
        if now < due {
            return false;
        }

        let mut next = due + self.interval;
        if next <= now {
            next = now + self.interval;
        }
        self.next = Some(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn idle_until_started() {
        let mut p = FramePacer::new(10 * MS);
        assert!(!p.poll(Instant::now()));
        assert!(p.deadline().is_none());
    }

    #[test]
    fn fires_once_per_interval() {
        let t0 = Instant::now();
        let mut p = FramePacer::new(10 * MS);
        p.start(t0);

        assert!(p.poll(t0));
        assert!(!p.poll(t0 + 5 * MS));
        assert!(p.poll(t0 + 10 * MS));
        assert_eq!(p.deadline(), Some(t0 + 20 * MS));
    }

    #[test]
    fn late_poll_keeps_cadence() {
        let t0 = Instant::now();
        let mut p = FramePacer::new(10 * MS);
        p.start(t0);
        p.poll(t0);

        // 3 ms late: the next deadline stays on the 10 ms grid.
        assert!(p.poll(t0 + 13 * MS));
        assert_eq!(p.deadline(), Some(t0 + 20 * MS));
    }

    #[test]
    fn stall_drops_missed_ticks() {
        let t0 = Instant::now();
        let mut p = FramePacer::new(10 * MS);
        p.start(t0);
        p.poll(t0);

        assert!(p.poll(t0 + 95 * MS));
        assert_eq!(p.deadline(), Some(t0 + 105 * MS));
        assert!(!p.poll(t0 + 100 * MS));
    }


    #[test]
    fn stop_disarms() {
        let t0 = Instant::now();
        let mut p = FramePacer::new(10 * MS);
        p.start(t0);
        p.stop();
        assert!(!p.is_running());
        assert!(!p.poll(t0 + 50 * MS));
    }
}
