use std::time::{Duration, Instant};

/// Fixed-period deadline scheduler.
///
/// The first deadline is one period after the start, so a ticker behaves like
/// a loop of `sleep(period); work()`. When a poll arrives more than a full
/// period late, the missed periods are dropped and the next deadline is
/// measured from the poll time; a ticker fires at most once per poll.
///
/// Periods shorter than [`Ticker::MIN_PERIOD`] are raised to it.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next: Instant,
}

impl Ticker {
    pub const MIN_PERIOD: Duration = Duration::from_millis(1);

    /// Starts a ticker whose first deadline is `start + period`.
    pub fn starting_at(start: Instant, period: Duration) -> Self {
        let period = period.max(Self::MIN_PERIOD);
        Self { period, next: start + period }
    }

    /// Instant at which the next poll will fire.
    #[inline]
    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// Returns `true` (and schedules the next deadline) if `now` has reached
    /// the current deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }

        let late = now.saturating_duration_since(self.next);
        self.next = if late >= self.period {
            now + self.period
        } else {
            self.next + self.period
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(200);

    #[test]
    fn does_not_fire_before_first_period() {
        let start = Instant::now();
        let mut t = Ticker::starting_at(start, PERIOD);
        assert!(!t.poll(start));
        assert!(!t.poll(start + Duration::from_millis(199)));
    }

    #[test]
    fn fires_once_per_period_on_schedule() {
        let start = Instant::now();
        let mut t = Ticker::starting_at(start, PERIOD);
        let mut fired = 0;
        // Poll every 10 ms for one second.
        for ms in (0..=1000).step_by(10) {
            if t.poll(start + Duration::from_millis(ms)) {
                fired += 1;
            }
        }
        assert_eq!(fired, 5);
    }

    #[test]
    fn slightly_late_poll_keeps_phase() {
        let start = Instant::now();
        let mut t = Ticker::starting_at(start, PERIOD);
        assert!(t.poll(start + Duration::from_millis(230)));
        assert_eq!(t.deadline(), start + Duration::from_millis(400));
    }

    #[test]
    fn zero_period_still_advances_the_deadline() {
        let start = Instant::now();
        let mut t = Ticker::starting_at(start, Duration::ZERO);
        assert_eq!(t.deadline(), start + Ticker::MIN_PERIOD);
        assert!(!t.poll(start));
        assert!(t.poll(t.deadline()));
        assert!(!t.poll(start + Ticker::MIN_PERIOD));
    }

    #[test]
    fn long_stall_does_not_burst() {
        let start = Instant::now();
        let mut t = Ticker::starting_at(start, PERIOD);
        let resume = start + Duration::from_secs(5);
        assert!(t.poll(resume));
        assert!(!t.poll(resume));
        assert_eq!(t.deadline(), resume + PERIOD);
    }
}
