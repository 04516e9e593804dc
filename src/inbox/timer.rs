//! Fixed-interval refresh schedule.

use std::time::{Duration, Instant};

/// A repeating timer driven by the event loop's clock.
///
/// Started when the viewer mounts and stopped on teardown. While running it
/// fires once per elapsed interval; missed ticks are not replayed.
#[derive(Debug, Clone)]
pub struct RefreshTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl RefreshTimer {
    /// A stopped timer with the given period.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arm the timer; the first tick fires one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    /// Disarm the timer. Further polls never fire.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns `true` if a tick is due at `now`, and schedules the next one.
    pub fn poll_due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, if running.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_timer_never_fires() {
        let mut timer = RefreshTimer::new(Duration::from_secs(10));
        let now = Instant::now();
        assert!(!timer.is_running());
        assert!(!timer.poll_due(now + Duration::from_secs(60)));
    }

    #[test]
    fn test_fires_once_per_interval() {
        let mut timer = RefreshTimer::new(Duration::from_secs(10));
        let t0 = Instant::now();
        timer.start(t0);

        assert!(!timer.poll_due(t0 + Duration::from_secs(9)));
        assert!(timer.poll_due(t0 + Duration::from_secs(10)));
        assert!(!timer.poll_due(t0 + Duration::from_secs(11)));
        assert!(timer.poll_due(t0 + Duration::from_secs(20)));
    }

    #[test]
    fn test_missed_ticks_collapse() {
        let mut timer = RefreshTimer::new(Duration::from_secs(10));
        let t0 = Instant::now();
        timer.start(t0);

        let late = t0 + Duration::from_secs(45);
        assert!(timer.poll_due(late));
        assert!(!timer.poll_due(late));
        assert_eq!(timer.time_until_due(late), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_stop_cancels() {
        let mut timer = RefreshTimer::new(Duration::from_secs(1));
        let t0 = Instant::now();
        timer.start(t0);
        timer.stop();
        assert!(!timer.is_running());
        assert!(!timer.poll_due(t0 + Duration::from_secs(5)));
        assert_eq!(timer.time_until_due(t0), None);
    }
}
