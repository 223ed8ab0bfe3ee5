//! Cooperative tick cadences for the periodic simulation tasks.
//!
//! The engine never blocks; an external loop owns the clock and polls each
//! timer. Pose integration, scanning and any render refresh run on
//! independently configured cadences.

use std::time::{Duration, Instant};

/// Tick period for a frequency in hertz, `None` when the frequency is not
/// positive.
pub fn interval(hz: f64) -> Option<Duration> {
    (hz > 0.0).then(|| Duration::from_secs_f64(1.0 / hz))
}

/// Due-time tracker for one periodic task.
///
/// `poll` reports whether the task is due and re-arms the deadline from
/// `now`, so missed periods coalesce into a single tick. A frequency change
/// takes effect at the next re-arm; an already armed deadline is never
/// moved.
#[derive(Clone, Copy, Debug)]
pub struct TickTimer {
    period: Duration,
    next_due: Instant,
}

impl TickTimer {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn set_frequency(&mut self, hz: f64) {
        match interval(hz) {
            Some(period) => self.period = period,
            None => log::warn!("ignoring non-positive tick frequency {hz} Hz"),
        }
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.period;
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_interval() {
        assert_eq!(interval(20.0), Some(Duration::from_millis(50)));
        assert_eq!(interval(0.0), None);
        assert_eq!(interval(-1.0), None);
    }

    #[test]
    fn test_timer_fires_once_per_period() {
        let start = Instant::now();
        let mut timer = TickTimer::new(Duration::from_millis(100), start);

        assert!(!timer.poll(start));
        assert!(!timer.poll(start + Duration::from_millis(99)));
        assert!(timer.poll(start + Duration::from_millis(100)));
        assert!(!timer.poll(start + Duration::from_millis(150)));
        assert!(timer.poll(start + Duration::from_millis(200)));
    }

    #[test]
    fn test_missed_periods_coalesce() {
        let start = Instant::now();
        let mut timer = TickTimer::new(Duration::from_millis(100), start);

        // Several periods elapse unobserved; only one tick is reported.
        assert!(timer.poll(start + Duration::from_millis(450)));
        assert!(!timer.poll(start + Duration::from_millis(500)));
        assert!(timer.poll(start + Duration::from_millis(550)));
    }

    #[test]
    fn test_frequency_change_applies_at_next_rearm() {
        let start = Instant::now();
        let mut timer = TickTimer::new(Duration::from_millis(100), start);

        timer.set_frequency(50.0);
        // The armed deadline is unchanged.
        assert!(!timer.poll(start + Duration::from_millis(50)));
        assert!(timer.poll(start + Duration::from_millis(100)));
        // From here on the new 20 ms period is in effect.
        assert!(timer.poll(start + Duration::from_millis(120)));
    }

    #[test]
    fn test_non_positive_frequency_is_ignored() {
        let start = Instant::now();
        let mut timer = TickTimer::new(Duration::from_millis(100), start);
        timer.set_frequency(0.0);
        assert_eq!(timer.period(), Duration::from_millis(100));
    }
}
