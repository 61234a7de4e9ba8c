use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use parking_lot::Mutex;

/// Wall clock that never repeats or goes backwards within one process.
///
/// Readings are truncated to microseconds so they survive a round trip
/// through any supported database without reordering.
#[derive(Debug, Default)]
pub struct MonotonicClock {
    last: Mutex<Option<DateTime<Utc>>>,
}

impl MonotonicClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.next_after(Utc::now())
    }

    fn next_after(&self, reading: DateTime<Utc>) -> DateTime<Utc> {
        let reading = reading.trunc_subsecs(6);
        let mut last = self.last.lock();
        let ts = match *last {
            Some(prev) if reading <= prev => prev + TimeDelta::microseconds(1),
            _ => reading,
        };
        *last = Some(ts);
        ts
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn readings_strictly_increase() {
        let clock = MonotonicClock::new();
        let mut prev = clock.now();
        for _ in 0..1000 {
            let next = clock.now();
            assert!(next > prev);
            prev = next;
        }
    }

    #[test]
    fn backwards_wall_clock_is_absorbed() {
        let clock = MonotonicClock::new();
        let t0 = DateTime::parse_from_rfc3339("2026-01-01T12:00:00.000010Z")
            .unwrap()
            .with_timezone(&Utc);
        let earlier = t0 - TimeDelta::seconds(5);

        assert_eq!(clock.next_after(t0), t0);
        assert_eq!(clock.next_after(earlier), t0 + TimeDelta::microseconds(1));
        assert_eq!(clock.next_after(t0), t0 + TimeDelta::microseconds(2));
    }

    #[test]
    fn sub_microsecond_precision_is_dropped() {
        let clock = MonotonicClock::new();
        let t = DateTime::parse_from_rfc3339("2026-01-01T12:00:00.123456789Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(clock.next_after(t).timestamp_subsec_nanos(), 123_456_000);
    }
}
