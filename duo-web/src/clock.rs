use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;

/// Source of the current time for signing and expiration checks.
///
/// Every timestamp the protocol reads goes through this trait, so callers
/// can pin or step time in tests without touching the process clock.
pub trait Clock {
    /// Current wall-clock reading.
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Fixed clock at a Unix timestamp, or `None` if the timestamp is out of range.
    pub fn at_timestamp(seconds: i64) -> Option<Self> {
        DateTime::from_timestamp(seconds, 0).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_fixed_clock_never_moves() {
        let instant = Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap();
        let clock = FixedClock::new(instant);

        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now().timestamp(), 946684799);
    }

    #[test]
    fn test_fixed_clock_at_timestamp() {
        let clock = FixedClock::at_timestamp(946684799).expect("Timestamp in range");
        assert_eq!(
            clock.now(),
            Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap()
        );

        assert!(FixedClock::at_timestamp(i64::MAX).is_none());
    }

    #[test]
    fn test_system_clock_is_close_to_now() {
        let before = Utc::now();
        let reading = SystemClock.now();
        let after = Utc::now();

        assert!(before <= reading && reading <= after);
    }

    #[test]
    fn test_shared_clock_delegates() {
        let clock = Arc::new(FixedClock::at_timestamp(1000).unwrap());
        let by_ref = &clock;

        assert_eq!(clock.now().timestamp(), 1000);
        assert_eq!(by_ref.now().timestamp(), 1000);
    }
}
