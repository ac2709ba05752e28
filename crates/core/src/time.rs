use chrono::{DateTime, Duration, Utc};

/// Source of "now" for session timestamps.
///
/// Services take a `Clock` by value so tests can pin time with [`Clock::Fixed`].
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(at) => *at,
        }
    }

    /// Time elapsed between `since` and now, floored at zero.
    #[must_use]
    pub fn elapsed(&self, since: DateTime<Utc>) -> Duration {
        let delta = self.now() - since;
        if delta < Duration::zero() {
            Duration::zero()
        } else {
            delta
        }
    }
}

/// Deterministic timestamp for tests (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Returns a deterministic `DateTime<Utc>` for tests.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_pinned_time() {
        let clock = Clock::fixed(fixed_now());
        assert_eq!(clock.now(), fixed_now());
        assert_eq!(clock.elapsed(fixed_now()), Duration::zero());
    }

    #[test]
    fn elapsed_never_goes_negative() {
        let clock = Clock::fixed(fixed_now());
        let later = fixed_now() + Duration::minutes(5);
        assert_eq!(clock.elapsed(later), Duration::zero());
        assert_eq!(
            clock.elapsed(fixed_now() - Duration::seconds(90)),
            Duration::seconds(90)
        );
    }
}
