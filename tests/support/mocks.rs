// tests/support/mocks.rs
use chrono::{DateTime, Duration, NaiveDate, Utc};
use eventboard::application::ports::time::Clock;
use once_cell::sync::Lazy;

/// Fixed timestamp so the not-past check and the upcoming window are
/// deterministic in tests.
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-05-15T12:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

#[derive(Clone)]
pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(*FIXED_NOW)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

pub fn today() -> NaiveDate {
    fixed_now().date_naive()
}

pub fn tomorrow() -> NaiveDate {
    today() + Duration::days(1)
}

pub fn yesterday() -> NaiveDate {
    today() - Duration::days(1)
}
