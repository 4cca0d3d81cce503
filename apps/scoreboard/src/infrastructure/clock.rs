use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

use crate::domain::clock::Clock;

/// Wall clock backed by `Utc::now()`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock for tests and replays
///
/// Returns a settable instant. With a non-zero step, every reading moves the
/// clock forward by that step, so consecutive kick-offs get strictly
/// increasing timestamps.
///
/// # Example
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use scoreboard::domain::Clock;
/// use scoreboard::infrastructure::clock::ManualClock;
///
/// let start = Utc.with_ymd_and_hms(2026, 6, 11, 19, 0, 0).unwrap();
/// let clock = ManualClock::new(start).with_step(Duration::minutes(1));
///
/// assert_eq!(clock.now(), start);
/// assert_eq!(clock.now(), start + Duration::minutes(1));
/// ```
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl ManualClock {
    /// Creates a clock frozen at `start`
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(start),
            step: Duration::zero(),
        }
    }

    /// Advance automatically by `step` after every reading
    pub fn with_step(mut self, step: Duration) -> Self {
        self.step = step;
        self
    }

    /// Moves the clock to an arbitrary instant
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.lock() = instant;
    }

    /// Moves the clock forward, stopping at the latest representable instant
    pub fn advance(&self, by: Duration) {
        let mut current = self.lock();
        *current = saturating_add(*current, by);
    }

    /// Current reading without triggering the auto-step
    pub fn peek(&self) -> DateTime<Utc> {
        *self.lock()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        // A plain timestamp cannot be left half-written
        self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let mut current = self.lock();
        let reading = *current;
        *current = saturating_add(reading, self.step);
        reading
    }
}

fn saturating_add(instant: DateTime<Utc>, by: Duration) -> DateTime<Utc> {
    instant.checked_add_signed(by).unwrap_or(if by < Duration::zero() {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}
