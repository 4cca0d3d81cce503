use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Source of the current time
///
/// The scoreboard only reads it to stamp a match's kick-off, which in turn
/// drives the summary tie-break. Tests substitute a deterministic clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

