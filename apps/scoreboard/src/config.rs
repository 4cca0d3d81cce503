//! Scoreboard configuration
//!
//! Values come from the process environment, optionally seeded from a
//! `.env` file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::{ScoreboardError, ScoreboardResult};

/// Environment variable selecting the [`LookupMode`]
pub const LOOKUP_MODE_VAR: &str = "SCOREBOARD_LOOKUP_MODE";

/// Environment variable bounding the event outbox, `0` disables it
pub const EVENT_CAPACITY_VAR: &str = "SCOREBOARD_EVENT_CAPACITY";

/// How `update_score` and `finish_match` pair caller names with a match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupMode {
    /// Caller's home must be the match's home, away must be away
    #[default]
    Exact,
    /// A swapped home/away pair also finds the match
    Either,
}

impl FromStr for LookupMode {
    type Err = ScoreboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exact" => Ok(LookupMode::Exact),
            "either" => Ok(LookupMode::Either),
            other => Err(ScoreboardError::Config(format!(
                "{} must be \"exact\" or \"either\", got {:?}",
                LOOKUP_MODE_VAR, other
            ))),
        }
    }
}

impl fmt::Display for LookupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupMode::Exact => write!(f, "exact"),
            LookupMode::Either => write!(f, "either"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreboardConfig {
    pub lookup_mode: LookupMode,
    /// Most events the outbox holds before dropping the oldest.
    /// Zero, the default, records no events at all.
    pub event_capacity: usize,
}

impl ScoreboardConfig {
    /// Loads `.env` if present, then reads the environment
    pub fn from_env() -> ScoreboardResult<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key/value source
    ///
    /// Missing keys fall back to defaults; malformed values are errors.
    pub fn from_lookup<F>(lookup: F) -> ScoreboardResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup_mode = match lookup(LOOKUP_MODE_VAR) {
            Some(raw) => raw.parse()?,
            None => {
                tracing::debug!("{} not set, using default", LOOKUP_MODE_VAR);
                LookupMode::default()
            }
        };

        let event_capacity = match lookup(EVENT_CAPACITY_VAR) {
            Some(raw) => raw.trim().parse().map_err(|_| {
                ScoreboardError::Config(format!(
                    "{} must be a non-negative integer, got {:?}",
                    EVENT_CAPACITY_VAR, raw
                ))
            })?,
            None => 0,
        };

        Ok(Self {
            lookup_mode,
            event_capacity,
        })
    }

    pub fn with_lookup_mode(mut self, lookup_mode: LookupMode) -> Self {
        self.lookup_mode = lookup_mode;
        self
    }

    pub fn with_event_capacity(mut self, event_capacity: usize) -> Self {
        self.event_capacity = event_capacity;
        self
    }
}
