use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{MatchId, Score};

/// Domain events that occur during a match's life on the board
///
/// The scoreboard queues them as they happen; consumers such as a live
/// ticker drain the queue with
/// [`Scoreboard::drain_events`](crate::services::Scoreboard::drain_events).
///
/// # Example
/// ```
/// use scoreboard::domain::football_match::events::MatchEvent;
/// use scoreboard::domain::football_match::value_objects::{MatchId, Score};
///
/// let match_id = MatchId::new();
/// let event = MatchEvent::ScoreUpdated {
///     match_id,
///     previous: Score::default(),
///     current: Score { home: 1, away: 0 },
/// };
/// assert_eq!(event.match_id(), match_id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// Fired when a match kicks off
    Started {
        match_id: MatchId,
        home_team: String,
        away_team: String,
        started_at: DateTime<Utc>,
    },
    /// Fired when the score changes
    ScoreUpdated {
        match_id: MatchId,
        previous: Score,
        current: Score,
    },
    /// Fired when a match leaves the board
    Finished {
        match_id: MatchId,
        /// Score at the final whistle
        final_score: Score,
    },
}

impl MatchEvent {
    /// Returns the match_id for this event
    pub fn match_id(&self) -> MatchId {
        match self {
            MatchEvent::Started { match_id, .. } => *match_id,
            MatchEvent::ScoreUpdated { match_id, .. } => *match_id,
            MatchEvent::Finished { match_id, .. } => *match_id,
        }
    }
}
