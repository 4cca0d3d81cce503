use super::events::MatchEvent;
use super::value_objects::{MatchId, Score, TeamName};
use crate::domain::clock::Clock;
use crate::domain::errors::{ScoreboardError, ScoreboardResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Match entity
///
/// Represents one football game currently in progress.
/// Owns the rule that a score never goes down.
///
/// # Invariants
/// - Both team names are non-empty after trimming
/// - Team names and kick-off time never change
/// - Scores start at 0-0 and are monotonically non-decreasing
///
/// That home and away differ is checked by the
/// [`Scoreboard`](crate::services::Scoreboard) when a match starts, and again
/// when a match is deserialized.
///
/// # Example
/// ```
/// use chrono::Utc;
/// use scoreboard::domain::football_match::Match;
///
/// let mut game = Match::new("Spain", "Brazil", Utc::now()).expect("valid match");
/// game.update_score(10, 2).expect("score goes up");
///
/// assert_eq!(game.total_score(), 12);
/// assert_eq!(game.to_string(), "Spain 10 - Brazil 2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MatchRecord")]
pub struct Match {
    id: MatchId,
    home_team: TeamName,
    away_team: TeamName,
    score: Score,
    started_at: DateTime<Utc>,
}

impl Match {
    /// Creates a new Match at 0-0
    ///
    /// # Arguments
    /// * `home_team` - Home side name (trimmed, cannot be empty)
    /// * `away_team` - Away side name (trimmed, cannot be empty)
    /// * `started_at` - Kick-off time
    ///
    /// # Returns
    /// * `Ok(Match)` - New match with a fresh id
    /// * `Err(ScoreboardError::InvalidTeamName)` - If either name is blank
    pub fn new(
        home_team: impl AsRef<str>,
        away_team: impl AsRef<str>,
        started_at: DateTime<Utc>,
    ) -> ScoreboardResult<Self> {
        let home_team = TeamName::new(home_team)?;
        let away_team = TeamName::new(away_team)?;

        Ok(Self::from_parts(home_team, away_team, started_at))
    }

    /// Creates a new Match that kicks off at the clock's current time
    pub fn start<C: Clock + ?Sized>(
        home_team: impl AsRef<str>,
        away_team: impl AsRef<str>,
        clock: &C,
    ) -> ScoreboardResult<Self> {
        Self::new(home_team, away_team, clock.now())
    }

    pub(crate) fn from_parts(
        home_team: TeamName,
        away_team: TeamName,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: MatchId::new(),
            home_team,
            away_team,
            score: Score::default(),
            started_at,
        }
    }

    /// Replaces both scores at once
    ///
    /// # Returns
    /// * `Ok(MatchEvent::ScoreUpdated)` - With the previous and new score
    /// * `Err(ScoreboardError::NegativeScore)` - If either value is negative
    /// * `Err(ScoreboardError::ScoreReduced)` - If either side would go down
    ///
    /// The stored score is untouched on failure.
    pub fn update_score(&mut self, home_score: i32, away_score: i32) -> ScoreboardResult<MatchEvent> {
        let next = Score::new(home_score, away_score)?;
        self.advance_to(next)
    }

    fn advance_to(&mut self, next: Score) -> ScoreboardResult<MatchEvent> {
        if !self.score.can_advance_to(next) {
            return Err(ScoreboardError::ScoreReduced {
                current_home: self.score.home,
                current_away: self.score.away,
                home: next.home,
                away: next.away,
            });
        }

        let previous = self.score;
        self.score = next;

        Ok(MatchEvent::ScoreUpdated {
            match_id: self.id,
            previous,
            current: next,
        })
    }

    /// Whether the given team plays on either side of this match
    pub fn involves(&self, team: &TeamName) -> bool {
        self.home_team == *team || self.away_team == *team
    }

    // ===== Getters =====

    pub fn id(&self) -> MatchId {
        self.id
    }

    /// Returns the home team's trimmed name
    pub fn home_team(&self) -> &str {
        self.home_team.as_str()
    }

    /// Returns the away team's trimmed name
    pub fn away_team(&self) -> &str {
        self.away_team.as_str()
    }

    pub fn home_team_name(&self) -> &TeamName {
        &self.home_team
    }

    pub fn away_team_name(&self) -> &TeamName {
        &self.away_team
    }

    pub fn home_score(&self) -> u32 {
        self.score.home
    }

    pub fn away_score(&self) -> u32 {
        self.score.away
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns the kick-off timestamp
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Home plus away goals
    pub fn total_score(&self) -> u32 {
        self.score.total()
    }
}

/// Serialized shape of a [`Match`], checked before it becomes one
#[derive(Deserialize)]
struct MatchRecord {
    id: MatchId,
    home_team: TeamName,
    away_team: TeamName,
    score: Score,
    started_at: DateTime<Utc>,
}

impl TryFrom<MatchRecord> for Match {
    type Error = ScoreboardError;

    fn try_from(record: MatchRecord) -> Result<Self, Self::Error> {
        if record.home_team == record.away_team {
            return Err(ScoreboardError::DuplicateTeam(record.home_team.to_string()));
        }

        Ok(Self {
            id: record.id,
            home_team: record.home_team,
            away_team: record.away_team,
            score: record.score,
            started_at: record.started_at,
        })
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.score.home, self.away_team, self.score.away
        )
    }
}
