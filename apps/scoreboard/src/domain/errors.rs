use thiserror::Error;

/// Failure reported by a [`MatchStore`](crate::domain::repositories::MatchStore) adapter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct StoreError(pub String);

/// Errors that can occur while operating the scoreboard
///
/// Every variant describes bad caller input or a state conflict. None of them
/// are transient, and no operation mutates state before failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreboardError {
    #[error("Invalid team name: {0:?} is empty after trimming")]
    InvalidTeamName(String),

    #[error("Home team and away team must be different: {0}")]
    DuplicateTeam(String),

    #[error("Team is already playing an active match: {0}")]
    TeamBusy(String),

    #[error("No active match between {home} and {away}")]
    MatchNotFound { home: String, away: String },

    #[error("Score cannot be negative: {home}-{away}")]
    NegativeScore { home: i32, away: i32 },

    #[error("Score cannot be reduced from {current_home}-{current_away} to {home}-{away}")]
    ScoreReduced {
        current_home: u32,
        current_away: u32,
        home: u32,
        away: u32,
    },

    #[error("Match store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type ScoreboardResult<T> = Result<T, ScoreboardError>;
