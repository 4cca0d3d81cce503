use crate::domain::errors::StoreError;
use crate::domain::football_match::{Match, MatchId};

/// Store trait for active matches
///
/// Defines the contract for keeping the matches currently on the board.
/// Implementations must preserve insertion order and must address matches
/// by [`MatchId`] only.
pub trait MatchStore: Send {
    /// Append a newly started match
    fn add(&mut self, game: Match) -> Result<(), StoreError>;

    /// Replace a stored match with the same id, keeping its position
    fn update(&mut self, game: &Match) -> Result<(), StoreError>;

    /// Remove a match by id and hand it back
    fn remove(&mut self, id: MatchId) -> Result<Match, StoreError>;

    /// All stored matches in insertion order
    fn list_all(&self) -> Result<Vec<Match>, StoreError>;
}
