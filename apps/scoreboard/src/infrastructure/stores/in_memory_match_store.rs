use crate::domain::errors::StoreError;
use crate::domain::football_match::{Match, MatchId};
use crate::domain::repositories::MatchStore;

/// In-memory implementation of MatchStore
///
/// Keeps matches in a `Vec` so insertion order is the iteration order.
/// Lookups are linear, which is fine for the handful of games live at once.
#[derive(Debug, Default)]
pub struct InMemoryMatchStore {
    matches: Vec<Match>,
}

impl InMemoryMatchStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: MatchId) -> Option<usize> {
        self.matches.iter().position(|m| m.id() == id)
    }
}

impl MatchStore for InMemoryMatchStore {
    fn add(&mut self, game: Match) -> Result<(), StoreError> {
        if self.position(game.id()).is_some() {
            return Err(StoreError(format!("Match already stored: {}", game.id())));
        }

        self.matches.push(game);
        Ok(())
    }

    fn update(&mut self, game: &Match) -> Result<(), StoreError> {
        let index = self
            .position(game.id())
            .ok_or_else(|| StoreError(format!("Match not found: {}", game.id())))?;

        self.matches[index] = game.clone();
        Ok(())
    }

    fn remove(&mut self, id: MatchId) -> Result<Match, StoreError> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError(format!("Match not found: {}", id)))?;

        // `remove` shifts the tail left so the remaining order is kept
        Ok(self.matches.remove(index))
    }

    fn list_all(&self) -> Result<Vec<Match>, StoreError> {
        Ok(self.matches.clone())
    }
}
