use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::clock::Clock;
use crate::domain::errors::ScoreboardResult;
use crate::domain::football_match::{Match, MatchEvent};
use crate::domain::repositories::MatchStore;
use crate::infrastructure::{InMemoryMatchStore, SystemClock};
use crate::services::scoreboard::Scoreboard;

/// Thread-safe handle to a [`Scoreboard`]
///
/// Every operation holds one lock for its whole read-then-write, so two
/// threads can never both start a match for the same team, and concurrent
/// score updates are applied one after another.
///
/// Cloning the handle shares the same board.
pub struct SharedScoreboard<S = InMemoryMatchStore, C = SystemClock> {
    inner: Arc<Mutex<Scoreboard<S, C>>>,
}

impl<S, C> Clone for SharedScoreboard<S, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: MatchStore, C: Clock> From<Scoreboard<S, C>> for SharedScoreboard<S, C> {
    fn from(board: Scoreboard<S, C>) -> Self {
        Self::new(board)
    }
}

impl<S: MatchStore, C: Clock> SharedScoreboard<S, C> {
    pub fn new(board: Scoreboard<S, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(board)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Scoreboard<S, C>> {
        // Validation runs before any write, so a panicking holder cannot
        // have left the board half-updated
        self.inner.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("Scoreboard lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    pub fn start_new_match(&self, home_team: &str, away_team: &str) -> ScoreboardResult<Match> {
        self.lock().start_new_match(home_team, away_team)
    }

    pub fn update_score(
        &self,
        home_team: &str,
        away_team: &str,
        home_score: i32,
        away_score: i32,
    ) -> ScoreboardResult<Match> {
        self.lock()
            .update_score(home_team, away_team, home_score, away_score)
    }

    pub fn finish_match(&self, home_team: &str, away_team: &str) -> ScoreboardResult<Match> {
        self.lock().finish_match(home_team, away_team)
    }

    pub fn active_matches(&self) -> ScoreboardResult<Vec<Match>> {
        self.lock().active_matches()
    }

    pub fn summary(&self) -> ScoreboardResult<Vec<Match>> {
        self.lock().summary()
    }

    pub fn summary_lines(&self) -> ScoreboardResult<Vec<String>> {
        self.lock().summary_lines()
    }

    pub fn drain_events(&self) -> Vec<MatchEvent> {
        self.lock().drain_events()
    }

    /// Runs a closure with exclusive access to the board
    ///
    /// Use this to apply several operations atomically.
    pub fn with_board<T>(&self, f: impl FnOnce(&mut Scoreboard<S, C>) -> T) -> T {
        f(&mut self.lock())
    }
}
