use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::config::{LookupMode, ScoreboardConfig};
use crate::domain::clock::Clock;
use crate::domain::errors::{ScoreboardError, ScoreboardResult};
use crate::domain::football_match::{Match, MatchEvent, TeamName};
use crate::domain::repositories::MatchStore;
use crate::infrastructure::{InMemoryMatchStore, SystemClock};

/// Live scoreboard of the matches currently in progress
///
/// Coordinates the [`Match`] entities held in a [`MatchStore`] and enforces
/// the rules that span more than one match.
///
/// # Invariants
/// - Home and away teams of a match differ after normalization
/// - A team plays in at most one active match
/// - Failed operations leave the board untouched
///
/// # Example
/// ```
/// use scoreboard::services::Scoreboard;
///
/// let mut board = Scoreboard::in_memory();
/// board.start_new_match("Mexico", "Canada").expect("new match");
/// board.update_score("Mexico", "Canada", 0, 5).expect("score update");
///
/// assert_eq!(board.summary_lines().unwrap(), vec!["Mexico 0 - Canada 5"]);
/// ```
pub struct Scoreboard<S = InMemoryMatchStore, C = SystemClock> {
    store: S,
    clock: C,
    config: ScoreboardConfig,
    events: VecDeque<MatchEvent>,
}

impl Scoreboard {
    /// Board backed by memory and the wall clock, with default settings
    pub fn in_memory() -> Self {
        Self::new(InMemoryMatchStore::new(), SystemClock, ScoreboardConfig::default())
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<C: Clock> Scoreboard<InMemoryMatchStore, C> {
    /// In-memory board stamped by the given clock
    pub fn with_clock(clock: C) -> Self {
        Self::new(InMemoryMatchStore::new(), clock, ScoreboardConfig::default())
    }
}

impl<S: MatchStore, C: Clock> Scoreboard<S, C> {
    /// Creates a board from its collaborators
    ///
    /// # Arguments
    /// * `store` - Where active matches are kept
    /// * `clock` - Stamps each match's kick-off time
    /// * `config` - Lookup behaviour
    pub fn new(store: S, clock: C, config: ScoreboardConfig) -> Self {
        Self {
            store,
            clock,
            config,
            events: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &ScoreboardConfig {
        &self.config
    }

    /// Starts a new match at 0-0
    ///
    /// # Returns
    /// * `Ok(Match)` - The match as now stored on the board
    /// * `Err(ScoreboardError::InvalidTeamName)` - If a name is blank
    /// * `Err(ScoreboardError::DuplicateTeam)` - If both names are the same team
    /// * `Err(ScoreboardError::TeamBusy)` - If either team is already playing
    pub fn start_new_match(&mut self, home_team: &str, away_team: &str) -> ScoreboardResult<Match> {
        let result = self.try_start(home_team, away_team);
        if let Err(e) = &result {
            tracing::warn!(home_team, away_team, error = %e, "Rejected match start");
        }
        result
    }

    fn try_start(&mut self, home_team: &str, away_team: &str) -> ScoreboardResult<Match> {
        let home = TeamName::new(home_team)?;
        let away = TeamName::new(away_team)?;

        if home == away {
            return Err(ScoreboardError::DuplicateTeam(home.to_string()));
        }

        let active = self.store.list_all()?;
        for team in [&home, &away] {
            if let Some(busy) = active.iter().find(|m| m.involves(team)) {
                tracing::debug!(team = %team, match_id = %busy.id(), "Team already playing");
                return Err(ScoreboardError::TeamBusy(team.to_string()));
            }
        }

        let game = Match::from_parts(home, away, self.clock.now());
        self.store.add(game.clone())?;

        tracing::info!(
            match_id = %game.id(),
            home_team = game.home_team(),
            away_team = game.away_team(),
            "Match started"
        );
        self.record(MatchEvent::Started {
            match_id: game.id(),
            home_team: game.home_team().to_string(),
            away_team: game.away_team().to_string(),
            started_at: game.started_at(),
        });

        Ok(game)
    }

    /// Sets the score of an active match
    ///
    /// Scores are given in the caller's orientation. Under
    /// [`LookupMode::Either`] a swapped pair is accepted and the scores are
    /// mapped onto the stored sides.
    ///
    /// # Returns
    /// * `Ok(Match)` - The match with its new score
    /// * `Err(ScoreboardError::MatchNotFound)` - If no active match fits the pair
    /// * `Err(ScoreboardError::NegativeScore)` / `Err(ScoreboardError::ScoreReduced)` -
    ///   As reported by [`Match::update_score`]
    pub fn update_score(
        &mut self,
        home_team: &str,
        away_team: &str,
        home_score: i32,
        away_score: i32,
    ) -> ScoreboardResult<Match> {
        let result = self.try_update(home_team, away_team, home_score, away_score);
        if let Err(e) = &result {
            tracing::warn!(home_team, away_team, home_score, away_score, error = %e, "Rejected score update");
        }
        result
    }

    fn try_update(
        &mut self,
        home_team: &str,
        away_team: &str,
        home_score: i32,
        away_score: i32,
    ) -> ScoreboardResult<Match> {
        let (mut game, swapped) = self.locate(home_team, away_team)?;

        let event = if swapped {
            game.update_score(away_score, home_score)?
        } else {
            game.update_score(home_score, away_score)?
        };
        self.store.update(&game)?;

        tracing::debug!(match_id = %game.id(), score = %game.score(), "Score updated");
        self.record(event);

        Ok(game)
    }

    /// Takes a match off the board
    ///
    /// # Returns
    /// * `Ok(Match)` - The removed match with its final score
    /// * `Err(ScoreboardError::MatchNotFound)` - If no active match fits the pair
    pub fn finish_match(&mut self, home_team: &str, away_team: &str) -> ScoreboardResult<Match> {
        let result = self.try_finish(home_team, away_team);
        if let Err(e) = &result {
            tracing::warn!(home_team, away_team, error = %e, "Rejected match finish");
        }
        result
    }

    fn try_finish(&mut self, home_team: &str, away_team: &str) -> ScoreboardResult<Match> {
        let (game, _) = self.locate(home_team, away_team)?;
        let finished = self.store.remove(game.id())?;

        tracing::info!(match_id = %finished.id(), result = %finished, "Match finished");
        self.record(MatchEvent::Finished {
            match_id: finished.id(),
            final_score: finished.score(),
        });

        Ok(finished)
    }

    /// Active matches in the order they started
    pub fn active_matches(&self) -> ScoreboardResult<Vec<Match>> {
        Ok(self.store.list_all()?)
    }

    /// Active matches ranked for display
    ///
    /// Ordered by total goals, highest first. Equal totals put the most
    /// recently started match first; identical kick-off times fall back to
    /// reverse insertion order so the result is always deterministic.
    pub fn summary(&self) -> ScoreboardResult<Vec<Match>> {
        let mut ranked: Vec<(usize, Match)> = self.store.list_all()?.into_iter().enumerate().collect();
        ranked.sort_by(|(a_pos, a), (b_pos, b)| rank(a, b).then_with(|| b_pos.cmp(a_pos)));

        tracing::debug!(matches = ranked.len(), "Summary generated");
        Ok(ranked.into_iter().map(|(_, game)| game).collect())
    }

    /// Summary rendered as `"Home 1 - Away 0"` lines
    pub fn summary_lines(&self) -> ScoreboardResult<Vec<String>> {
        Ok(self.summary()?.iter().map(Match::to_string).collect())
    }

    /// Looks up an active match by its teams, following the lookup mode
    pub fn find_match(&self, home_team: &str, away_team: &str) -> ScoreboardResult<Option<Match>> {
        match self.locate(home_team, away_team) {
            Ok((game, _)) => Ok(Some(game)),
            Err(ScoreboardError::MatchNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Number of active matches
    pub fn len(&self) -> ScoreboardResult<usize> {
        Ok(self.store.list_all()?.len())
    }

    pub fn is_empty(&self) -> ScoreboardResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Events recorded since the last drain, oldest first
    ///
    /// Always empty unless [`ScoreboardConfig::event_capacity`] is set.
    pub fn pending_events(&self) -> &VecDeque<MatchEvent> {
        &self.events
    }

    /// Hands over and clears the recorded events
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        self.events.drain(..).collect()
    }

    /// Queues an event, evicting the oldest once the outbox is full
    fn record(&mut self, event: MatchEvent) {
        let capacity = self.config.event_capacity;
        if capacity == 0 {
            return;
        }

        while self.events.len() >= capacity {
            if let Some(dropped) = self.events.pop_front() {
                tracing::debug!(match_id = %dropped.match_id(), "Event outbox full, dropping oldest");
            }
        }
        self.events.push_back(event);
    }

    /// Finds the active match for a caller's pair
    ///
    /// The flag is true when the match was found with home and away swapped.
    fn locate(&self, home_team: &str, away_team: &str) -> ScoreboardResult<(Match, bool)> {
        let home = TeamName::normalize(home_team);
        let away = TeamName::normalize(away_team);
        let active = self.store.list_all()?;

        let same_sides = |m: &Match, h: &str, a: &str| {
            m.home_team_name().normalized() == h && m.away_team_name().normalized() == a
        };

        if let Some(game) = active.iter().find(|m| same_sides(m, &home, &away)) {
            return Ok((game.clone(), false));
        }

        if self.config.lookup_mode == LookupMode::Either {
            if let Some(game) = active.iter().find(|m| same_sides(m, &away, &home)) {
                return Ok((game.clone(), true));
            }
        }

        Err(ScoreboardError::MatchNotFound {
            home: home_team.trim().to_string(),
            away: away_team.trim().to_string(),
        })
    }
}

/// Summary ordering between two matches, before the insertion tie-break
fn rank(a: &Match, b: &Match) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| b.started_at().cmp(&a.started_at()))
}
