use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::errors::{ScoreboardError, ScoreboardResult};

/// Stable identifier assigned to a match when it starts
///
/// Stores and the scoreboard address matches through this id, never through
/// structural comparison of the match itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(Uuid);

impl MatchId {
    /// Generates a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team name value object
///
/// # Invariants
/// - Leading and trailing whitespace is removed
/// - Must not be empty after trimming
/// - Keeps its original casing for display
///
/// Equality compares the normalized form (trimmed and case-folded), so
/// `"USA"` and `" usa "` are the same team.
///
/// # Example
/// ```
/// use scoreboard::domain::football_match::value_objects::TeamName;
///
/// let name = TeamName::new("  Spain ").expect("valid team name");
/// assert_eq!(name.as_str(), "Spain");
/// assert_eq!(name, TeamName::new("SPAIN").unwrap());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamName {
    display: String,
    normalized: String,
}

impl TeamName {
    /// Creates a new TeamName
    ///
    /// # Returns
    /// * `Ok(TeamName)` - If the name has content after trimming
    /// * `Err(ScoreboardError::InvalidTeamName)` - Otherwise
    pub fn new(name: impl AsRef<str>) -> ScoreboardResult<Self> {
        let raw = name.as_ref();
        let display = raw.trim();
        if display.is_empty() {
            return Err(ScoreboardError::InvalidTeamName(raw.to_string()));
        }

        Ok(Self {
            display: display.to_string(),
            normalized: Self::normalize(display),
        })
    }

    /// Normalized form of an arbitrary name, used only for comparisons
    pub fn normalize(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Returns the trimmed name with its original casing
    pub fn as_str(&self) -> &str {
        &self.display
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

impl PartialEq for TeamName {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for TeamName {}

impl TryFrom<String> for TeamName {
    type Error = ScoreboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TeamName> for String {
    fn from(name: TeamName) -> Self {
        name.display
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display)
    }
}

/// A pair of goal counts, home side first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    /// Validates raw, possibly negative, goal counts
    ///
    /// # Returns
    /// * `Ok(Score)` - If both counts are zero or more
    /// * `Err(ScoreboardError::NegativeScore)` - If either count is negative
    pub fn new(home: i32, away: i32) -> ScoreboardResult<Self> {
        match (u32::try_from(home), u32::try_from(away)) {
            (Ok(home), Ok(away)) => Ok(Self { home, away }),
            _ => Err(ScoreboardError::NegativeScore { home, away }),
        }
    }

    /// Sum of both sides, the primary ranking key of the summary
    pub fn total(&self) -> u32 {
        self.home.saturating_add(self.away)
    }

    /// True when neither side would go down by moving to `next`
    pub fn can_advance_to(&self, next: Score) -> bool {
        next.home >= self.home && next.away >= self.away
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}
