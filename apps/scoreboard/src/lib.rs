//! Live football scoreboard
//!
//! Tracks the matches currently in progress: start a match, update its
//! score, finish it, and list the active matches ranked for display.
//!
//! ```
//! use scoreboard::services::Scoreboard;
//!
//! let mut board = Scoreboard::in_memory();
//! board.start_new_match("Mexico", "Canada").unwrap();
//! board.start_new_match("Spain", "Brazil").unwrap();
//! board.update_score("Mexico", "Canada", 0, 5).unwrap();
//! board.update_score("Spain", "Brazil", 10, 2).unwrap();
//!
//! let summary = board.summary_lines().unwrap();
//! assert_eq!(summary[0], "Spain 10 - Brazil 2");
//! ```

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;

pub use config::{LookupMode, ScoreboardConfig};
pub use domain::errors::{ScoreboardError, ScoreboardResult};
pub use domain::football_match::{Match, MatchId};
pub use services::{Scoreboard, SharedScoreboard};
