// Match domain module
// Contains the match entity, its value objects and domain events

#![allow(clippy::module_inception)]

pub mod events;
pub mod football_match;
pub mod value_objects;

// Re-export main types for convenience
pub use events::MatchEvent;
pub use football_match::Match;
pub use value_objects::{MatchId, Score, TeamName};
