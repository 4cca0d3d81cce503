// Application services
// Coordinate domain entities through the domain ports

pub mod scoreboard;
pub mod shared;

pub use scoreboard::Scoreboard;
pub use shared::SharedScoreboard;
