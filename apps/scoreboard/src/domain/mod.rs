// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod clock;
pub mod errors;
pub mod football_match;
pub mod repositories;

pub use clock::Clock;
pub use errors::{ScoreboardError, ScoreboardResult, StoreError};
