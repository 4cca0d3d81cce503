// Infrastructure layer module
// Contains adapters for the domain ports
// Follows Hexagonal Architecture

pub mod clock;
pub mod stores;

pub use clock::{ManualClock, SystemClock};
pub use stores::InMemoryMatchStore;
