// Repository ports
// Adapters live in the infrastructure layer

pub mod match_store;

pub use match_store::MatchStore;
