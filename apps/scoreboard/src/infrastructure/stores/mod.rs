// Store implementations (data access layer)
// Adapters that implement the domain MatchStore port

pub mod in_memory_match_store;

pub use in_memory_match_store::InMemoryMatchStore;
