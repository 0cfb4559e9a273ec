//! In-memory repository implementations for tests and ephemeral sessions.

mod roster;

pub use roster::InMemoryRosterRepo;
