//! File-based repository implementations.

mod roster;

pub use roster::{DEFAULT_STORAGE_KEY, FileRosterRepository};
