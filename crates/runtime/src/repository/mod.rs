//! Repository layer for the persisted roster.
//!
//! Repositories mirror the roster between sessions:
//! - [`FileRosterRepository`] keeps one JSON document per storage key
//! - [`InMemoryRosterRepo`] backs tests and ephemeral sessions

mod error;
pub mod file;
pub mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileRosterRepository;
pub use memory::InMemoryRosterRepo;
pub use traits::RosterRepository;
