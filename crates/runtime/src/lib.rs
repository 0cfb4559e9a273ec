//! Session layer for the scoreboard.
//!
//! This crate wraps the pure [`roster_core::Roster`] in a [`RosterManager`]
//! that owns it for a session and keeps two collaborators in sync:
//! - [`render`] defines the sink notified with a snapshot after each change
//! - [`repository`] mirrors the roster to storage between sessions
pub mod manager;
pub mod render;
pub mod repository;

pub use manager::{RosterManager, RosterManagerBuilder};
pub use render::{NoopRenderer, RenderSink, WatchRenderer};
pub use repository::{
    FileRosterRepository, InMemoryRosterRepo, RepositoryError, RosterRepository,
};
pub use repository::file::DEFAULT_STORAGE_KEY;
