//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading and roster manager assembly that can be
//! reused by the terminal UI or other front-end crates.
pub mod builder;
pub mod config;

pub use builder::{RuntimeBuilder, RuntimeSetup};
pub use config::RuntimeConfig;
