//! Terminal UI frontend for the scoreboard.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Borrows the [`runtime::RosterManager`] for the length of the session
//! - Drives it from keyboard input
//! - Redraws from snapshots published through a watch channel

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::CliConfig;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
