//! Cross-frontend primitives for presenting the scoreboard.
//!
//! Houses message logging, outcome formatting, and view-model types that the
//! terminal client and any future graphical client can reuse.
pub mod config;
pub mod format;
pub mod frontend;
pub mod message;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig, ScoreSteps};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::ViewModel;
