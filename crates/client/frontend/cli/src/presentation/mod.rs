//! Terminal presentation components used by the CLI frontend.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
