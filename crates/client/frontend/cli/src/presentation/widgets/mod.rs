//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads presentation state and renders
//! into a region of the frame.

pub mod footer;
pub mod header;
pub mod messages;
pub mod prompt;
pub mod roster_table;
