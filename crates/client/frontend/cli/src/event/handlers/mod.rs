//! Event handler implementations for EventLoop.
//!
//! This module contains handler methods organized by responsibility:
//! - `input`: Keyboard polling and key dispatch
//! - `roster`: Roster operations and prompt submission
//! - `rendering`: Terminal rendering
//!
//! All handlers are implemented as `impl EventLoop` blocks in separate files.

mod input;
mod rendering;
mod roster;
