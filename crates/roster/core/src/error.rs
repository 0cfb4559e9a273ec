//! Errors raised when an operation addresses a player that does not exist.

use thiserror::Error;

use crate::player::PlayerId;

/// Failure of a single roster operation. The roster is never mutated when one
/// of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("position {position} is out of range for a roster of {len} players")]
    OutOfRange { position: usize, len: usize },

    #[error("no player with id {0} in the roster")]
    UnknownPlayer(PlayerId),
}
