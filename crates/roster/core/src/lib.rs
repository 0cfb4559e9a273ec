//! Scoreboard data model and roster rules.
//!
//! `roster-core` defines the player roster and every mutation the scoreboard
//! supports. It performs no I/O: persistence and rendering are layered on top
//! by the `runtime` crate, which drives all mutations through [`Roster`].
pub mod error;
pub mod input;
pub mod outcome;
pub mod player;
pub mod roster;
pub mod snapshot;

pub use error::RosterError;
pub use input::{parse_integer, parse_score_or_zero};
pub use outcome::{Change, MutationKind, Outcome, SkipReason};
pub use player::{Player, PlayerId, PlayerName};
pub use roster::{Roster, Target};
pub use snapshot::{PlayerRecord, PlayerRow, RosterSnapshot};
