//! Results of roster operations that did not fail.

use strum::{Display, IntoStaticStr};

use crate::player::PlayerId;

/// What an operation did to the roster.
///
/// `Applied` means the roster changed and collaborators must be notified.
/// `Skipped` is a silent no-op caused by forgiving input handling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Applied(Change),
    Skipped(SkipReason),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    pub fn change(&self) -> Option<&Change> {
        match self {
            Outcome::Applied(change) => Some(change),
            Outcome::Skipped(_) => None,
        }
    }
}

/// Description of an applied mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Change {
    Added {
        id: PlayerId,
        position: usize,
    },
    ScoreAdjusted {
        id: PlayerId,
        delta: i64,
        score: i64,
    },
    Renamed {
        id: PlayerId,
    },
    Removed {
        id: PlayerId,
        position: usize,
    },
    /// Every player received `share`; `remainder` points were discarded.
    Distributed {
        share: i64,
        remainder: i64,
    },
    Reset,
}

impl Change {
    pub fn kind(&self) -> MutationKind {
        match self {
            Change::Added { .. } => MutationKind::Add,
            Change::ScoreAdjusted { .. } => MutationKind::Adjust,
            Change::Renamed { .. } => MutationKind::Rename,
            Change::Removed { .. } => MutationKind::Remove,
            Change::Distributed { .. } => MutationKind::Distribute,
            Change::Reset => MutationKind::Reset,
        }
    }
}

/// Operation label used in logs and messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum MutationKind {
    Add,
    Adjust,
    Rename,
    Remove,
    Distribute,
    Reset,
}

/// Why an operation was a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, IntoStaticStr)]
pub enum SkipReason {
    #[strum(to_string = "name is empty")]
    EmptyName,
    #[strum(to_string = "roster is empty")]
    EmptyRoster,
    #[strum(to_string = "total is not a number")]
    InvalidTotal,
}
