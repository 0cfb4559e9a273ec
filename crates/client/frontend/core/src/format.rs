//! Human-readable messages for roster outcomes.

use roster_core::{Change, Outcome, PlayerId, RosterError, RosterSnapshot};

use crate::message::MessageEntry;

/// Describes an operation result for the message log.
///
/// `before` and `after` are the snapshots around the operation; removed
/// players are only found in `before`.
pub fn format_outcome(
    outcome: &Outcome,
    before: &RosterSnapshot,
    after: &RosterSnapshot,
) -> MessageEntry {
    let change = match outcome {
        Outcome::Applied(change) => change,
        Outcome::Skipped(reason) => {
            return MessageEntry::warning(format!("Nothing changed: {}", reason));
        }
    };

    let text = match change {
        Change::Added { id, position } => format!(
            "Added {} at #{}",
            name_of(after, *id),
            position + 1
        ),
        Change::ScoreAdjusted { id, delta, score } => {
            format!("{} {:+} → {}", name_of(after, *id), delta, score)
        }
        Change::Renamed { id } => format!(
            "{} is now {}",
            name_of(before, *id),
            name_of(after, *id)
        ),
        Change::Removed { id, .. } => format!("Removed {}", name_of(before, *id)),
        Change::Distributed { share, remainder } if *remainder == 0 => {
            format!("Each player receives {}", share)
        }
        Change::Distributed { share, remainder } => format!(
            "Each player receives {} ({} left undistributed)",
            share, remainder
        ),
        Change::Reset => "All scores reset to 0".to_string(),
    };

    MessageEntry::info(text)
}

pub fn format_error(error: &RosterError) -> MessageEntry {
    MessageEntry::error(error.to_string())
}

fn name_of(snapshot: &RosterSnapshot, id: PlayerId) -> String {
    snapshot
        .rows
        .iter()
        .find(|row| row.id == id)
        .map(|row| row.name.clone())
        .unwrap_or_else(|| format!("player {}", id))
}
