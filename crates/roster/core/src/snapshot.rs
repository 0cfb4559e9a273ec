//! Read-only views of the roster handed to collaborators.

use crate::player::{Player, PlayerId, PlayerName};

/// Persisted form of a player: the `{ name, score }` pair stored between
/// sessions. Ids are not persisted; hydration assigns fresh ones.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerRecord {
    pub name: PlayerName,
    pub score: i64,
}

impl PlayerRecord {
    pub fn new(name: PlayerName, score: i64) -> Self {
        Self { name, score }
    }
}

impl From<&Player> for PlayerRecord {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            score: player.score,
        }
    }
}

/// One rendered row: a player paired with its current position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerRow {
    pub position: usize,
    pub id: PlayerId,
    pub name: String,
    pub score: i64,
}

/// Ordered snapshot of the roster at a single moment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterSnapshot {
    pub rows: Vec<PlayerRow>,
}

impl RosterSnapshot {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&PlayerRow> {
        self.rows.get(position)
    }

    /// Sum of all scores, saturating.
    pub fn total_score(&self) -> i64 {
        self.rows
            .iter()
            .fold(0i64, |total, row| total.saturating_add(row.score))
    }

    /// `{ name, score }` pairs in roster order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, i64)> {
        self.rows.iter().map(|row| (row.name.as_str(), row.score))
    }
}
