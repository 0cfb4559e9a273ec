//! The player roster and every mutation it supports.
//!
//! [`Roster`] is a plain ordered collection; it knows nothing about rendering
//! or storage. Each mutation returns an [`Outcome`] so the caller can decide
//! whether collaborators need to be notified, or a [`RosterError`] when the
//! addressed player does not exist. Failed operations leave the roster as it
//! was.

use crate::error::RosterError;
use crate::outcome::{Change, Outcome, SkipReason};
use crate::player::{Player, PlayerId, PlayerName};
use crate::snapshot::{PlayerRecord, PlayerRow, RosterSnapshot};

/// Addresses a player either by its current position or by its stable id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    At(usize),
    Id(PlayerId),
}

impl From<usize> for Target {
    fn from(position: usize) -> Self {
        Target::At(position)
    }
}

impl From<PlayerId> for Target {
    fn from(id: PlayerId) -> Self {
        Target::Id(id)
    }
}

/// Ordered sequence of players in insertion order.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    players: Vec<Player>,
    next_id: u64,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from persisted records, assigning fresh ids in order.
    pub fn from_records(records: impl IntoIterator<Item = PlayerRecord>) -> Self {
        let mut roster = Self::new();
        for record in records {
            let id = roster.issue_id();
            roster.players.push(Player::new(id, record.name, record.score));
        }
        roster
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get(&self, target: Target) -> Option<&Player> {
        let position = self.resolve(target).ok()?;
        self.players.get(position)
    }

    /// Position currently occupied by the player with `id`.
    pub fn position_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|player| player.id == id)
    }

    /// Resolves a target to a valid position.
    pub fn resolve(&self, target: Target) -> Result<usize, RosterError> {
        match target {
            Target::At(position) if position < self.players.len() => Ok(position),
            Target::At(position) => Err(RosterError::OutOfRange {
                position,
                len: self.players.len(),
            }),
            Target::Id(id) => self.position_of(id).ok_or(RosterError::UnknownPlayer(id)),
        }
    }

    /// Appends a player. A blank name makes this a no-op.
    pub fn add_player(&mut self, name: &str, initial_score: Option<i64>) -> Outcome {
        let Some(name) = PlayerName::new(name) else {
            return Outcome::Skipped(SkipReason::EmptyName);
        };

        let id = self.issue_id();
        let position = self.players.len();
        self.players.push(Player::new(id, name, initial_score.unwrap_or(0)));

        Outcome::Applied(Change::Added { id, position })
    }

    pub fn adjust_score(&mut self, target: Target, delta: i64) -> Result<Outcome, RosterError> {
        let position = self.resolve(target)?;
        let player = &mut self.players[position];
        player.add_points(delta);

        Ok(Outcome::Applied(Change::ScoreAdjusted {
            id: player.id,
            delta,
            score: player.score,
        }))
    }

    /// Renames a player. The target is validated before the name, so a stale
    /// target reports an error even when the new name is blank.
    pub fn rename_player(
        &mut self,
        target: Target,
        new_name: &str,
    ) -> Result<Outcome, RosterError> {
        let position = self.resolve(target)?;
        let Some(name) = PlayerName::new(new_name) else {
            return Ok(Outcome::Skipped(SkipReason::EmptyName));
        };

        let player = &mut self.players[position];
        player.name = name;

        Ok(Outcome::Applied(Change::Renamed { id: player.id }))
    }

    /// Removes a player; later players shift down one position.
    pub fn remove_player(&mut self, target: Target) -> Result<Outcome, RosterError> {
        let position = self.resolve(target)?;
        let removed = self.players.remove(position);

        Ok(Outcome::Applied(Change::Removed {
            id: removed.id,
            position,
        }))
    }

    /// Gives every player `floor(total / len)` points. The remainder is
    /// discarded.
    pub fn distribute_points(&mut self, total: i64) -> Outcome {
        if self.players.is_empty() {
            return Outcome::Skipped(SkipReason::EmptyRoster);
        }

        // Saturate the count for absurdly large rosters; real ones fit in i64.
        let count = i64::try_from(self.players.len()).unwrap_or(i64::MAX);
        let share = total.div_euclid(count);
        let remainder = total.rem_euclid(count);

        for player in &mut self.players {
            player.add_points(share);
        }

        Outcome::Applied(Change::Distributed { share, remainder })
    }

    /// Sets every score to 0.
    pub fn reset_scores(&mut self) -> Outcome {
        for player in &mut self.players {
            player.score = 0;
        }
        Outcome::Applied(Change::Reset)
    }

    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot {
            rows: self
                .players
                .iter()
                .enumerate()
                .map(|(position, player)| PlayerRow {
                    position,
                    id: player.id,
                    name: player.name.as_str().to_owned(),
                    score: player.score,
                })
                .collect(),
        }
    }

    pub fn records(&self) -> Vec<PlayerRecord> {
        self.players.iter().map(PlayerRecord::from).collect()
    }

    fn issue_id(&mut self) -> PlayerId {
        let id = PlayerId(self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_of(names: &[&str]) -> Roster {
        let mut roster = Roster::new();
        for name in names {
            roster.add_player(name, None);
        }
        roster
    }

    fn scores(roster: &Roster) -> Vec<i64> {
        roster.players().iter().map(|p| p.score).collect()
    }

    #[test]
    fn add_counts_only_non_blank_names() {
        let mut roster = Roster::new();
        let inputs = ["Alice", "", "  ", "Bob", "\t", "Carol"];
        let skipped = inputs
            .iter()
            .map(|name| roster.add_player(name, None))
            .filter(|outcome| *outcome == Outcome::Skipped(SkipReason::EmptyName))
            .count();

        assert_eq!(skipped, 3);
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn add_trims_name_and_uses_initial_score() {
        let mut roster = Roster::new();
        let outcome = roster.add_player("  Dana ", Some(-4));

        assert_eq!(
            outcome,
            Outcome::Applied(Change::Added {
                id: PlayerId(0),
                position: 0
            })
        );
        let player = roster.get(Target::At(0)).unwrap();
        assert_eq!(player.name.as_str(), "Dana");
        assert_eq!(player.score, -4);
    }

    #[test]
    fn adjust_then_inverse_restores_score() {
        let mut roster = roster_of(&["Alice", "Bob"]);
        for delta in [1, 5, -1, -5, 1_000, i64::from(i32::MIN)] {
            roster.adjust_score(Target::At(1), delta).unwrap();
            roster.adjust_score(Target::At(1), -delta).unwrap();
            assert_eq!(roster.get(Target::At(1)).unwrap().score, 0);
        }
    }

    #[test]
    fn out_of_range_position_does_not_mutate() {
        let mut roster = roster_of(&["Alice"]);
        let before = roster.snapshot();

        assert_eq!(
            roster.adjust_score(Target::At(1), 5),
            Err(RosterError::OutOfRange {
                position: 1,
                len: 1
            })
        );
        assert!(roster.rename_player(Target::At(3), "Zed").is_err());
        assert!(roster.remove_player(Target::At(usize::MAX)).is_err());
        assert_eq!(roster.snapshot(), before);
    }

    #[test]
    fn blank_rename_keeps_existing_name() {
        let mut roster = roster_of(&["Alice"]);
        assert_eq!(
            roster.rename_player(Target::At(0), "   "),
            Ok(Outcome::Skipped(SkipReason::EmptyName))
        );
        assert_eq!(roster.get(Target::At(0)).unwrap().name.as_str(), "Alice");

        roster.rename_player(Target::At(0), " Alicia ").unwrap();
        assert_eq!(roster.get(Target::At(0)).unwrap().name.as_str(), "Alicia");
    }

    #[test]
    fn remove_shifts_later_players_down() {
        let mut roster = roster_of(&["A", "B", "C", "D"]);
        roster.adjust_score(Target::At(2), 7).unwrap();
        let before = roster.players().to_vec();

        roster.remove_player(Target::At(1)).unwrap();

        assert_eq!(roster.len(), 3);
        assert_eq!(roster.players()[0], before[0]);
        assert_eq!(roster.players()[1], before[2]);
        assert_eq!(roster.players()[2], before[3]);
    }

    #[test]
    fn ids_stay_valid_across_removals() {
        let mut roster = roster_of(&["Alice", "Bob"]);
        let alice = roster.get(Target::At(0)).unwrap().id;
        let bob = roster.get(Target::At(1)).unwrap().id;

        roster.remove_player(Target::Id(alice)).unwrap();

        assert_eq!(roster.position_of(bob), Some(0));
        roster.adjust_score(Target::Id(bob), 3).unwrap();
        assert_eq!(roster.get(Target::At(0)).unwrap().score, 3);
        assert_eq!(
            roster.adjust_score(Target::Id(alice), 1),
            Err(RosterError::UnknownPlayer(alice))
        );
    }

    #[test]
    fn ids_are_not_reused() {
        let mut roster = roster_of(&["Alice"]);
        let first = roster.get(Target::At(0)).unwrap().id;
        roster.remove_player(Target::At(0)).unwrap();
        roster.add_player("Bob", None);
        assert_ne!(roster.get(Target::At(0)).unwrap().id, first);
    }

    #[test]
    fn distribute_floors_and_discards_remainder() {
        let mut roster = roster_of(&["A", "B", "C"]);
        let outcome = roster.distribute_points(10);

        assert_eq!(
            outcome,
            Outcome::Applied(Change::Distributed {
                share: 3,
                remainder: 1
            })
        );
        assert_eq!(scores(&roster), vec![3, 3, 3]);
    }

    #[test]
    fn distribute_negative_total_floors_toward_negative_infinity() {
        let mut roster = roster_of(&["A", "B", "C"]);
        roster.distribute_points(-10);
        assert_eq!(scores(&roster), vec![-4, -4, -4]);
    }

    #[test]
    fn distribute_ignores_current_scores() {
        let mut roster = roster_of(&["A", "B"]);
        roster.adjust_score(Target::At(0), 100).unwrap();
        roster.distribute_points(8);
        assert_eq!(scores(&roster), vec![104, 4]);
    }

    #[test]
    fn distribute_on_empty_roster_is_skipped() {
        let mut roster = Roster::new();
        assert_eq!(
            roster.distribute_points(10),
            Outcome::Skipped(SkipReason::EmptyRoster)
        );
    }

    #[test]
    fn reset_is_idempotent() {
        let mut roster = roster_of(&["A", "B"]);
        roster.adjust_score(Target::At(0), -12).unwrap();
        roster.adjust_score(Target::At(1), 40).unwrap();

        roster.reset_scores();
        let once = roster.snapshot();
        roster.reset_scores();

        assert_eq!(scores(&roster), vec![0, 0]);
        assert_eq!(roster.snapshot(), once);
    }

    #[test]
    fn scoreboard_walkthrough() {
        let mut roster = roster_of(&["Alice", "Bob"]);

        roster.distribute_points(10);
        assert_eq!(scores(&roster), vec![5, 5]);

        roster.adjust_score(Target::At(0), 5).unwrap();
        assert_eq!(scores(&roster), vec![10, 5]);

        roster.remove_player(Target::At(0)).unwrap();
        let snapshot = roster.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.rows[0].position, 0);
        assert_eq!(snapshot.rows[0].name, "Bob");
        assert_eq!(snapshot.rows[0].score, 5);

        roster.reset_scores();
        assert_eq!(scores(&roster), vec![0]);
    }

    #[test]
    fn records_round_trip_through_from_records() {
        let mut roster = roster_of(&["Alice", "Bob"]);
        roster.adjust_score(Target::At(1), -3).unwrap();

        let restored = Roster::from_records(roster.records());
        assert_eq!(restored.records(), roster.records());
        assert_eq!(restored.get(Target::At(1)).unwrap().score, -3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn records_reject_blank_names_when_deserializing() {
        let parsed: Result<Vec<PlayerRecord>, _> =
            serde_json::from_str(r#"[{"name":"  ","score":1}]"#);
        assert!(parsed.is_err());

        let parsed: Vec<PlayerRecord> =
            serde_json::from_str(r#"[{"name":" Eve ","score":-2}]"#).unwrap();
        assert_eq!(parsed[0].name.as_str(), "Eve");
        assert_eq!(parsed[0].score, -2);
    }
}
