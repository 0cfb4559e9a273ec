//! Presentation state derived from roster snapshots.
//!
//! The view-model keeps the latest [`RosterSnapshot`] plus the row the user
//! has selected. Selection is tracked by [`PlayerId`] so it follows a player
//! when rows above it are removed; when the selected player itself goes away
//! the selection falls back to the nearest remaining row.
use roster_core::{PlayerId, PlayerRow, RosterSnapshot, Target};

#[derive(Clone, Debug, Default)]
pub struct ViewModel {
    snapshot: RosterSnapshot,
    selected: Option<PlayerId>,
    /// Position of the selection in the previous snapshot.
    last_position: usize,
}

impl ViewModel {
    pub fn new(snapshot: RosterSnapshot) -> Self {
        let mut view_model = Self::default();
        view_model.apply_snapshot(snapshot);
        view_model
    }

    /// Replace the roster view, keeping the selection on the same player
    /// where possible.
    pub fn apply_snapshot(&mut self, snapshot: RosterSnapshot) {
        let kept = self
            .selected
            .and_then(|id| snapshot.rows.iter().find(|row| row.id == id))
            .map(|row| row.position);

        let position = match kept {
            Some(position) => Some(position),
            None if snapshot.is_empty() => None,
            None => Some(self.last_position.min(snapshot.len() - 1)),
        };

        self.selected = position.map(|p| snapshot.rows[p].id);
        self.last_position = position.unwrap_or(0);
        self.snapshot = snapshot;
    }

    pub fn snapshot(&self) -> &RosterSnapshot {
        &self.snapshot
    }

    pub fn rows(&self) -> &[PlayerRow] {
        &self.snapshot.rows
    }

    pub fn selected_row(&self) -> Option<&PlayerRow> {
        let id = self.selected?;
        self.snapshot.rows.iter().find(|row| row.id == id)
    }

    pub fn selected_position(&self) -> Option<usize> {
        self.selected_row().map(|row| row.position)
    }

    /// Target for per-row actions on the selected player.
    pub fn selected_target(&self) -> Option<Target> {
        self.selected.map(Target::Id)
    }

    pub fn select_next(&mut self) {
        self.move_selection(1);
    }

    pub fn select_previous(&mut self) {
        self.move_selection(-1);
    }

    pub fn player_count(&self) -> usize {
        self.snapshot.len()
    }

    pub fn total_score(&self) -> i64 {
        self.snapshot.total_score()
    }

    /// Highest score; ties go to the earliest row.
    pub fn leader(&self) -> Option<&PlayerRow> {
        self.snapshot
            .rows
            .iter()
            .reduce(|best, row| if row.score > best.score { row } else { best })
    }

    fn move_selection(&mut self, step: isize) {
        if self.snapshot.is_empty() {
            return;
        }

        let len = self.snapshot.len() as isize;
        let current = self.selected_position().unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len) as usize;

        self.selected = Some(self.snapshot.rows[next].id);
        self.last_position = next;
    }
}
