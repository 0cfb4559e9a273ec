//! Roster manager: sole owner of the roster for a session.
//!
//! Every mutation goes through [`RosterManager`]. When a mutation applies, the
//! manager mirrors the roster to its repository (if one is configured) and then
//! hands a snapshot to the render collaborator. Skipped and failed operations
//! notify nobody.
//!
//! Persistence is best effort: a failed load starts an empty roster and a
//! failed save is logged and counted, but never undoes the in-memory change or
//! blocks the render.

use roster_core::{
    Change, Outcome, Roster, RosterError, RosterSnapshot, SkipReason, Target, parse_integer,
    parse_score_or_zero,
};

use crate::render::{NoopRenderer, RenderSink};
use crate::repository::RosterRepository;

/// Owns the roster and coordinates its collaborators.
///
/// Lifecycle: [`RosterManager::builder`] → `build()` (hydrates from the
/// repository and renders once) → mutations → [`RosterManager::finish`].
pub struct RosterManager {
    roster: Roster,
    repository: Option<Box<dyn RosterRepository>>,
    renderer: Box<dyn RenderSink>,
    persistence_failures: u64,
}

impl RosterManager {
    /// Create a new manager builder
    pub fn builder() -> RosterManagerBuilder {
        RosterManagerBuilder::new()
    }

    /// Manager with no repository and no renderer.
    pub fn in_memory() -> Self {
        Self::builder().build()
    }

    pub fn snapshot(&self) -> RosterSnapshot {
        self.roster.snapshot()
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    pub fn has_repository(&self) -> bool {
        self.repository.is_some()
    }

    /// Number of repository writes that failed during this session.
    pub fn persistence_failures(&self) -> u64 {
        self.persistence_failures
    }

    pub fn add_player(&mut self, name: &str, initial_score: Option<i64>) -> Outcome {
        let outcome = self.roster.add_player(name, initial_score);
        self.commit(outcome)
    }

    /// Adds a player from raw form input. An unparseable or empty score
    /// field resolves to 0.
    pub fn add_player_from_input(&mut self, name: &str, score_text: &str) -> Outcome {
        self.add_player(name, Some(parse_score_or_zero(score_text)))
    }

    pub fn adjust_score(&mut self, target: Target, delta: i64) -> Result<Outcome, RosterError> {
        let outcome = self.roster.adjust_score(target, delta)?;
        Ok(self.commit(outcome))
    }

    pub fn rename_player(
        &mut self,
        target: Target,
        new_name: &str,
    ) -> Result<Outcome, RosterError> {
        let outcome = self.roster.rename_player(target, new_name)?;
        Ok(self.commit(outcome))
    }

    pub fn remove_player(&mut self, target: Target) -> Result<Outcome, RosterError> {
        let outcome = self.roster.remove_player(target)?;
        Ok(self.commit(outcome))
    }

    pub fn distribute_points(&mut self, total: i64) -> Outcome {
        let outcome = self.roster.distribute_points(total);
        self.commit(outcome)
    }

    /// Distributes a total typed by the user; non-numeric text is a no-op.
    pub fn distribute_points_from_input(&mut self, total_text: &str) -> Outcome {
        match parse_integer(total_text) {
            Some(total) => self.distribute_points(total),
            None => Outcome::Skipped(SkipReason::InvalidTotal),
        }
    }

    pub fn reset_scores(&mut self) -> Outcome {
        let outcome = self.roster.reset_scores();
        self.commit(outcome)
    }

    /// Final persist of the roster, ending the session.
    pub fn finish(mut self) {
        if self.repository.is_some() {
            self.persist();
        }
        tracing::info!(
            "Roster manager finished with {} players ({} failed saves)",
            self.roster.len(),
            self.persistence_failures
        );
    }

    fn commit(&mut self, outcome: Outcome) -> Outcome {
        match &outcome {
            Outcome::Applied(change) => {
                log_change(change);
                self.persist();
                self.render();
            }
            Outcome::Skipped(reason) => {
                tracing::debug!("Skipped roster operation: {}", reason);
            }
        }
        outcome
    }

    fn persist(&mut self) {
        let Some(repository) = &self.repository else {
            return;
        };

        if let Err(e) = repository.save(&self.roster.records()) {
            self.persistence_failures += 1;
            tracing::warn!("Failed to persist roster: {}", e);
        }
    }

    fn render(&mut self) {
        let snapshot = self.roster.snapshot();
        self.renderer.render(&snapshot);
    }
}

fn log_change(change: &Change) {
    match change {
        Change::Added { id, position } => {
            tracing::debug!("Added player {} at position {}", id, position)
        }
        Change::ScoreAdjusted { id, delta, score } => {
            tracing::debug!("Adjusted player {} by {} to {}", id, delta, score)
        }
        Change::Removed { id, position } => {
            tracing::debug!("Removed player {} from position {}", id, position)
        }
        Change::Distributed { share, remainder } => {
            tracing::debug!("Distributed {} per player ({} undistributed)", share, remainder)
        }
        Change::Renamed { .. } | Change::Reset => {
            tracing::debug!("Applied {}", change.kind())
        }
    }
}

/// Builder for [`RosterManager`].
#[derive(Default)]
pub struct RosterManagerBuilder {
    repository: Option<Box<dyn RosterRepository>>,
    renderer: Option<Box<dyn RenderSink>>,
}

impl RosterManagerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the persistence collaborator (optional).
    pub fn repository(mut self, repository: impl RosterRepository + 'static) -> Self {
        self.repository = Some(Box::new(repository));
        self
    }

    /// Set the render collaborator (optional).
    pub fn renderer(mut self, renderer: impl RenderSink + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Build the manager, hydrating from the repository and rendering once.
    pub fn build(self) -> RosterManager {
        let roster = match self.repository.as_deref() {
            Some(repository) => hydrate(repository),
            None => Roster::new(),
        };

        let mut manager = RosterManager {
            roster,
            repository: self.repository,
            renderer: self.renderer.unwrap_or_else(|| Box::new(NoopRenderer)),
            persistence_failures: 0,
        };
        manager.render();
        manager
    }
}

fn hydrate(repository: &dyn RosterRepository) -> Roster {
    match repository.load() {
        Ok(Some(records)) => {
            tracing::info!("Hydrated roster with {} players", records.len());
            Roster::from_records(records)
        }
        Ok(None) => {
            tracing::info!("No stored roster found, starting empty");
            Roster::new()
        }
        Err(e) => {
            tracing::warn!("Ignoring unreadable stored roster: {}", e);
            Roster::new()
        }
    }
}

impl Default for RosterManager {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use roster_core::PlayerRecord;

    use super::*;
    use crate::repository::{InMemoryRosterRepo, RepositoryError};

    struct FailingRepo;

    impl RosterRepository for FailingRepo {
        fn load(&self) -> crate::repository::Result<Option<Vec<PlayerRecord>>> {
            Err(RepositoryError::CorruptedData("unreadable".into()))
        }

        fn save(&self, _records: &[PlayerRecord]) -> crate::repository::Result<()> {
            Err(RepositoryError::Io(std::io::Error::other("quota exceeded")))
        }

        fn clear(&self) -> crate::repository::Result<()> {
            Ok(())
        }
    }

    fn recording_manager() -> (RosterManager, Arc<Mutex<Vec<RosterSnapshot>>>) {
        let frames = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&frames);
        let manager = RosterManager::builder()
            .renderer(move |snapshot: &RosterSnapshot| {
                sink.lock().unwrap().push(snapshot.clone());
            })
            .build();
        (manager, frames)
    }

    #[test]
    fn build_renders_initial_snapshot() {
        let (_manager, frames) = recording_manager();
        let frames = frames.lock().unwrap();
        assert_eq!(frames.len(), 1);
        assert!(frames[0].is_empty());
    }

    #[test]
    fn applied_mutations_render_and_skips_do_not() {
        let (mut manager, frames) = recording_manager();

        manager.add_player("Alice", None);
        manager.add_player("   ", None);
        manager.distribute_points_from_input("lots");
        let _ = manager.adjust_score(Target::At(4), 1);
        manager.adjust_score(Target::At(0), 5).unwrap();

        let frames = frames.lock().unwrap();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[2].rows[0].score, 5);
    }

    #[test]
    fn mutations_are_mirrored_to_repository() {
        let repo = Arc::new(InMemoryRosterRepo::new());
        let mut manager = RosterManager::builder()
            .repository(Arc::clone(&repo))
            .build();

        manager.add_player("Alice", Some(2));
        manager.add_player("Bob", None);
        manager.remove_player(Target::At(0)).unwrap();

        let stored = repo.stored().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name.as_str(), "Bob");
    }

    #[test]
    fn failed_saves_are_counted_but_not_fatal() {
        let rendered = Arc::new(Mutex::new(0usize));
        let counter = Arc::clone(&rendered);
        let mut manager = RosterManager::builder()
            .repository(FailingRepo)
            .renderer(move |_: &RosterSnapshot| *counter.lock().unwrap() += 1)
            .build();

        assert!(manager.is_empty());
        manager.add_player("Alice", None);
        manager.adjust_score(Target::At(0), 3).unwrap();

        assert_eq!(manager.persistence_failures(), 2);
        assert_eq!(manager.snapshot().rows[0].score, 3);
        assert_eq!(*rendered.lock().unwrap(), 3);
    }

    #[test]
    fn add_from_input_coerces_bad_score_to_zero() {
        let mut manager = RosterManager::in_memory();
        manager.add_player_from_input("Alice", "ten");
        manager.add_player_from_input("Bob", "7 points");
        manager.add_player_from_input("Carol", "");

        let scores: Vec<i64> = manager.snapshot().rows.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![0, 7, 0]);
    }

    #[test]
    fn distribute_from_input_requires_a_number() {
        let mut manager = RosterManager::in_memory();
        manager.add_player("Alice", None);

        assert_eq!(
            manager.distribute_points_from_input("abc"),
            Outcome::Skipped(SkipReason::InvalidTotal)
        );
        assert!(manager.distribute_points_from_input(" 9").is_applied());
        assert_eq!(manager.snapshot().rows[0].score, 9);
    }

    #[test]
    fn finish_persists_final_roster() {
        let repo = Arc::new(InMemoryRosterRepo::new());
        let manager = RosterManager::builder()
            .repository(Arc::clone(&repo))
            .build();

        manager.finish();
        assert_eq!(repo.stored(), Some(Vec::new()));
    }
}
