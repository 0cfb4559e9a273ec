//! In-memory RosterRepository implementation for tests and local runs.

use std::sync::RwLock;

use roster_core::PlayerRecord;

use crate::repository::{RepositoryError, Result, RosterRepository};

/// In-memory implementation of RosterRepository.
#[derive(Default)]
pub struct InMemoryRosterRepo {
    records: RwLock<Option<Vec<PlayerRecord>>>,
}

impl InMemoryRosterRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a roster already stored.
    pub fn with_records(records: Vec<PlayerRecord>) -> Self {
        Self {
            records: RwLock::new(Some(records)),
        }
    }

    /// Copy of whatever is currently stored.
    pub fn stored(&self) -> Option<Vec<PlayerRecord>> {
        self.records
            .read()
            .map(|records| records.clone())
            .unwrap_or(None)
    }
}

impl RosterRepository for InMemoryRosterRepo {
    fn load(&self) -> Result<Option<Vec<PlayerRecord>>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(records.clone())
    }

    fn save(&self, records: &[PlayerRecord]) -> Result<()> {
        let mut stored = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *stored = Some(records.to_vec());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut stored = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *stored = None;
        Ok(())
    }
}
