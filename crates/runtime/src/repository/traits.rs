//! Repository contract for mirroring the roster between sessions.

use std::sync::Arc;

use roster_core::PlayerRecord;

use crate::repository::Result;

/// Key-value style storage holding one persisted roster.
///
/// The in-memory roster is the source of truth for a session; a repository
/// is a best-effort mirror. Implementations do not need transactions or
/// partial writes: every `save` replaces the stored roster wholesale.
pub trait RosterRepository: Send + Sync {
    /// Load the stored roster, or `None` if nothing has been saved yet.
    fn load(&self) -> Result<Option<Vec<PlayerRecord>>>;

    /// Replace the stored roster.
    fn save(&self, records: &[PlayerRecord]) -> Result<()>;

    /// Remove the stored roster. Clearing an empty store is not an error.
    fn clear(&self) -> Result<()>;
}

impl<R: RosterRepository + ?Sized> RosterRepository for Arc<R> {
    fn load(&self) -> Result<Option<Vec<PlayerRecord>>> {
        (**self).load()
    }

    fn save(&self, records: &[PlayerRecord]) -> Result<()> {
        (**self).save(records)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}
