//! File-based RosterRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use roster_core::PlayerRecord;

use crate::repository::{RepositoryError, Result, RosterRepository};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "scoreboard-players";

/// File-based implementation of RosterRepository.
///
/// # File Format
///
/// The roster is stored as `{storage_key}.json`: a JSON array of
/// `{ "name": ..., "score": ... }` objects in roster order.
pub struct FileRosterRepository {
    path: PathBuf,
}

impl FileRosterRepository {
    /// Create a repository storing `{storage_key}.json` under `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>, storage_key: &str) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir).map_err(RepositoryError::Io)?;

        if storage_key.is_empty()
            || storage_key.contains(|c: char| matches!(c, '/' | '\\') || c.is_control())
        {
            return Err(RepositoryError::CorruptedData(format!(
                "invalid storage key {:?}",
                storage_key
            )));
        }

        Ok(Self {
            path: base_dir.join(format!("{}.json", storage_key)),
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterRepository for FileRosterRepository {
    fn load(&self) -> Result<Option<Vec<PlayerRecord>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path).map_err(RepositoryError::Io)?;
        let records: Vec<PlayerRecord> =
            serde_json::from_str(&contents).map_err(|e| RepositoryError::Json(e.to_string()))?;

        tracing::debug!(
            "Loaded {} players from {}",
            records.len(),
            self.path.display()
        );

        Ok(Some(records))
    }

    fn save(&self, records: &[PlayerRecord]) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");

        let json =
            serde_json::to_vec(records).map_err(|e| RepositoryError::Json(e.to_string()))?;

        // Write to temp file
        fs::write(&temp_path, json).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved {} players to {}", records.len(), self.path.display());

        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(RepositoryError::Io)?;
            tracing::debug!("Cleared {}", self.path.display());
        }

        Ok(())
    }
}
