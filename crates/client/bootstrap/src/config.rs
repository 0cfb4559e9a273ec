//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use runtime::DEFAULT_STORAGE_KEY;

/// Configuration required to assemble a roster manager.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub enable_persistence: bool,
    pub save_data_dir: Option<PathBuf>,
    pub storage_key: String,
    /// Discard any stored roster before hydrating.
    pub fresh_start: bool,
    pub session_id: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            enable_persistence: true,
            save_data_dir: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            fresh_start: false,
            session_id: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ENABLE_PERSISTENCE` - Mirror the roster to disk (default: true)
    /// - `SAVE_DATA_DIR` - Directory for the stored roster (default: platform-specific)
    /// - `SCOREBOARD_STORAGE_KEY` - File stem of the stored roster (default: scoreboard-players)
    /// - `SCOREBOARD_FRESH` - Clear the stored roster at startup (default: false)
    /// - `SCOREBOARD_SESSION_ID` - Session name used for log files (default: auto-generated)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(enable) = read_env_bool("ENABLE_PERSISTENCE") {
            config.enable_persistence = enable;
        }

        config.save_data_dir = env::var("SAVE_DATA_DIR").ok().map(PathBuf::from);

        if let Ok(key) = env::var("SCOREBOARD_STORAGE_KEY") {
            let key = key.trim();
            if !key.is_empty() {
                config.storage_key = key.to_string();
            }
        }

        if let Some(fresh) = read_env_bool("SCOREBOARD_FRESH") {
            config.fresh_start = fresh;
        } else if env::var("SCOREBOARD_FRESH").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.fresh_start = true;
        }

        config.session_id = env::var("SCOREBOARD_SESSION_ID").ok();

        config
    }

    /// Directory holding the stored roster: the configured one, or the
    /// platform data directory.
    pub fn resolve_data_dir(&self) -> Option<PathBuf> {
        self.save_data_dir.clone().or_else(|| {
            directories::ProjectDirs::from("", "", "scoreboard")
                .map(|dirs| dirs.data_dir().to_path_buf())
        })
    }
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
