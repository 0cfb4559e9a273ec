//! File logging for the terminal client.
//!
//! The TUI owns stdout, so log output goes to a per-session file under the
//! platform cache directory instead of stderr.
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the global subscriber writing to `<cache>/logs/<session>/client.log`.
///
/// The returned guard flushes buffered lines when dropped; keep it alive for
/// the whole process.
pub fn setup_logging(session_id: &Option<String>) -> Result<WorkerGuard> {
    let session_id = session_id.clone().unwrap_or_else(default_session_id);

    let session_log_dir = log_directory().join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(guard)
}

fn default_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{}", timestamp)
}

fn log_directory() -> PathBuf {
    match ProjectDirs::from("", "", "scoreboard") {
        Some(dirs) => dirs.cache_dir().join("logs"),
        None => std::env::temp_dir().join("scoreboard").join("logs"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_session_ids_are_prefixed() {
        assert!(default_session_id().starts_with("session_"));
    }

    #[test]
    fn logs_live_under_a_scoreboard_directory() {
        let dir = log_directory();
        assert!(dir.ends_with("logs"));
        assert!(dir.to_string_lossy().contains("scoreboard"));
    }
}
