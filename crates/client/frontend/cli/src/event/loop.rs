//! Event loop orchestrating roster snapshots, user input, and rendering.
//!
//! This module coordinates three main concerns:
//! - Snapshot consumption from the manager's render channel
//! - Keyboard input processing (roster operations and prompts)
//! - Rendering the view-model and message log

use anyhow::Result;
use roster_core::RosterSnapshot;
use runtime::RosterManager;
use tokio::{
    sync::watch,
    time::{self, Duration},
};

use crate::{config::CliConfig, input::InputHandler, presentation::terminal::Tui, state::AppState};
use client_frontend_core::{FrontendConfig, MessageLog, ViewModel};

const FRAME_INTERVAL_MS: u64 = 16;

/// Event loop managing presentation state and driving the roster manager.
///
/// The loop owns the view-model and message log. Roster changes reach it only
/// through the snapshot channel, the same way any other render collaborator
/// would observe them.
pub struct EventLoop {
    pub(crate) snapshots: watch::Receiver<RosterSnapshot>,
    pub(crate) input: InputHandler,
    pub(crate) app_state: AppState,
    pub(crate) view_model: ViewModel,
    pub(crate) messages: MessageLog,
    pub(crate) cli_config: CliConfig,
    /// Set when something other than a snapshot requires a redraw.
    pub(crate) dirty: bool,
}

impl EventLoop {
    pub fn new(
        mut snapshots: watch::Receiver<RosterSnapshot>,
        frontend_config: &FrontendConfig,
        cli_config: CliConfig,
    ) -> Self {
        let view_model = ViewModel::new(snapshots.borrow_and_update().clone());

        Self {
            snapshots,
            input: InputHandler::new(frontend_config.steps),
            app_state: AppState::new(),
            view_model,
            messages: MessageLog::new(frontend_config.messages.capacity),
            cli_config,
            dirty: false,
        }
    }

    pub async fn run(
        mut self,
        manager: &mut RosterManager,
        terminal: &mut Tui,
    ) -> Result<MessageLog> {
        self.render(terminal)?;

        loop {
            tokio::select! {
                changed = self.snapshots.changed() => {
                    if changed.is_err() {
                        tracing::warn!("Snapshot channel closed");
                        break;
                    }
                    self.sync_snapshot();
                    self.render(terminal)?;
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(manager, terminal)? {
                        break;
                    }
                }
            }
        }

        Ok(self.messages)
    }

    /// Pull the latest snapshot into the view-model.
    pub(crate) fn sync_snapshot(&mut self) {
        let snapshot = self.snapshots.borrow_and_update().clone();
        self.view_model.apply_snapshot(snapshot);
    }
}
