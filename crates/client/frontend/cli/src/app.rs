//! Glue code tying the roster manager and terminal UI together.
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::watch;

use client_frontend_core::{FrontendConfig, Frontend};
use roster_core::RosterSnapshot;
use runtime::RosterManager;

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;

/// Terminal frontend.
///
/// Observes the roster through the receiving end of a
/// [`runtime::WatchRenderer`] installed on the manager it is given.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
    snapshots: watch::Receiver<RosterSnapshot>,
}

impl CliFrontend {
    pub fn new(
        frontend_config: FrontendConfig,
        cli_config: CliConfig,
        snapshots: watch::Receiver<RosterSnapshot>,
    ) -> Self {
        Self {
            frontend_config,
            cli_config,
            snapshots,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, manager: &mut RosterManager) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        let mut event_loop = EventLoop::new(
            self.snapshots.clone(),
            &self.frontend_config,
            self.cli_config.clone(),
        );

        if manager.has_repository() {
            event_loop
                .messages
                .push_text(format!("Loaded {} players.", manager.len()));
        } else {
            event_loop
                .messages
                .push_text("Persistence disabled; changes last until exit.");
        }

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let messages = event_loop.run(manager, &mut terminal).await?;

        terminal::restore()?;
        tracing::info!(
            "CLI frontend exiting ({} messages this session)",
            messages.len()
        );

        Ok(())
    }
}
