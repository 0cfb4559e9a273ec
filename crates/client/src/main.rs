//! Scoreboard client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Roster manager (state + persistence) via RuntimeBuilder
//! 2. Frontend (UI) - CLI today
//!
//! Both are built independently and injected into the Client container.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)

use anyhow::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, ...)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_bootstrap::{RuntimeBuilder, RuntimeConfig};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use runtime::WatchRenderer;
    use scoreboard_client::Client;

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    let _log_guard = logging::setup_logging(&runtime_config.session_id)?;

    tracing::info!("Starting scoreboard client");
    tracing::info!("Session ID: {:?}", runtime_config.session_id);
    tracing::info!("Persistence: {}", runtime_config.enable_persistence);

    // 3. Build the roster manager, publishing snapshots to the frontend
    let (renderer, snapshots) = WatchRenderer::channel();
    let setup = RuntimeBuilder::new()
        .config(runtime_config)
        .renderer(renderer)
        .build()?;

    tracing::info!("Roster manager built with {} players", setup.manager.len());

    // 4. Build Frontend (independent layer)
    let frontend = CliFrontend::new(frontend_config, cli_config, snapshots);

    // 5. Build and run
    let client = Client::builder()
        .manager(setup.manager)
        .frontend(frontend)
        .build()?;

    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
