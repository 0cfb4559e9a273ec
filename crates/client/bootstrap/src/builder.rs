//! Builds the roster manager and its repository from configuration.
use anyhow::{Context, Result};
use roster_core::RosterSnapshot;
use runtime::{FileRosterRepository, RenderSink, RosterManager, RosterRepository};

use crate::config::RuntimeConfig;

/// Builder that assembles the roster manager used by front-ends.
#[derive(Default)]
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    renderer: Option<Box<dyn RenderSink>>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Render collaborator handed to the manager (optional).
    pub fn renderer(mut self, renderer: impl RenderSink + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    pub fn build(self) -> Result<RuntimeSetup> {
        let mut builder = RosterManager::builder();

        if let Some(mut renderer) = self.renderer {
            builder =
                builder.renderer(move |snapshot: &RosterSnapshot| renderer.render(snapshot));
        }

        if self.config.enable_persistence {
            let repository = open_repository(&self.config)?;
            tracing::info!("Roster storage: {}", repository.path().display());
            builder = builder.repository(repository);
        } else {
            tracing::info!("Persistence disabled, roster lives for this session only");
        }

        let manager = builder.build();

        Ok(RuntimeSetup {
            config: self.config,
            manager,
        })
    }
}

fn open_repository(config: &RuntimeConfig) -> Result<FileRosterRepository> {
    let dir = config
        .resolve_data_dir()
        .context("No data directory available. Set SAVE_DATA_DIR.")?;

    let repository = FileRosterRepository::new(&dir, &config.storage_key)
        .with_context(|| format!("Failed to open roster storage in {}", dir.display()))?;

    if config.fresh_start {
        repository
            .clear()
            .context("Failed to clear stored roster")?;
        tracing::info!("Cleared stored roster for a fresh start");
    }

    Ok(repository)
}

pub struct RuntimeSetup {
    pub config: RuntimeConfig,
    pub manager: RosterManager,
}
