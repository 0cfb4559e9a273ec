//! Client builder with dependency injection pattern.

use crate::{Client, Frontend};
use anyhow::{Context, Result};
use runtime::RosterManager;

/// Builder for constructing a [`Client`].
///
/// Both the roster manager and the frontend are required; `build()` fails
/// fast if either is missing.
#[derive(Default)]
pub struct ClientBuilder {
    manager: Option<RosterManager>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the roster manager (required).
    ///
    /// It should be assembled via `RuntimeBuilder` from the `client-bootstrap`
    /// crate so that persistence and rendering are already wired.
    pub fn manager(mut self, manager: RosterManager) -> Self {
        self.manager = Some(manager);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    pub fn build(self) -> Result<Client> {
        let manager = self
            .manager
            .context("Roster manager is required. Use .manager() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { manager, frontend })
    }
}
