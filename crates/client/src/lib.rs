//! Top-level client orchestrating the roster manager and a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ RosterManager (roster state, persistence, render notifications)
//!   └─→ Frontend (UI layer - CLI, future GUI)
//! ```
//!
//! The frontend borrows the manager while it runs; once it returns, the
//! client hands the manager back to [`RosterManager::finish`] for the final
//! persist.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use runtime::RosterManager;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` receives an assembled manager and a frontend
/// 2. `Client::run()` transfers control to the frontend until the user quits
/// 3. The manager is finished even when the frontend fails
pub struct Client {
    manager: RosterManager,
    frontend: Box<dyn Frontend>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend to completion, then finish the manager.
    ///
    /// # Errors
    ///
    /// Returns the frontend's error, if any.
    pub async fn run(self) -> Result<()> {
        let Client {
            mut manager,
            mut frontend,
        } = self;

        let frontend_result = frontend.run(&mut manager).await;
        if let Err(e) = &frontend_result {
            tracing::error!("Frontend error: {}", e);
        }

        manager.finish();
        frontend_result
    }
}
