//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::RosterManager;

/// Frontend abstraction for UI layers.
///
/// A frontend drives the roster manager from user input for the length of a
/// session. It borrows the manager rather than owning it so the composition
/// root can run the final persist after the frontend exits.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, manager: &mut RosterManager) -> Result<()>;
}
