//! Rendering handlers.

use anyhow::Result;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl EventLoop {
    /// Draw the current view-model, message log, and prompt.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = ui::RenderContext {
            view_model: &self.view_model,
            messages: &self.messages,
            app_state: &self.app_state,
            message_panel_height: self.cli_config.ui.message_panel_height,
        };

        ui::render(terminal, &ctx)?;
        self.dirty = false;
        Ok(())
    }
}
