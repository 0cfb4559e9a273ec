//! Roster operations triggered from the keyboard.

use client_frontend_core::format::{format_error, format_outcome};
use client_frontend_core::MessageEntry;
use roster_core::{Outcome, RosterError, Target};
use runtime::RosterManager;

use super::super::EventLoop;
use crate::state::{Prompt, PromptKind};

impl EventLoop {
    pub(super) fn adjust_selected(&mut self, manager: &mut RosterManager, delta: i64) {
        let Some(target) = self.view_model.selected_target() else {
            self.messages.push(MessageEntry::warning("No player selected"));
            return;
        };
        self.apply(manager, |m| m.adjust_score(target, delta));
    }

    pub(super) fn remove_selected(&mut self, manager: &mut RosterManager) {
        let Some(target) = self.view_model.selected_target() else {
            self.messages.push(MessageEntry::warning("No player selected"));
            return;
        };
        self.apply(manager, |m| m.remove_player(target));
    }

    pub(super) fn reset_scores(&mut self, manager: &mut RosterManager) {
        self.apply(manager, |m| Ok(m.reset_scores()));
    }

    pub(super) fn begin_add(&mut self) {
        self.app_state.open_prompt(Prompt::new(PromptKind::AddName));
    }

    pub(super) fn begin_rename(&mut self) {
        let Some(row) = self.view_model.selected_row() else {
            self.messages.push(MessageEntry::warning("No player selected"));
            return;
        };

        let kind = PromptKind::Rename {
            target: Target::Id(row.id),
            current: row.name.clone(),
        };
        let prompt = Prompt::with_input(kind, row.name.clone());
        self.app_state.open_prompt(prompt);
    }

    pub(super) fn begin_distribute(&mut self) {
        self.app_state.open_prompt(Prompt::new(PromptKind::Distribute));
    }

    /// Close the open prompt and run the operation it was collecting input for.
    pub(super) fn submit_prompt(&mut self, manager: &mut RosterManager) {
        let Some(prompt) = self.app_state.close_prompt() else {
            return;
        };

        match prompt.kind {
            PromptKind::AddName => {
                // Blank names still go through the manager so they are
                // reported as skipped the same way as any other no-op.
                if prompt.input.trim().is_empty() {
                    self.apply(manager, |m| Ok(m.add_player(&prompt.input, None)));
                } else {
                    let name = prompt.input.trim().to_string();
                    self.app_state
                        .open_prompt(Prompt::new(PromptKind::AddScore { name }));
                }
            }
            PromptKind::AddScore { name } => {
                self.apply(manager, |m| {
                    Ok(m.add_player_from_input(&name, &prompt.input))
                });
            }
            PromptKind::Rename { target, .. } => {
                self.apply(manager, |m| m.rename_player(target, &prompt.input));
            }
            PromptKind::Distribute => {
                self.apply(manager, |m| Ok(m.distribute_points_from_input(&prompt.input)));
            }
        }
    }

    /// Run one manager operation and log its result.
    fn apply<F>(&mut self, manager: &mut RosterManager, op: F)
    where
        F: FnOnce(&mut RosterManager) -> Result<Outcome, RosterError>,
    {
        let before = manager.snapshot();

        let entry = match op(manager) {
            Ok(outcome) => format_outcome(&outcome, &before, &manager.snapshot()),
            Err(e) => {
                tracing::warn!("Roster operation failed: {}", e);
                format_error(&e)
            }
        };

        self.messages.push(entry);
    }
}
