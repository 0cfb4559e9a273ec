//! Input handling (keyboard polling and dispatch).

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEventKind};
use runtime::RosterManager;
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui};

impl EventLoop {
    /// Poll for keyboard input. Returns `true` when the user quits.
    pub(in crate::event) fn handle_input_tick(
        &mut self,
        manager: &mut RosterManager,
        terminal: &mut Tui,
    ) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        let quit = match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                let action = self.input.handle_key(&self.app_state.mode, key);
                self.dispatch(action, manager)
            }
            TermEvent::Resize(_, _) => {
                self.dirty = true;
                false
            }
            _ => false,
        };

        if quit {
            return Ok(true);
        }

        if self.dirty {
            if self.snapshots.has_changed().unwrap_or(false) {
                self.sync_snapshot();
            }
            self.render(terminal)?;
        }
        Ok(false)
    }

    /// Apply a decoded key action. Returns `true` when the user quits.
    pub(crate) fn dispatch(&mut self, action: KeyAction, manager: &mut RosterManager) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::None => return false,
            KeyAction::SelectNext => self.view_model.select_next(),
            KeyAction::SelectPrevious => self.view_model.select_previous(),
            KeyAction::Adjust(delta) => self.adjust_selected(manager, delta),
            KeyAction::BeginAdd => self.begin_add(),
            KeyAction::BeginRename => self.begin_rename(),
            KeyAction::BeginDistribute => self.begin_distribute(),
            KeyAction::RemoveSelected => self.remove_selected(manager),
            KeyAction::ResetScores => self.reset_scores(manager),
            KeyAction::PromptInput(ch) => {
                if let Some(prompt) = self.app_state.prompt_mut() {
                    prompt.push(ch);
                }
            }
            KeyAction::PromptBackspace => {
                if let Some(prompt) = self.app_state.prompt_mut() {
                    prompt.backspace();
                }
            }
            KeyAction::PromptSubmit => self.submit_prompt(manager),
            KeyAction::PromptCancel => {
                self.app_state.close_prompt();
            }
        }

        self.dirty = true;
        false
    }
}
