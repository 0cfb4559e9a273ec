//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use client_frontend_core::ScoreSteps;
use crossterm::event::{KeyCode, KeyEvent};

use crate::state::AppMode;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    SelectNext,
    SelectPrevious,
    /// Add `delta` to the selected player's score.
    Adjust(i64),
    BeginAdd,
    BeginRename,
    BeginDistribute,
    RemoveSelected,
    ResetScores,
    PromptInput(char),
    PromptBackspace,
    PromptSubmit,
    PromptCancel,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into commands for the current mode.
pub struct InputHandler {
    steps: ScoreSteps,
}

impl InputHandler {
    pub fn new(steps: ScoreSteps) -> Self {
        Self { steps }
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, mode: &AppMode, key: KeyEvent) -> KeyAction {
        match mode {
            AppMode::Normal => self.handle_normal(key),
            AppMode::Prompt(_) => Self::handle_prompt(key),
        }
    }

    fn handle_normal(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Up => KeyAction::SelectPrevious,
            KeyCode::Down => KeyAction::SelectNext,
            KeyCode::Delete => KeyAction::RemoveSelected,
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, ch: char) -> KeyAction {
        match ch {
            'q' | 'Q' => KeyAction::Quit,
            'k' | 'K' => KeyAction::SelectPrevious,
            'j' | 'J' => KeyAction::SelectNext,
            '+' | '=' => KeyAction::Adjust(self.steps.small),
            '-' | '_' => KeyAction::Adjust(self.steps.small.saturating_neg()),
            ']' => KeyAction::Adjust(self.steps.large),
            '[' => KeyAction::Adjust(self.steps.large.saturating_neg()),
            'a' | 'A' => KeyAction::BeginAdd,
            'r' | 'R' => KeyAction::BeginRename,
            'x' | 'X' => KeyAction::RemoveSelected,
            't' | 'T' => KeyAction::BeginDistribute,
            'z' | 'Z' => KeyAction::ResetScores,
            _ => KeyAction::None,
        }
    }

    fn handle_prompt(key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char(ch) => KeyAction::PromptInput(ch),
            KeyCode::Backspace => KeyAction::PromptBackspace,
            KeyCode::Enter => KeyAction::PromptSubmit,
            KeyCode::Esc => KeyAction::PromptCancel,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Prompt, PromptKind};
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_score_adjustments() {
        let handler = InputHandler::new(ScoreSteps::default());
        let normal = AppMode::Normal;
        assert_eq!(
            handler.handle_key(&normal, key(KeyCode::Char('+'))),
            KeyAction::Adjust(1)
        );
        assert_eq!(
            handler.handle_key(&normal, key(KeyCode::Char('-'))),
            KeyAction::Adjust(-1)
        );
        assert_eq!(
            handler.handle_key(&normal, key(KeyCode::Char(']'))),
            KeyAction::Adjust(5)
        );
        assert_eq!(
            handler.handle_key(&normal, key(KeyCode::Char('['))),
            KeyAction::Adjust(-5)
        );
    }

    #[test]
    fn honors_configured_steps() {
        let handler = InputHandler::new(ScoreSteps { small: 2, large: 10 });
        assert_eq!(
            handler.handle_key(&AppMode::Normal, key(KeyCode::Char('['))),
            KeyAction::Adjust(-10)
        );
    }

    #[test]
    fn prompt_mode_captures_letters() {
        let handler = InputHandler::new(ScoreSteps::default());
        let prompt = AppMode::Prompt(Prompt::new(PromptKind::AddName));

        assert_eq!(
            handler.handle_key(&prompt, key(KeyCode::Char('q'))),
            KeyAction::PromptInput('q')
        );
        assert_eq!(
            handler.handle_key(&prompt, key(KeyCode::Esc)),
            KeyAction::PromptCancel
        );
        assert_eq!(
            handler.handle_key(&prompt, key(KeyCode::Enter)),
            KeyAction::PromptSubmit
        );
    }

    #[test]
    fn maps_navigation_and_quit() {
        let handler = InputHandler::new(ScoreSteps::default());
        let normal = AppMode::Normal;
        assert_eq!(
            handler.handle_key(&normal, key(KeyCode::Down)),
            KeyAction::SelectNext
        );
        assert_eq!(
            handler.handle_key(&normal, key(KeyCode::Char('k'))),
            KeyAction::SelectPrevious
        );
        assert_eq!(
            handler.handle_key(&normal, key(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler::new(ScoreSteps::default());
        assert_eq!(
            handler.handle_key(&AppMode::Normal, key(KeyCode::Char('y'))),
            KeyAction::None
        );
    }
}
