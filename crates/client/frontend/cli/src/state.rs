//! Application state for mode management and text prompts.

use roster_core::Target;

/// Top-level application mode determining input handling and UI layout.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Browsing the roster; single keys trigger actions.
    #[default]
    Normal,
    /// Collecting a line of text for an operation.
    Prompt(Prompt),
}

/// What a prompt's text will be used for once submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptKind {
    /// Name of a new player.
    AddName,
    /// Optional initial score for the player named in the previous step.
    AddScore { name: String },
    /// New name for the targeted player.
    Rename { target: Target, current: String },
    /// Total points to split across all players.
    Distribute,
}

impl PromptKind {
    pub fn title(&self) -> String {
        match self {
            PromptKind::AddName => "New player name".to_string(),
            PromptKind::AddScore { name } => format!("Initial score for {} (blank = 0)", name),
            PromptKind::Rename { current, .. } => format!("Rename {}", current),
            PromptKind::Distribute => "Total points to distribute".to_string(),
        }
    }
}

/// Single-line text prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: String::new(),
        }
    }

    /// Prompt pre-filled with `input`, e.g. the current name when renaming.
    pub fn with_input(kind: PromptKind, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }

    pub fn push(&mut self, ch: char) {
        if !ch.is_control() {
            self.input.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }
}

/// Mutable application state tracking the current mode.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub mode: AppMode,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        match &self.mode {
            AppMode::Prompt(prompt) => Some(prompt),
            AppMode::Normal => None,
        }
    }

    pub fn prompt_mut(&mut self) -> Option<&mut Prompt> {
        match &mut self.mode {
            AppMode::Prompt(prompt) => Some(prompt),
            AppMode::Normal => None,
        }
    }

    pub fn open_prompt(&mut self, prompt: Prompt) {
        self.mode = AppMode::Prompt(prompt);
    }

    /// Leave prompt mode, returning the prompt that was open.
    pub fn close_prompt(&mut self) -> Option<Prompt> {
        match std::mem::take(&mut self.mode) {
            AppMode::Prompt(prompt) => Some(prompt),
            AppMode::Normal => None,
        }
    }
}
