//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
    pub steps: ScoreSteps,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig, steps: ScoreSteps) -> Self {
        Self { messages, steps }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `SCOREBOARD_SMALL_STEP` - Points per small adjustment (default: 1)
    /// - `SCOREBOARD_LARGE_STEP` - Points per large adjustment (default: 5)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        if let Some(step) = read_env::<i64>("SCOREBOARD_SMALL_STEP") {
            config.steps.small = step;
        }
        if let Some(step) = read_env::<i64>("SCOREBOARD_LARGE_STEP") {
            config.steps.large = step;
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

/// Increments offered by the per-player score controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreSteps {
    pub small: i64,
    pub large: i64,
}

impl Default for ScoreSteps {
    fn default() -> Self {
        Self { small: 1, large: 5 }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
