//! Colors and emphasis for the scoreboard.

use client_frontend_core::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

/// Ratatui styling rules shared by all widgets.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    /// Positive scores are green, negative red, zero neutral.
    pub fn style_score(&self, score: i64) -> Style {
        let color = match score.signum() {
            1 => Color::LightGreen,
            -1 => Color::LightRed,
            _ => Color::Gray,
        };
        Style::default().fg(color)
    }

    pub fn style_leader(&self, base: Style) -> Style {
        base.fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    pub fn style_selected(&self) -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    pub fn style_title(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_colors_follow_sign() {
        let theme = RatatuiTheme::new();
        assert_eq!(theme.style_score(3).fg, Some(Color::LightGreen));
        assert_eq!(theme.style_score(-3).fg, Some(Color::LightRed));
        assert_eq!(theme.style_score(0).fg, Some(Color::Gray));
    }
}
