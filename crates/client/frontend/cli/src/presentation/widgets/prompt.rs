//! Single-line input overlay.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{presentation::theme::RatatuiTheme, state::Prompt};

pub fn render(frame: &mut Frame, area: Rect, prompt: &Prompt, theme: &RatatuiTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(prompt.kind.title(), theme.style_title()));

    let paragraph = Paragraph::new(prompt.input.as_str()).block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);

    let inner_width = area.width.saturating_sub(2);
    let typed = u16::try_from(prompt.input.chars().count()).unwrap_or(u16::MAX);
    let x = area.x + 1 + typed.min(inner_width.saturating_sub(1));
    frame.set_cursor_position(Position::new(x, area.y + 1));
}
