//! Header widget with roster totals and the current leader.

use client_frontend_core::ViewModel;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let leader = match view_model.leader() {
        Some(row) => format!("{} ({})", row.name, row.score),
        None => "-".to_string(),
    };

    let text = vec![Line::from(vec![
        Span::raw("Players: "),
        Span::styled(
            view_model.player_count().to_string(),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" | Total: "),
        Span::styled(
            view_model.total_score().to_string(),
            theme.style_score(view_model.total_score()),
        ),
        Span::raw(" | Leader: "),
        Span::styled(leader, theme.style_leader(Style::default())),
    ])];

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("Scoreboard", theme.style_title())),
    );

    frame.render_widget(paragraph, area);
}
