//! Roster table: one row per player in insertion order.

use client_frontend_core::ViewModel;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let block = Block::default().borders(Borders::ALL).title("Players");

    if view_model.rows().is_empty() {
        let hint = Paragraph::new("No players yet. Press [a] to add one.").block(block);
        frame.render_widget(hint, area);
        return;
    }

    let leader = view_model.leader().map(|row| row.id);

    let rows: Vec<Row> = view_model
        .rows()
        .iter()
        .map(|row| {
            let mut name_style = Style::default();
            if Some(row.id) == leader {
                name_style = theme.style_leader(name_style);
            }

            Row::new(vec![
                Cell::from((row.position + 1).to_string()),
                Cell::from(Span::styled(row.name.clone(), name_style)),
                Cell::from(Span::styled(row.score.to_string(), theme.style_score(row.score))),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Min(10),
        Constraint::Length(12),
    ];

    let header = Row::new(vec!["#", "Name", "Score"])
        .style(Style::default().add_modifier(Modifier::UNDERLINED));

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(theme.style_selected())
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(view_model.selected_position());
    frame.render_stateful_widget(table, area, &mut state);
}
