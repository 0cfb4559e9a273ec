//! Message log panel, newest entry at the bottom.

use client_frontend_core::MessageLog;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    messages: &MessageLog,
    visible: usize,
    theme: &RatatuiTheme,
) {
    let mut items: Vec<ListItem> = messages
        .recent(visible)
        .map(|entry| ListItem::new(entry.text.as_str()).style(theme.style_message(entry.level)))
        .collect();

    // Pad so the newest entry sits on the bottom line.
    while items.len() < visible {
        items.push(ListItem::new(""));
    }

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Messages"))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}
