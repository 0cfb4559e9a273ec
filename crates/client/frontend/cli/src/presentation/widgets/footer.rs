//! Footer widget displaying context-sensitive key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{AppMode, AppState};

pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let text = match &app_state.mode {
        AppMode::Normal => vec![Line::from(vec![
            Span::raw("[↑↓/jk] Select | "),
            Span::raw("[+/-] Step | "),
            Span::raw("] / [ Big step | "),
            Span::raw("[a] Add | "),
            Span::raw("[r] Rename | "),
            Span::raw("[x] Remove | "),
            Span::raw("[t] Distribute | "),
            Span::raw("[z] Reset | "),
            Span::raw("[q] Quit"),
        ])],
        AppMode::Prompt(_) => vec![Line::from(vec![
            Span::raw("[Enter] Confirm | "),
            Span::raw("[Backspace] Delete | "),
            Span::raw("[ESC] Cancel"),
        ])],
    };

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
