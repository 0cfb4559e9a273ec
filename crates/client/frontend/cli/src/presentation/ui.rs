//! Main render entry point composing the scoreboard widgets.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::{
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::AppState,
};
use client_frontend_core::{MessageLog, ViewModel};

/// Everything a frame needs, borrowed from the event loop.
pub struct RenderContext<'a> {
    pub view_model: &'a ViewModel,
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub message_panel_height: u16,
}

/// Draw one frame.
///
/// Layout, top to bottom: header, roster table, message log, footer. An open
/// prompt is drawn as a centered overlay on top of the table.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme::new();

    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                        // Header
                Constraint::Min(3),                           // Roster
                Constraint::Length(ctx.message_panel_height), // Messages
                Constraint::Length(3),                        // Footer
            ])
            .split(frame.area());

        widgets::header::render(frame, chunks[0], ctx.view_model, &theme);
        widgets::roster_table::render(frame, chunks[1], ctx.view_model, &theme);

        let visible = ctx.message_panel_height.saturating_sub(2) as usize;
        widgets::messages::render(frame, chunks[2], ctx.messages, visible, &theme);
        widgets::footer::render(frame, chunks[3], ctx.app_state);

        if let Some(prompt) = ctx.app_state.prompt() {
            let area = centered_rect(60, 3, chunks[1]);
            widgets::prompt::render(frame, area, prompt, &theme);
        }
    })?;

    Ok(())
}

/// Rectangle `percent_x` wide and `height` rows tall, centered in `area`.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = area.width.saturating_mul(percent_x) / 100;
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 5, 100, 20);
        let rect = centered_rect(60, 3, area);
        assert_eq!(rect, Rect::new(20, 13, 60, 3));

        let tiny = Rect::new(0, 0, 10, 2);
        let rect = centered_rect(60, 3, tiny);
        assert_eq!(rect.height, 2);
        assert!(rect.x + rect.width <= 10);
    }
}
