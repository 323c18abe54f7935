//! Help line rendering
//!
//! This module handles rendering of the help line at the bottom of the screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::app::{App, Focus};

/// Render the help line (bottom of screen)
pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let help_text = if app.session.is_busy() {
        " Waiting for answer... | PgUp/PgDn: Scroll | F1: Help | Esc: Quit"
    } else if app.focus == Focus::Questions {
        " ↑↓: Select | Enter: Ask | Tab: Type a question | F1/?: Help | q: Quit"
    } else {
        " Enter: Ask | Tab: Suggested questions | PgUp/PgDn: Scroll | F1: Help | Esc: Quit"
    };

    let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(help, area);
}
