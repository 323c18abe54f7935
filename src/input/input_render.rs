//! Input field rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::app::{App, Focus};

/// Render the question input field
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let border_color = if app.focus == Focus::Input {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let mut title_spans = vec![Span::raw(" Ask ")];
    if app.session.is_busy() {
        title_spans.push(Span::styled(
            "(waiting for answer) ",
            Style::default().fg(Color::DarkGray),
        ));
    }

    app.input.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(title_spans))
            .border_style(Style::default().fg(border_color)),
    );

    // Hide the cursor when the field is not focused
    let cursor_style = if app.focus == Focus::Input {
        Style::default().add_modifier(ratatui::style::Modifier::REVERSED)
    } else {
        Style::default()
    };
    app.input.textarea.set_cursor_style(cursor_style);

    frame.render_widget(&app.input.textarea, area);
}
