use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::state::NotificationState;
use crate::widgets::popup;

const MAX_WIDTH: u16 = 60;
const MIN_WIDTH: u16 = 20;
/// Message lines shown before the text is cut off
const MAX_MESSAGE_LINES: u16 = 3;

/// Render the current notification, if any, over the top-right corner
pub fn render_notification(frame: &mut Frame, state: &NotificationState) {
    let Some(notification) = state.current() else {
        return;
    };

    let frame_area = frame.area();
    if frame_area.width < MIN_WIDTH || frame_area.height < 3 {
        return;
    }

    let text_width = notification.message.width() as u16;
    let inner_max = MAX_WIDTH.saturating_sub(4);
    let width = (text_width.min(inner_max) + 4).max(MIN_WIDTH);
    let lines = text_width.div_ceil(inner_max.max(1)).clamp(1, MAX_MESSAGE_LINES);
    let area = popup::top_right_popup(frame_area, width, lines + 2, 1);

    let color = notification.kind.color();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let content = Paragraph::new(Line::from(Span::styled(
        notification.message.clone(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: true })
    .block(block);

    popup::clear_area(frame, area);
    frame.render_widget(content, area);
}
