//! Help popup rendering

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::help::{HELP_ENTRIES, HELP_FOOTER};
use crate::widgets::popup;

/// Columns between the key column and the descriptions
const KEY_GAP: usize = 3;
/// Borders plus one column of padding on each side
const FRAME_WIDTH: u16 = 4;
/// Below this the popup is skipped entirely
const MIN_AREA: (u16, u16) = (20, 8);

/// Render the keyboard shortcuts over the whole screen
pub fn render_popup(app: &mut App, frame: &mut Frame) {
    let frame_area = frame.area();
    if frame_area.width < MIN_AREA.0 || frame_area.height < MIN_AREA.1 {
        return;
    }

    let lines = help_lines();
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = (content_width + FRAME_WIDTH).max(HELP_FOOTER.width() as u16 + FRAME_WIDTH);
    let area = popup::centered_popup(frame_area, width, lines.len() as u16 + 2);

    app.help
        .scroll
        .update_bounds(lines.len() as u32, area.height.saturating_sub(2));

    let block = Block::bordered()
        .title(" Keyboard Shortcuts ")
        .title_bottom(
            Line::from(Span::styled(
                format!(" {} ", HELP_FOOTER),
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        )
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let body = lines
        .into_iter()
        .map(|line| {
            let mut spans = vec![Span::raw(" ")];
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect::<Vec<_>>();

    popup::clear_area(frame, area);
    frame.render_widget(
        Paragraph::new(body)
            .block(block)
            .scroll((app.help.scroll.offset, 0)),
        area,
    );
}

/// One line per help entry: section headers, blank spacers, and key rows with
/// descriptions aligned past the widest key
pub fn help_lines() -> Vec<Line<'static>> {
    let key_column = HELP_ENTRIES
        .iter()
        .map(|(key, _)| key.width())
        .max()
        .unwrap_or(0)
        + KEY_GAP;

    HELP_ENTRIES
        .iter()
        .map(|&(key, desc)| match (key.is_empty(), desc.is_empty()) {
            (true, true) => Line::default(),
            (true, false) => Line::from(Span::styled(
                desc,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )),
            _ => Line::from(vec![
                Span::styled(
                    format!("{}{}", key, " ".repeat(key_column - key.width())),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(desc),
            ]),
        })
        .collect()
}
