//! Suggested-questions pane rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{CatalogState, CatalogStatus};

const BULLET: &str = "💬 ";

/// Render the suggested-questions pane
///
/// `focused` highlights the selection; `busy` dims the list because
/// submissions are disabled until the answer arrives.
pub fn render_pane(
    catalog: &CatalogState,
    focused: bool,
    busy: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Suggested questions ")
        .border_style(Style::default().fg(border_color));

    let lines = build_lines(catalog, focused, busy, area.width.saturating_sub(2));
    let offset = list_offset(catalog.selected_index(), area.height.saturating_sub(2));
    frame.render_widget(Paragraph::new(lines).block(block).scroll((offset, 0)), area);
}

/// First visible row, chosen so the selected question stays on screen
///
/// One row per question; the list scrolls only once the selection passes the
/// last visible row.
pub fn list_offset(selected: Option<usize>, visible_rows: u16) -> u16 {
    let (Some(selected), Some(last_row)) = (selected, visible_rows.checked_sub(1)) else {
        return 0;
    };
    selected
        .saturating_sub(last_row as usize)
        .try_into()
        .unwrap_or(u16::MAX)
}

fn build_lines(
    catalog: &CatalogState,
    focused: bool,
    busy: bool,
    max_width: u16,
) -> Vec<Line<'static>> {
    let placeholder = |text: &str| {
        vec![Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(Color::DarkGray),
        ))]
    };

    match catalog.status() {
        CatalogStatus::Loading => return placeholder("Loading questions..."),
        CatalogStatus::Failed(_) => {
            return placeholder("Suggestions unavailable. Type a question below.");
        }
        CatalogStatus::Loaded if catalog.is_empty() => {
            return placeholder("No suggested questions. Type one below.");
        }
        CatalogStatus::Loaded => {}
    }

    let selected = catalog.selected_index();
    let label_width = (max_width as usize).saturating_sub(BULLET.width());

    catalog
        .questions()
        .iter()
        .enumerate()
        .map(|(i, question)| {
            let is_selected = focused && selected == Some(i);
            let style = if busy {
                Style::default().fg(Color::DarkGray)
            } else if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::raw(BULLET),
                Span::styled(truncate_to_width(question, label_width), style),
            ])
        })
        .collect()
}

/// Cut `text` to `max_width` display columns, ending with `…` when cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
#[path = "catalog_render_tests.rs"]
mod catalog_render_tests;
