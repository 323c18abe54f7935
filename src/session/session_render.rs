//! Answer pane rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::QuerySession;
use crate::scroll::ScrollState;

const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Frames each spinner glyph stays on screen
const FRAMES_PER_GLYPH: u64 = 8;

pub fn spinner_glyph(frame_count: u64) -> &'static str {
    let idx = (frame_count / FRAMES_PER_GLYPH) as usize % SPINNER_FRAMES.len();
    SPINNER_FRAMES[idx]
}

/// Render the answer pane and refresh its scroll bounds
pub fn render_pane(
    session: &QuerySession,
    frame_count: u64,
    scroll: &mut ScrollState,
    frame: &mut Frame,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(build_title(session))
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(build_lines(session, frame_count)).wrap(Wrap { trim: false });
    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);
    scroll.update_bounds(wrapped_row_count(&paragraph, inner_width), inner_height);

    frame.render_widget(paragraph.block(block).scroll((scroll.offset, 0)), area);
}

/// Pane title with the confidence badge of the settled answer
pub fn build_title(session: &QuerySession) -> Line<'static> {
    let mut spans = vec![Span::raw(" Answer ")];
    if let Some(answer) = session.answer() {
        spans.push(Span::styled(
            format!("[{}]", answer.confidence),
            Style::default()
                .fg(answer.tier().color())
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

pub fn build_lines(session: &QuerySession, frame_count: u64) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(pending) = session.pending_question() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", spinner_glyph(frame_count)),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                "Searching documents...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("Asking: {}", pending),
            Style::default().fg(Color::Gray),
        )));

        // Previous answer stays visible, dimmed, until the new one lands
        if let Some(answer) = session.answer() {
            lines.push(Line::from(""));
            for text_line in answer.text.lines() {
                lines.push(Line::from(Span::styled(
                    text_line.to_string(),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
        return lines;
    }

    let Some(answer) = session.answer() else {
        lines.push(Line::from(Span::styled(
            "Pick a suggested question or type your own, then press Enter.",
            Style::default().fg(Color::Gray),
        )));
        return lines;
    };

    if let Some(question) = session.last_question() {
        lines.push(Line::from(vec![
            Span::styled("Q: ", Style::default().fg(Color::Cyan)),
            Span::styled(
                question.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));
    }

    for text_line in answer.text.lines() {
        lines.push(Line::from(Span::styled(
            text_line.to_string(),
            Style::default().fg(Color::White),
        )));
    }

    let sources = answer.source_labels();
    if !sources.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "SOURCES",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for source in sources {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(Color::DarkGray)),
                Span::raw(source),
            ]));
        }
    }

    lines
}

/// Rows the paragraph occupies once word-wrapped at `width` columns
///
/// Counted on the paragraph without its block, so `width` is the inner width.
pub fn wrapped_row_count(paragraph: &Paragraph, width: u16) -> u32 {
    paragraph.line_count(width).try_into().unwrap_or(u32::MAX)
}

#[cfg(test)]
#[path = "session_render_tests.rs"]
mod session_render_tests;
