use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::{App, Focus};
use crate::notification::render_notification;

/// Percent of the body given to the suggested-questions pane
const QUESTIONS_PANE_PERCENT: u16 = 35;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.frame_count = self.frame_count.wrapping_add(1);

        let [body_area, input_area, help_area] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let [questions_area, answer_area] = Layout::horizontal([
            Constraint::Percentage(QUESTIONS_PANE_PERCENT),
            Constraint::Percentage(100 - QUESTIONS_PANE_PERCENT),
        ])
        .areas(body_area);

        crate::catalog::render_pane(
            &self.catalog,
            self.focus == Focus::Questions,
            self.session.is_busy(),
            frame,
            questions_area,
        );
        crate::session::session_render::render_pane(
            &self.session,
            self.frame_count,
            &mut self.answer_scroll,
            frame,
            answer_area,
        );
        crate::input::input_render::render_field(self, frame, input_area);
        crate::help::help_line_render::render_line(self, frame, help_area);

        if self.help.visible {
            crate::help::help_popup_render::render_popup(self, frame);
        }

        render_notification(frame, &self.notification);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
