use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::{App, Focus};
use crate::session::SubmitOutcome;

/// Lines moved per arrow key in the help popup
const HELP_SCROLL_STEP: u16 = 1;

impl App {
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Paste(text) => self.handle_paste_event(text),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::Questions => self.handle_questions_key(key),
            Focus::Input => self.handle_input_key(key),
        }
    }

    /// Paste goes into the question field as a single line
    pub fn handle_paste_event(&mut self, text: String) {
        let single_line = text.replace(['\r', '\n'], " ");
        self.focus = Focus::Input;
        self.input.textarea.insert_str(single_line);
    }

    /// Keys that work regardless of focus
    /// Returns true if key was handled
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // Help popup swallows everything while open
        if self.help.visible {
            match key.code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.help.close();
                }
                KeyCode::Down | KeyCode::Char('j') => self.help.scroll.scroll_down(HELP_SCROLL_STEP),
                KeyCode::Up | KeyCode::Char('k') => self.help.scroll.scroll_up(HELP_SCROLL_STEP),
                KeyCode::PageDown => self.help.scroll.page_down(),
                KeyCode::PageUp => self.help.scroll.page_up(),
                _ => {}
            }
            return true;
        }

        match key.code {
            KeyCode::F(1) => {
                self.help.toggle();
                true
            }
            KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggled();
                true
            }
            KeyCode::PageDown => {
                self.answer_scroll.page_down();
                true
            }
            KeyCode::PageUp => {
                self.answer_scroll.page_up();
                true
            }
            _ => false,
        }
    }

    fn handle_questions_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.catalog.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.catalog.select_next(),
            KeyCode::Enter => {
                if let Some(question) = self.catalog.selected_question().map(str::to_string) {
                    self.submit_question(&question);
                }
            }
            KeyCode::Char('?') => self.help.toggle(),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            let question = self.input.question().to_string();
            if self.submit_question(&question) {
                self.input.clear();
            }
            return;
        }

        self.input.textarea.input(key);
    }

    /// Hand a question to the session and report why it was not sent
    ///
    /// Returns true when the question went out.
    fn submit_question(&mut self, question: &str) -> bool {
        match self.session.submit(question) {
            SubmitOutcome::Submitted { .. } => {
                self.answer_scroll.reset();
                true
            }
            SubmitOutcome::Busy => {
                self.notification.show("Still waiting for the previous answer");
                false
            }
            SubmitOutcome::Empty => false,
            SubmitOutcome::Disconnected => {
                self.notification
                    .show_error("Answering service is unavailable (worker stopped)");
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
