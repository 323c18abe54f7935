use std::time::{Duration, Instant};

use ratatui::style::Color;

/// How long a notification stays on screen
pub const DEFAULT_DURATION: Duration = Duration::from_secs(4);
/// Errors stay up a little longer
pub const ERROR_DURATION: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn color(&self) -> Color {
        match self {
            NotificationKind::Info => Color::Cyan,
            NotificationKind::Warning => Color::Yellow,
            NotificationKind::Error => Color::Red,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    shown_at: Instant,
    duration: Duration,
}

impl Notification {
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= self.duration
    }
}

/// The notification currently on screen, if any
///
/// A new notification replaces the current one.
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
    /// Count of notifications shown this session
    shown: usize,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>) {
        self.push(message.into(), NotificationKind::Info, DEFAULT_DURATION);
    }

    pub fn show_warning(&mut self, message: impl Into<String>) {
        self.push(message.into(), NotificationKind::Warning, DEFAULT_DURATION);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.push(message.into(), NotificationKind::Error, ERROR_DURATION);
    }

    fn push(&mut self, message: String, kind: NotificationKind, duration: Duration) {
        self.current = Some(Notification {
            message,
            kind,
            shown_at: Instant::now(),
            duration,
        });
        self.shown += 1;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn shown_count(&self) -> usize {
        self.shown
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Drop the current notification once it has expired
    pub fn clear_if_expired(&mut self) {
        self.clear_if_expired_at(Instant::now());
    }

    fn clear_if_expired_at(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|n| n.is_expired_at(now)) {
            self.current = None;
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
