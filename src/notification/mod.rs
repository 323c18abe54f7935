//! Notification module for askterm
//!
//! Transient messages shown in the top-right corner. Catalog and query
//! failures are surfaced here after being logged.

mod render;
mod state;

pub use render::render_notification;
pub use state::{Notification, NotificationKind, NotificationState};
