//! Notification module for ghsuggest
//!
//! Provides the alert popup: a transient message in the top-right corner that
//! expires on its own. It is the app's `AlertStore`.

mod render;
mod state;

pub use render::render_notification;
pub use state::{AlertSeverity, Notification, NotificationState};
