//! Collaborator seams of the input controller
//!
//! The controller never talks to the user list or the alert popup directly;
//! it goes through these traits so its behavior can be checked in isolation.

use crate::github::SuggestionItem;
use crate::notification::AlertSeverity;

/// Holds the results of confirmed searches
pub trait UserStore {
    /// Run a full search for `query` and replace the list with its results
    fn search_users(&mut self, query: &str);
    fn clear_users(&mut self);
    fn users(&self) -> &[SuggestionItem];
}

/// Shows short-lived messages to the user
pub trait AlertStore {
    fn set_alert(&mut self, message: &str, severity: AlertSeverity);
}
