use crate::input::SearchInput;
use crate::notification::{AlertSeverity, NotificationState};
use crate::users::{UsersEvent, UsersState};

/// Application state
pub struct App {
    pub search: SearchInput,
    pub users: UsersState,
    pub notification: NotificationState,
    pub should_quit: bool,
}

impl App {
    pub fn new(search: SearchInput, users: UsersState, notification: NotificationState) -> Self {
        Self {
            search,
            users,
            notification,
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Pull in everything that finished in the background since the last tick.
    /// Returns true when the screen needs redrawing.
    pub fn tick(&mut self) -> bool {
        let mut changed = self.search.poll_suggestions();

        match self.users.poll_response() {
            Some(UsersEvent::Failed(message)) => {
                self.notification
                    .show(&format!("Search failed: {}", message), AlertSeverity::Danger);
                changed = true;
            }
            Some(UsersEvent::Loaded { query, count }) => {
                log::debug!("Loaded {} users for {:?}", count, query);
                changed = true;
            }
            None => {}
        }

        if self.notification.clear_if_expired() {
            changed = true;
        }

        changed
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
