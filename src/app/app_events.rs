use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;
use crate::store::UserStore;

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event) {
        // Check that it's a key press event to avoid duplicates
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            self.handle_key_event(key);
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match key.code {
            KeyCode::Esc => {
                if self.search.suggestions_visible() {
                    self.search.hide_suggestions();
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Enter => {
                if !self.search.accept_suggestion(&mut self.users, false) {
                    self.search
                        .on_submit(&mut self.users, &mut self.notification);
                }
            }
            KeyCode::Tab => {
                self.search.accept_suggestion(&mut self.users, true);
            }
            KeyCode::Down => self.search.select_next(),
            KeyCode::Up => self.search.select_previous(),
            _ => {
                self.search.handle_edit_key(key);
            }
        }
    }

    /// Keys that work regardless of dropdown state.
    /// Returns true if the key was handled.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match key.code {
            KeyCode::Char('c') => {
                self.should_quit = true;
                true
            }
            // Only offered while there is something to clear
            KeyCode::Char('l') if !self.users.users().is_empty() => {
                self.users.clear_users();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
