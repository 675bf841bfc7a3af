//! Search input controller
//!
//! Owns the typed text, whether the suggestion dropdown is shown, and the
//! last suggestion list delivered by the pipeline. Every edit is forwarded to
//! the pipeline; committing goes through the `UserStore`.

use std::sync::mpsc::{self, Receiver};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::github::SuggestionItem;
use crate::notification::AlertSeverity;
use crate::pipeline::{SuggestionPipeline, Subscription};
use crate::store::{AlertStore, UserStore};

pub const EMPTY_SUBMIT_MESSAGE: &str = "Please enter something";
const PLACEHOLDER: &str = "Search Users...";

/// Rows the dropdown draws; selection never leaves them
pub const MAX_VISIBLE_SUGGESTIONS: usize = 10;

pub struct SearchInput {
    pub textarea: TextArea<'static>,
    suggestions_visible: bool,
    suggestions: Vec<SuggestionItem>,
    selected: Option<usize>,
    pipeline: SuggestionPipeline,
    results_rx: Receiver<Vec<SuggestionItem>>,
    // Released when the input is dropped; the pipeline keeps running
    _subscription: Subscription,
}

impl SearchInput {
    pub fn new(pipeline: SuggestionPipeline) -> Self {
        let (results_tx, results_rx) = mpsc::channel();
        let subscription = pipeline.subscribe(move |items| {
            let _ = results_tx.send(items.to_vec());
        });

        Self {
            textarea: new_textarea(""),
            suggestions_visible: false,
            suggestions: Vec::new(),
            selected: None,
            pipeline,
            results_rx,
            _subscription: subscription,
        }
    }

    pub fn text(&self) -> &str {
        self.textarea.lines().first().map_or("", String::as_str)
    }

    pub fn suggestions_visible(&self) -> bool {
        self.suggestions_visible
    }

    /// Latest list from the pipeline, shown or not
    pub fn suggestions(&self) -> &[SuggestionItem] {
        &self.suggestions
    }

    /// What the dropdown currently shows
    pub fn visible_suggestions(&self) -> &[SuggestionItem] {
        if self.suggestions_visible {
            let shown = self.suggestions.len().min(MAX_VISIBLE_SUGGESTIONS);
            &self.suggestions[..shown]
        } else {
            &[]
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_suggestion(&self) -> Option<&SuggestionItem> {
        self.selected
            .and_then(|i| self.visible_suggestions().get(i))
    }

    /// Apply a new input value
    pub fn on_text_change(&mut self, new_text: &str) {
        if self.text() != new_text {
            self.textarea = new_textarea(new_text);
        }
        self.suggestions_visible = !new_text.is_empty();
        self.selected = None;
        self.pipeline.push(new_text);
    }

    /// Commit the typed text as a search
    pub fn on_submit(&mut self, users: &mut dyn UserStore, alerts: &mut dyn AlertStore) {
        if self.text().is_empty() {
            alerts.set_alert(EMPTY_SUBMIT_MESSAGE, AlertSeverity::Light);
            return;
        }

        let query = self.text().to_string();
        users.search_users(&query);
        self.reset();
    }

    /// Commit a suggestion as a search
    pub fn on_select_suggestion(&mut self, item: &SuggestionItem, users: &mut dyn UserStore) {
        users.search_users(&item.id);
        self.reset();
    }

    /// Commit the highlighted suggestion, or the first one when
    /// `fallback_to_first` is set. Returns false if nothing was committed.
    pub fn accept_suggestion(&mut self, users: &mut dyn UserStore, fallback_to_first: bool) -> bool {
        let index = match (self.selected, fallback_to_first) {
            (Some(i), _) => i,
            (None, true) => 0,
            (None, false) => return false,
        };
        let Some(item) = self.visible_suggestions().get(index).cloned() else {
            return false;
        };
        self.on_select_suggestion(&item, users);
        true
    }

    pub fn select_next(&mut self) {
        let len = self.visible_suggestions().len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % len,
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        let len = self.visible_suggestions().len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
    }

    pub fn hide_suggestions(&mut self) {
        self.suggestions_visible = false;
        self.selected = None;
    }

    /// Pass an editing key to the text field; forwards the new text if it changed
    pub fn handle_edit_key(&mut self, key: KeyEvent) -> bool {
        if is_newline_key(key) {
            return false;
        }
        if !self.textarea.input(key) {
            return false;
        }
        let text = self.text().to_string();
        self.on_text_change(&text);
        true
    }

    /// Take the newest list delivered by the pipeline. Returns true if the
    /// displayed list changed.
    pub fn poll_suggestions(&mut self) -> bool {
        let Some(latest) = self.results_rx.try_iter().last() else {
            return false;
        };
        self.suggestions = latest;
        self.selected = None;
        true
    }

    /// Clear the field and cancel any pending lookup for the old text
    fn reset(&mut self) {
        self.textarea = new_textarea("");
        self.hide_suggestions();
        self.pipeline.push("");
    }
}

fn new_textarea(text: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![text.to_string()]);
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text(PLACEHOLDER);
    textarea.move_cursor(tui_textarea::CursorMove::End);
    textarea
}

fn is_newline_key(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
