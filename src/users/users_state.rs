//! User list state
//!
//! Full searches run on the async runtime and report back over a channel that
//! the UI thread drains each tick. Only the response to the most recent
//! request is applied.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use tokio::runtime::Handle;

use crate::github::{SuggestionItem, UserLookup};
use crate::store::UserStore;

struct UsersResponse {
    request_id: u64,
    query: String,
    result: Result<Vec<SuggestionItem>, String>,
}

/// What happened when responses were applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsersEvent {
    Loaded { query: String, count: usize },
    Failed(String),
}

pub struct UsersState {
    users: Vec<SuggestionItem>,
    loading: bool,
    last_query: Option<String>,
    /// Incremented per search and per clear; responses with an older id are stale
    request_id: u64,
    lookup: Arc<dyn UserLookup>,
    runtime: Handle,
    per_page: u8,
    response_tx: Sender<UsersResponse>,
    response_rx: Receiver<UsersResponse>,
}

impl UsersState {
    pub fn new(lookup: Arc<dyn UserLookup>, runtime: Handle, per_page: u8) -> Self {
        let (response_tx, response_rx) = mpsc::channel();
        Self {
            users: Vec::new(),
            loading: false,
            last_query: None,
            request_id: 0,
            lookup,
            runtime,
            per_page,
            response_tx,
            response_rx,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    /// Apply finished searches. Returns the outcome of the latest one, if any
    /// arrived since the last call.
    pub fn poll_response(&mut self) -> Option<UsersEvent> {
        let mut event = None;

        while let Ok(response) = self.response_rx.try_recv() {
            if response.request_id != self.request_id {
                log::debug!("Ignoring stale user search for {:?}", response.query);
                continue;
            }
            self.loading = false;

            event = Some(match response.result {
                Ok(users) => {
                    let count = users.len();
                    self.users = users;
                    UsersEvent::Loaded {
                        query: response.query,
                        count,
                    }
                }
                Err(message) => {
                    log::warn!("User search for {:?} failed: {}", response.query, message);
                    UsersEvent::Failed(message)
                }
            });
        }

        event
    }
}

impl UserStore for UsersState {
    fn search_users(&mut self, query: &str) {
        self.request_id = self.request_id.wrapping_add(1);
        self.loading = true;
        self.last_query = Some(query.to_string());

        let request_id = self.request_id;
        let query = query.to_string();
        let lookup = Arc::clone(&self.lookup);
        let response_tx = self.response_tx.clone();
        let per_page = self.per_page;

        self.runtime.spawn(async move {
            let result = lookup
                .search_users(&query, per_page)
                .await
                .map_err(|e| e.to_string());
            let _ = response_tx.send(UsersResponse {
                request_id,
                query,
                result,
            });
        });
    }

    fn clear_users(&mut self) {
        self.request_id = self.request_id.wrapping_add(1);
        self.users.clear();
        self.loading = false;
        self.last_query = None;
    }

    fn users(&self) -> &[SuggestionItem] {
        &self.users
    }
}

#[cfg(test)]
#[path = "users_state_tests.rs"]
mod users_state_tests;
