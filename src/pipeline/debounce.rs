//! Debounce, length filter and dedupe as a plain state machine
//!
//! `push` only records the value and restarts the quiet period. Filtering
//! happens when the period elapses, so a short value (even `""`) pushed on top
//! of a pending one cancels it without ever reaching the API.

use std::time::Duration;

use tokio::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    value: String,
    deadline: Instant,
}

#[derive(Debug)]
pub struct DebounceState {
    debounce: Duration,
    min_query_length: usize,
    pending: Option<Pending>,
    /// Last value that reached the fetch stage
    last_forwarded: Option<String>,
}

impl DebounceState {
    pub fn new(debounce: Duration, min_query_length: usize) -> Self {
        Self {
            debounce,
            min_query_length,
            pending: None,
            last_forwarded: None,
        }
    }

    /// Supersede any pending value and restart the quiet period
    pub fn push(&mut self, value: String, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.debounce,
        });
    }

    /// When the pending value becomes due, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn last_forwarded(&self) -> Option<&str> {
        self.last_forwarded.as_deref()
    }

    /// Take the pending value if its quiet period is over.
    ///
    /// Returns the value to look up, or `None` when nothing is due, the value
    /// is too short, or it equals the last forwarded value.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref()?.deadline > now {
            return None;
        }
        let Pending { value, .. } = self.pending.take()?;

        if value.chars().count() < self.min_query_length {
            log::trace!("Dropping short query {:?}", value);
            return None;
        }
        if self.last_forwarded.as_deref() == Some(value.as_str()) {
            log::trace!("Dropping repeated query {:?}", value);
            return None;
        }

        self.last_forwarded = Some(value.clone());
        Some(value)
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod debounce_tests;
