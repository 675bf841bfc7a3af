use std::time::{Duration, Instant};

use crate::store::AlertStore;

/// How prominent an alert is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    Light,
    Info,
    Warning,
    Danger,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub severity: AlertSeverity,
    created_at: Instant,
    duration: Duration,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= self.duration
    }
}

/// The single live alert, replaced by each new one
#[derive(Debug)]
pub struct NotificationState {
    current: Option<Notification>,
    timeout: Duration,
}

impl NotificationState {
    pub fn new(timeout: Duration) -> Self {
        Self {
            current: None,
            timeout,
        }
    }

    pub fn show(&mut self, message: &str, severity: AlertSeverity) {
        self.show_at(message, severity, Instant::now());
    }

    fn show_at(&mut self, message: &str, severity: AlertSeverity, now: Instant) {
        log::debug!("Alert ({:?}): {}", severity, message);
        self.current = Some(Notification {
            message: message.to_string(),
            severity,
            created_at: now,
            duration: self.timeout,
        });
    }

    /// Drop the alert once it has been visible long enough.
    /// Returns true if an alert was removed.
    pub fn clear_if_expired(&mut self) -> bool {
        self.clear_if_expired_at(Instant::now())
    }

    fn clear_if_expired_at(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

impl AlertStore for NotificationState {
    fn set_alert(&mut self, message: &str, severity: AlertSeverity) {
        self.show(message, severity);
    }
}
