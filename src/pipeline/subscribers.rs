//! Multicast delivery of suggestion lists
//!
//! Handlers run on the pipeline task while the registry lock is held; they
//! must return quickly and must not subscribe or unsubscribe themselves.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::github::SuggestionItem;

type Handler = Box<dyn Fn(&[SuggestionItem]) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

/// Shared list of suggestion handlers
#[derive(Clone, Default)]
pub struct SubscriberRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl SubscriberRegistry {
    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&[SuggestionItem]) + Send + Sync + 'static,
    {
        let mut registry = self.lock();
        registry.next_id += 1;
        let id = registry.next_id;
        registry.handlers.push((id, Box::new(handler)));

        Subscription {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver `items` to every current subscriber, in subscription order
    pub fn emit(&self, items: &[SuggestionItem]) {
        let registry = self.lock();
        for (_, handler) in &registry.handlers {
            handler(items);
        }
    }

    pub fn len(&self) -> usize {
        self.lock().handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keeps a handler registered; dropping it unsubscribes
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.lock().unwrap_or_else(PoisonError::into_inner);
            registry.handlers.retain(|(id, _)| *id != self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
