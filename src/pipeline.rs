//! Suggestion pipeline
//!
//! Turns a rapid stream of typed text into a throttled stream of suggestion
//! lists: short values are dropped, input is debounced, repeated values are
//! skipped, and each surviving value becomes one GitHub lookup whose result
//! is multicast to every subscriber.
//!
//! The pipeline is created once by `main` and shared by cloning the handle, so
//! every input widget observes the same debounce timeline.

mod debounce;
mod sequencer;
mod subscribers;
mod worker;

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio_util::sync::CancellationToken;

pub use debounce::DebounceState;
pub use sequencer::LookupSequencer;
pub use subscribers::{SubscriberRegistry, Subscription};

use crate::config::SearchConfig;
use crate::github::{SuggestionItem, UserLookup};

/// Tuning for a pipeline instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSettings {
    pub debounce: Duration,
    pub min_query_length: usize,
    pub per_page: u8,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self::from(&SearchConfig::default())
    }
}

impl From<&SearchConfig> for PipelineSettings {
    fn from(config: &SearchConfig) -> Self {
        Self {
            debounce: Duration::from_millis(config.debounce_ms),
            min_query_length: config.min_query_length(),
            per_page: config.suggestion_page_size(),
        }
    }
}

/// Handle to a running suggestion pipeline
#[derive(Clone)]
pub struct SuggestionPipeline {
    input_tx: UnboundedSender<String>,
    subscribers: SubscriberRegistry,
    cancel: CancellationToken,
}

impl SuggestionPipeline {
    /// Spawn the pipeline task on `runtime`
    pub fn start(lookup: Arc<dyn UserLookup>, settings: PipelineSettings, runtime: &Handle) -> Self {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let subscribers = SubscriberRegistry::default();
        let cancel = CancellationToken::new();

        runtime.spawn(worker::run(
            lookup,
            settings,
            input_rx,
            subscribers.clone(),
            cancel.clone(),
        ));

        Self {
            input_tx,
            subscribers,
            cancel,
        }
    }

    /// Feed one value into the pipeline. Never blocks, never fails.
    pub fn push(&self, text: impl Into<String>) {
        if self.input_tx.send(text.into()).is_err() {
            log::debug!("Ignoring push into stopped suggestion pipeline");
        }
    }

    /// Receive every suggestion list produced from now on
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&[SuggestionItem]) + Send + Sync + 'static,
    {
        self.subscribers.subscribe(handler)
    }

    /// Stop the pipeline task; later pushes are ignored
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    pub fn is_running(&self) -> bool {
        !self.cancel.is_cancelled() && !self.input_tx.is_closed()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl std::fmt::Debug for SuggestionPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionPipeline")
            .field("running", &self.is_running())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
