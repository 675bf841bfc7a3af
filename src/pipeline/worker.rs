//! Pipeline task
//!
//! Runs one `select!` loop per pipeline. Input, timer expiry and lookup
//! completions are handled one at a time; lookups themselves run as separate
//! tasks and report back through a channel tagged with their request id.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;

use super::PipelineSettings;
use super::debounce::DebounceState;
use super::sequencer::LookupSequencer;
use super::subscribers::SubscriberRegistry;
use crate::github::{LookupError, SuggestionItem, UserLookup};

/// A finished lookup on its way back to the pipeline task
struct LookupOutcome {
    request_id: u64,
    query: String,
    result: Result<Vec<SuggestionItem>, LookupError>,
}

pub(super) async fn run(
    lookup: Arc<dyn UserLookup>,
    settings: PipelineSettings,
    mut input_rx: UnboundedReceiver<String>,
    subscribers: SubscriberRegistry,
    cancel: CancellationToken,
) {
    let mut state = DebounceState::new(settings.debounce, settings.min_query_length);
    let mut sequencer = LookupSequencer::default();
    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel::<LookupOutcome>();

    log::debug!("Suggestion pipeline started ({:?} debounce)", settings.debounce);

    loop {
        let deadline = state.deadline();

        tokio::select! {
            _ = cancel.cancelled() => break,

            pushed = input_rx.recv() => match pushed {
                Some(text) => state.push(text, Instant::now()),
                // Every pipeline handle is gone
                None => break,
            },

            _ = wait_for(deadline) => {
                if let Some(query) = state.poll(Instant::now()) {
                    let request_id = sequencer.issue();
                    log::debug!("Lookup #{} for {:?}", request_id, query);

                    let lookup = Arc::clone(&lookup);
                    let outcome_tx = outcome_tx.clone();
                    let per_page = settings.per_page;
                    tokio::spawn(async move {
                        let result = lookup.search_users(&query, per_page).await;
                        let _ = outcome_tx.send(LookupOutcome { request_id, query, result });
                    });
                }
            }

            Some(outcome) = outcome_rx.recv() => {
                deliver(outcome, &mut sequencer, &subscribers);
            }
        }
    }

    log::debug!("Suggestion pipeline stopped");
}

fn deliver(outcome: LookupOutcome, sequencer: &mut LookupSequencer, subscribers: &SubscriberRegistry) {
    if !sequencer.accept(outcome.request_id) {
        log::debug!(
            "Dropping stale lookup #{} for {:?}",
            outcome.request_id,
            outcome.query
        );
        return;
    }

    let items = match outcome.result {
        Ok(items) => items,
        Err(e) => {
            log::warn!("Suggestion lookup for {:?} failed: {}", outcome.query, e);
            Vec::new()
        }
    };
    subscribers.emit(&items);
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
