#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use futures::future::BoxFuture;

    use crate::github::{LookupError, SuggestionItem, UserLookup};
    use crate::notification::AlertSeverity;
    use crate::pipeline::{PipelineSettings, SuggestionPipeline};
    use crate::store::{AlertStore, UserStore};

    pub fn item(id: &str) -> SuggestionItem {
        SuggestionItem::new(id)
    }

    pub fn items(ids: &[&str]) -> Vec<SuggestionItem> {
        ids.iter().map(|id| item(id)).collect()
    }

    pub fn ids(list: &[SuggestionItem]) -> Vec<String> {
        list.iter().map(|i| i.id.clone()).collect()
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[derive(Clone)]
    enum Reply {
        Users(Vec<String>),
        Fail,
    }

    /// Scripted `UserLookup` that records every query it receives
    #[derive(Default)]
    pub struct FakeLookup {
        calls: Mutex<Vec<(String, u8)>>,
        replies: Mutex<HashMap<String, (Duration, Reply)>>,
    }

    impl FakeLookup {
        pub fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        /// Unscripted queries answer with a single user named after the query
        pub fn respond(&self, query: &str, users: &[&str]) {
            self.respond_after(query, Duration::ZERO, users);
        }

        pub fn respond_after(&self, query: &str, delay: Duration, users: &[&str]) {
            let users = users.iter().map(|u| u.to_string()).collect();
            self.replies
                .lock()
                .unwrap()
                .insert(query.to_string(), (delay, Reply::Users(users)));
        }

        pub fn fail(&self, query: &str) {
            self.replies
                .lock()
                .unwrap()
                .insert(query.to_string(), (Duration::ZERO, Reply::Fail));
        }

        pub fn queries(&self) -> Vec<String> {
            self.calls.lock().unwrap().iter().map(|(q, _)| q.clone()).collect()
        }

        pub fn page_sizes(&self) -> Vec<u8> {
            self.calls.lock().unwrap().iter().map(|(_, n)| *n).collect()
        }
    }

    impl UserLookup for FakeLookup {
        fn search_users<'a>(
            &'a self,
            query: &'a str,
            per_page: u8,
        ) -> BoxFuture<'a, Result<Vec<SuggestionItem>, LookupError>> {
            self.calls
                .lock()
                .unwrap()
                .push((query.to_string(), per_page));
            let (delay, reply) = self
                .replies
                .lock()
                .unwrap()
                .get(query)
                .cloned()
                .unwrap_or((Duration::ZERO, Reply::Users(vec![query.to_string()])));

            Box::pin(async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                match reply {
                    Reply::Users(users) => Ok(users.iter().map(|u| SuggestionItem::new(u.as_str())).collect()),
                    Reply::Fail => Err(LookupError::Network("connection reset".to_string())),
                }
            })
        }
    }

    /// Start a pipeline with default settings on the current runtime
    pub fn start_pipeline(lookup: &Arc<FakeLookup>) -> SuggestionPipeline {
        let lookup: Arc<dyn UserLookup> = lookup.clone();
        SuggestionPipeline::start(
            lookup,
            PipelineSettings::default(),
            &tokio::runtime::Handle::current(),
        )
    }

    /// App wired to a fake lookup on the current runtime
    pub fn test_app(lookup: &Arc<FakeLookup>) -> crate::app::App {
        let search = crate::input::SearchInput::new(start_pipeline(lookup));
        let users_lookup: Arc<dyn UserLookup> = lookup.clone();
        let users = crate::users::UsersState::new(
            users_lookup,
            tokio::runtime::Handle::current(),
            30,
        );
        let notification = crate::notification::NotificationState::new(Duration::from_secs(5));
        crate::app::App::new(search, users, notification)
    }

    /// Collects every list a pipeline subscriber receives
    pub fn collect_emissions(
        pipeline: &SuggestionPipeline,
    ) -> (Arc<Mutex<Vec<Vec<String>>>>, crate::pipeline::Subscription) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let subscription = pipeline.subscribe(move |list| {
            sink.lock().unwrap().push(ids(list));
        });
        (seen, subscription)
    }

    /// In-memory user list that records committed searches
    #[derive(Debug, Default)]
    pub struct RecordingUserStore {
        pub searches: Vec<String>,
        pub clears: usize,
        pub users: Vec<SuggestionItem>,
    }

    impl UserStore for RecordingUserStore {
        fn search_users(&mut self, query: &str) {
            self.searches.push(query.to_string());
        }

        fn clear_users(&mut self) {
            self.clears += 1;
            self.users.clear();
        }

        fn users(&self) -> &[SuggestionItem] {
            &self.users
        }
    }

    #[derive(Debug, Default)]
    pub struct RecordingAlerts {
        pub alerts: Vec<(String, AlertSeverity)>,
    }

    impl AlertStore for RecordingAlerts {
        fn set_alert(&mut self, message: &str, severity: AlertSeverity) {
            self.alerts.push((message.to_string(), severity));
        }
    }
}
