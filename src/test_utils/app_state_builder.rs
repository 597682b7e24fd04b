//! Test app state builder for HTTP-level integration testing.
//!
//! This module provides `TestAppStateBuilder` which creates a minimal `AppState`
//! over an in-memory (or injected) waitlist store.

use std::sync::Arc;
use std::time::Duration;

use crate::{
    adapters::{http::app_state::AppState, persistence::memory::InMemoryWaitlistStore},
    domain::entities::waitlist_entry::WaitlistEntry,
    test_utils::test_config,
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};

/// Builder for creating `AppState` for testing.
///
/// # Example
///
/// ```ignore
/// let existing = create_test_entry(|e| e.email = "a@b.com".to_string());
///
/// let app_state = TestAppStateBuilder::new()
///     .with_entry(existing)
///     .build();
/// ```
pub struct TestAppStateBuilder {
    entries: Vec<WaitlistEntry>,
    store: Option<Arc<dyn WaitlistRepo>>,
    request_timeout: Option<Duration>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            entries: vec![],
            store: None,
            request_timeout: None,
        }
    }

    /// Seed an entry into the default in-memory store.
    pub fn with_entry(mut self, entry: WaitlistEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Use a custom store. Seeded entries are ignored when set.
    pub fn with_store(mut self, store: Arc<dyn WaitlistRepo>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn build(self) -> AppState {
        let store: Arc<dyn WaitlistRepo> = match self.store {
            Some(store) => store,
            None => Arc::new(InMemoryWaitlistStore::with_entries(self.entries)),
        };

        let mut config = test_config();
        if let Some(timeout) = self.request_timeout {
            config.request_timeout = timeout;
        }

        AppState {
            config: Arc::new(config),
            waitlist_use_cases: Arc::new(WaitlistUseCases::new(store)),
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
