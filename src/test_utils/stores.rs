//! Waitlist store stubs.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::{NewWaitlistEntry, WaitlistRepo},
};

// ============================================================================
// FailingWaitlistStore
// ============================================================================

/// Every call fails as if the backend were unreachable.
#[derive(Default)]
pub struct FailingWaitlistStore;

#[async_trait]
impl WaitlistRepo for FailingWaitlistStore {
    async fn create_waitlist_entry(
        &self,
        _candidate: &NewWaitlistEntry,
    ) -> AppResult<WaitlistEntry> {
        Err(AppError::StorageUnavailable("test store is offline".into()))
    }

    async fn get_waitlist_entry_by_email(&self, _email: &str) -> AppResult<Option<WaitlistEntry>> {
        Err(AppError::StorageUnavailable("test store is offline".into()))
    }
}

// ============================================================================
// StalledWaitlistStore
// ============================================================================

/// Every call hangs forever, like a backend that accepted the connection and
/// never answered.
pub struct StalledWaitlistStore;

#[async_trait]
impl WaitlistRepo for StalledWaitlistStore {
    async fn create_waitlist_entry(
        &self,
        _candidate: &NewWaitlistEntry,
    ) -> AppResult<WaitlistEntry> {
        std::future::pending().await
    }

    async fn get_waitlist_entry_by_email(&self, _email: &str) -> AppResult<Option<WaitlistEntry>> {
        std::future::pending().await
    }
}

// ============================================================================
// BlindLookupStore
// ============================================================================

/// Lookups always miss; creates go to the wrapped store.
///
/// Reproduces two requests that both pass the duplicate check before either
/// inserts, so only the store's own uniqueness guard stands between them.
pub struct BlindLookupStore {
    inner: Arc<dyn WaitlistRepo>,
}

impl BlindLookupStore {
    pub fn new(inner: Arc<dyn WaitlistRepo>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl WaitlistRepo for BlindLookupStore {
    async fn create_waitlist_entry(
        &self,
        candidate: &NewWaitlistEntry,
    ) -> AppResult<WaitlistEntry> {
        self.inner.create_waitlist_entry(candidate).await
    }

    async fn get_waitlist_entry_by_email(&self, _email: &str) -> AppResult<Option<WaitlistEntry>> {
        Ok(None)
    }
}

// ============================================================================
// UniqueIndexStore
// ============================================================================

/// Mirrors the Postgres store's semantics (unique index on email,
/// `ON CONFLICT DO NOTHING`) with a different id scheme, for
/// backend-equivalence tests without a database.
pub struct UniqueIndexStore {
    by_email: Mutex<HashMap<String, WaitlistEntry>>,
    next_id: Mutex<i64>,
}

impl UniqueIndexStore {
    pub fn new() -> Self {
        Self {
            by_email: Mutex::new(HashMap::new()),
            next_id: Mutex::new(1000),
        }
    }
}

impl Default for UniqueIndexStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WaitlistRepo for UniqueIndexStore {
    async fn create_waitlist_entry(
        &self,
        candidate: &NewWaitlistEntry,
    ) -> AppResult<WaitlistEntry> {
        let mut by_email = self.by_email.lock().unwrap();
        if by_email.contains_key(candidate.email()) {
            return Err(AppError::DuplicateEntry);
        }

        let mut next_id = self.next_id.lock().unwrap();
        let entry = WaitlistEntry {
            id: *next_id,
            email: candidate.email().to_string(),
            created_at: chrono::Utc::now(),
        };
        *next_id += 1;

        by_email.insert(entry.email.clone(), entry.clone());
        Ok(entry)
    }

    async fn get_waitlist_entry_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        Ok(self.by_email.lock().unwrap().get(email).cloned())
    }
}
