//! Process-local waitlist store, used when no database is configured.
//!
//! State lives for the lifetime of the process and is lost on restart.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::{NewWaitlistEntry, WaitlistRepo},
};

struct MemoryState {
    entries: BTreeMap<i64, WaitlistEntry>,
    next_id: i64,
}

pub struct InMemoryWaitlistStore {
    state: Mutex<MemoryState>,
}

impl InMemoryWaitlistStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                entries: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Seed the store, continuing ids after the highest seeded one.
    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        let next_id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let entries = entries.into_iter().map(|e| (e.id, e)).collect();
        Self {
            state: Mutex::new(MemoryState { entries, next_id }),
        }
    }

    /// Entry count. Reads through a poisoned lock; the map itself is never
    /// left half-written.
    pub fn len(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| AppError::StorageUnavailable("In-memory store lock poisoned".into()))
    }
}

impl Default for InMemoryWaitlistStore {
    fn default() -> Self {
        Self::new()
    }
}

fn find_by_email<'a>(state: &'a MemoryState, email: &str) -> Option<&'a WaitlistEntry> {
    state.entries.values().find(|entry| entry.email == email)
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistStore {
    async fn create_waitlist_entry(
        &self,
        candidate: &NewWaitlistEntry,
    ) -> AppResult<WaitlistEntry> {
        // Lock held across check and insert
        let mut state = self.lock()?;

        if find_by_email(&state, candidate.email()).is_some() {
            return Err(AppError::DuplicateEntry);
        }

        let id = state.next_id;
        state.next_id += 1;

        let entry = WaitlistEntry {
            id,
            email: candidate.email().to_string(),
            created_at: chrono::Utc::now(),
        };
        state.entries.insert(id, entry.clone());

        Ok(entry)
    }

    async fn get_waitlist_entry_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        let state = self.lock()?;
        Ok(find_by_email(&state, email).cloned())
    }
}
