use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::validators::{is_valid_email, normalize_email},
    domain::entities::waitlist_entry::WaitlistEntry,
};

// ============================================================================
// Repository Trait
// ============================================================================

/// Storage port for waitlist entries. Implemented by the in-memory store and
/// by `PostgresPersistence`.
#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Insert-if-absent. Assigns `id` and `created_at`.
    /// Returns `AppError::DuplicateEntry` without storing anything when the
    /// email is already present.
    async fn create_waitlist_entry(&self, candidate: &NewWaitlistEntry)
    -> AppResult<WaitlistEntry>;

    async fn get_waitlist_entry_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>>;
}

// ============================================================================
// Candidate
// ============================================================================

/// A signup candidate whose email has been normalized and validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWaitlistEntry {
    email: String,
}

impl NewWaitlistEntry {
    pub fn parse(raw_email: &str) -> AppResult<Self> {
        let email = normalize_email(raw_email);
        if !is_valid_email(&email) {
            return Err(AppError::InvalidInput("Invalid email format".into()));
        }
        Ok(Self { email })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

// ============================================================================
// Use Cases
// ============================================================================

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>) -> Self {
        Self { repo }
    }

    /// Validate, reject known duplicates, then create.
    ///
    /// The lookup only short-circuits the common case. Two concurrent calls
    /// for the same email can both miss it; the store's insert-if-absent is
    /// what decides the winner, and the loser gets `DuplicateEntry`.
    #[instrument(skip(self))]
    pub async fn join_waitlist(&self, raw_email: &str) -> AppResult<WaitlistEntry> {
        let candidate = NewWaitlistEntry::parse(raw_email)?;

        if self
            .repo
            .get_waitlist_entry_by_email(candidate.email())
            .await?
            .is_some()
        {
            return Err(AppError::DuplicateEntry);
        }

        let entry = self.repo.create_waitlist_entry(&candidate).await?;
        tracing::info!(entry_id = entry.id, "Waitlist entry created");
        Ok(entry)
    }

    #[instrument(skip(self))]
    pub async fn get_entry_by_email(&self, raw_email: &str) -> AppResult<Option<WaitlistEntry>> {
        self.repo
            .get_waitlist_entry_by_email(&normalize_email(raw_email))
            .await
    }
}
