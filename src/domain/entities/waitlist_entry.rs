use chrono::{DateTime, Utc};

/// One accepted waitlist signup. Never updated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistEntry {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<WaitlistEntry> for waitlist_types::WaitlistEntry {
    fn from(entry: WaitlistEntry) -> Self {
        Self {
            id: entry.id,
            email: entry.email,
            created_at: entry.created_at,
        }
    }
}
