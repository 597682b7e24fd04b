use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Signup request body for `POST /api/waitlist`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertWaitlistEntry {
    pub email: String,
}

/// A persisted waitlist signup, as returned with `201 Created`.
///
/// Field names are camelCase on the wire (`createdAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WaitlistEntry {
    pub id: i64,
    pub email: String,
    /// RFC 3339 timestamp
    pub created_at: DateTime<Utc>,
}
