use serde::{Deserialize, Serialize};

/// User-facing message sent with `409 Conflict`.
///
/// Display text, not a stable identifier: clients branch on the status code
/// and [`ErrorCode::AlreadyOnWaitlist`].
pub const ALREADY_ON_WAITLIST_MESSAGE: &str = "You are already on the waitlist!";

/// API error codes returned by waitlist endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidInput,
    AlreadyOnWaitlist,
    StorageUnavailable,
    InternalError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::AlreadyOnWaitlist => "ALREADY_ON_WAITLIST",
            Self::StorageUnavailable => "STORAGE_UNAVAILABLE",
            Self::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
}
