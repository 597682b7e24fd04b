use thiserror::Error;
use waitlist_types::ErrorCode;

const ALREADY_REGISTERED_MESSAGE: &str = "This email is already registered on the waitlist.";
const GENERIC_FAILURE_MESSAGE: &str = "Failed to join the waitlist. Please try again.";

/// SDK-specific errors.
#[derive(Debug, Error)]
pub enum WaitlistError {
    /// The API answered 409: the email is already on the waitlist.
    #[error("Email already registered")]
    AlreadyRegistered,

    /// The API rejected the request with some other non-success status.
    #[error("Request rejected with status {status}: {message}")]
    Rejected {
        status: u16,
        code: Option<ErrorCode>,
        message: String,
    },

    /// Network error (only with `client` feature)
    #[cfg(feature = "client")]
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A success response did not match the `WaitlistEntry` schema
    #[error("Unexpected response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl WaitlistError {
    /// Text suitable for a toast or inline form error.
    pub fn user_message(&self) -> String {
        match self {
            Self::AlreadyRegistered => ALREADY_REGISTERED_MESSAGE.to_string(),
            Self::Rejected { message, .. } => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}
