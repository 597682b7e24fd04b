//! Response interpretation, independent of the HTTP client.

use waitlist_types::{ErrorBody, WaitlistEntry};

use crate::error::WaitlistError;

const CONFLICT: u16 = 409;
const FALLBACK_REJECTION_MESSAGE: &str = "Something went wrong. Please try again.";

/// Map a status code and raw body to the created entry or a `WaitlistError`.
///
/// - 2xx: body must parse as `WaitlistEntry`
/// - 409: `AlreadyRegistered`, whatever the body says
/// - anything else: `Rejected` with the server's message, or a fallback
///   when the body is not an `ErrorBody`
pub fn interpret_response(status: u16, body: &[u8]) -> Result<WaitlistEntry, WaitlistError> {
    if (200..300).contains(&status) {
        return Ok(serde_json::from_slice(body)?);
    }

    if status == CONFLICT {
        return Err(WaitlistError::AlreadyRegistered);
    }

    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(error) => Err(WaitlistError::Rejected {
            status,
            code: Some(error.code),
            message: error.message,
        }),
        Err(_) => Err(WaitlistError::Rejected {
            status,
            code: None,
            message: FALLBACK_REJECTION_MESSAGE.to_string(),
        }),
    }
}
