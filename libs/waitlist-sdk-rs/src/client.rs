//! Waitlist client implementation.

use std::sync::Arc;
use std::time::Duration;

use url::Url;
use waitlist_types::{WaitlistEntry, routes};

use crate::backup::EmailBackup;
use crate::error::WaitlistError;

/// Notice shown after a successful submission.
pub const SUCCESS_NOTICE: &str = "You're on the waitlist! We'll be in touch soon.";

#[cfg(feature = "client")]
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the waitlist client.
#[derive(Debug, Clone)]
pub struct WaitlistClientConfig {
    /// Origin of the API (e.g., "https://example.com"). Any path is replaced
    /// by the shared route.
    pub base_url: Url,

    /// Whole-request timeout (default: 10 seconds)
    pub timeout: Option<Duration>,
}

/// Result of an accepted submission.
#[derive(Debug, Clone)]
pub struct Submission {
    pub entry: WaitlistEntry,
    pub notice: &'static str,
}

/// Client for `POST /api/waitlist`.
///
/// No retries: a failed submission is surfaced and left to the user.
pub struct WaitlistClient {
    endpoint: Url,
    backup: Option<Arc<dyn EmailBackup>>,
    #[cfg(feature = "client")]
    http_client: reqwest::Client,
}

impl WaitlistClient {
    /// Create a new waitlist client.
    ///
    /// # Returns
    /// A configured `WaitlistClient` or an error if configuration is invalid.
    pub fn new(config: WaitlistClientConfig) -> Result<Self, WaitlistError> {
        if !matches!(config.base_url.scheme(), "http" | "https") {
            return Err(WaitlistError::Config(format!(
                "base_url must be http or https, got {}",
                config.base_url.scheme()
            )));
        }

        let endpoint = config
            .base_url
            .join(&routes::create_waitlist_entry())
            .map_err(|e| WaitlistError::Config(e.to_string()))?;

        #[cfg(feature = "client")]
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(|e| WaitlistError::Config(e.to_string()))?;

        Ok(Self {
            endpoint,
            backup: None,
            #[cfg(feature = "client")]
            http_client,
        })
    }

    /// Mirror accepted emails into `backup`.
    pub fn with_backup(mut self, backup: Arc<dyn EmailBackup>) -> Self {
        self.backup = Some(backup);
        self
    }

    /// Full URL submissions are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Submit an email to the waitlist.
    ///
    /// On success the stored (normalized) email is mirrored into the configured
    /// backup. A backup failure is logged and does not fail the submission.
    ///
    /// # Example
    /// ```rust,ignore
    /// match client.submit("someone@example.com").await {
    ///     Ok(submission) => show_toast(submission.notice),
    ///     Err(err) => show_toast(&err.user_message()),
    /// }
    /// ```
    #[cfg(feature = "client")]
    pub async fn submit(&self, email: &str) -> Result<Submission, WaitlistError> {
        use waitlist_types::InsertWaitlistEntry;

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(&InsertWaitlistEntry {
                email: email.to_string(),
            })
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        let entry = crate::response::interpret_response(status, &body)?;

        // Mirror the address as the server stored it
        if let Some(backup) = &self.backup
            && let Err(err) = backup.remember(&entry.email)
        {
            tracing::warn!(error = %err, "Failed to mirror waitlist email locally");
        }

        Ok(Submission {
            entry,
            notice: SUCCESS_NOTICE,
        })
    }
}
