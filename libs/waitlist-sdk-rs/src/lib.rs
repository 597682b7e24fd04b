//! Rust client for the waitlist API.
//!
//! # Features
//!
//! - **Submission** - POST an email to the waitlist and get back the created entry
//! - **Status mapping** - Turn every response into a user-facing message
//! - **Local backup** - Remember the last accepted email as a display hint
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use waitlist_sdk::{FileEmailBackup, WaitlistClient, WaitlistClientConfig};
//!
//! let client = WaitlistClient::new(WaitlistClientConfig {
//!     base_url: "https://example.com".parse()?,
//!     timeout: None,
//! })?
//! .with_backup(Arc::new(FileEmailBackup::new("waitlist.json")));
//!
//! match client.submit("someone@example.com").await {
//!     Ok(submission) => println!("{}", submission.notice),
//!     Err(err) => println!("{}", err.user_message()),
//! }
//! ```

mod backup;
mod client;
mod error;
mod response;

pub use backup::{BACKUP_KEY, BackupError, EmailBackup, FileEmailBackup, MemoryEmailBackup};
pub use client::{SUCCESS_NOTICE, Submission, WaitlistClient, WaitlistClientConfig};
pub use error::WaitlistError;
pub use response::interpret_response;

// Re-export shared types for convenience
pub use waitlist_types::{ErrorBody, ErrorCode, WaitlistEntry};
