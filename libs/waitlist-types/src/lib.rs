//! Wire contract for the waitlist API.
//!
//! This crate provides:
//! - Route paths shared by the server router and the client SDK
//! - The signup request body (`InsertWaitlistEntry`)
//! - The created-entry response body (`WaitlistEntry`)
//! - Error payloads (`ErrorBody`, `ErrorCode`)
//!
//! Both sides depend on these definitions, so a path or field change breaks the
//! build instead of the contract.

mod errors;
pub mod routes;
mod waitlist;

pub use errors::{ALREADY_ON_WAITLIST_MESSAGE, ErrorBody, ErrorCode};
pub use waitlist::{InsertWaitlistEntry, WaitlistEntry};
