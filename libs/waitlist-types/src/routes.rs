//! Route table shared between the server and the SDK.

/// Prefix every API route is nested under.
pub const API_BASE: &str = "/api";

/// Waitlist signup route, relative to [`API_BASE`].
pub const WAITLIST: &str = "/waitlist";

/// Full path of the signup endpoint (`POST`).
pub fn create_waitlist_entry() -> String {
    format!("{API_BASE}{WAITLIST}")
}
