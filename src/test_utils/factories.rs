//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::HeaderValue;
use chrono::{DateTime, TimeZone, Utc};

use crate::{
    domain::entities::waitlist_entry::WaitlistEntry,
    infra::config::{AppConfig, StorageBackend},
};

/// Create a test waitlist entry with sensible defaults.
pub fn create_test_entry(overrides: impl FnOnce(&mut WaitlistEntry)) -> WaitlistEntry {
    let mut entry = WaitlistEntry {
        id: 1,
        email: "user@example.com".to_string(),
        created_at: test_datetime(),
    };
    overrides(&mut entry);
    entry
}

/// Minimal in-memory config for testing.
pub fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:3001".parse::<SocketAddr>().unwrap(),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        storage_backend: StorageBackend::Memory,
        database_url: None,
        db_max_connections: 1,
        db_acquire_timeout: Duration::from_secs(1),
        request_timeout: Duration::from_secs(5),
    }
}

pub fn test_datetime() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
}
