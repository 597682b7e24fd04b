use std::net::SocketAddr;
use std::time::Duration;

use axum::http::HeaderValue;
use env_helpers::get_env_default;
use secrecy::SecretString;
use strum::{Display, EnumString};

/// Which waitlist store the process uses. Resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StorageBackend {
    #[default]
    Memory,
    Database,
}

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    pub storage_backend: StorageBackend,
    /// Required when `storage_backend` is `Database`.
    pub database_url: Option<SecretString>,
    pub db_max_connections: u32,
    /// Upper bound on waiting for a pooled connection before failing.
    pub db_acquire_timeout: Duration,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:3001".parse().unwrap());
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");

        let storage_backend: StorageBackend =
            get_env_default("STORAGE_BACKEND", String::from("memory"))
                .parse()
                .expect("STORAGE_BACKEND must be one of: memory, database");
        let database_url: Option<SecretString> = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map(|url| SecretString::new(url.into()));
        let db_max_connections: u32 = get_env_default("DB_MAX_CONNECTIONS", 5);
        let db_acquire_timeout_secs: u64 = get_env_default("DB_ACQUIRE_TIMEOUT_SECS", 3);
        let request_timeout_secs: u64 = get_env_default("REQUEST_TIMEOUT_SECS", 10);

        Self {
            bind_addr,
            cors_origin,
            storage_backend,
            database_url,
            db_max_connections,
            db_acquire_timeout: Duration::from_secs(db_acquire_timeout_secs),
            request_timeout: Duration::from_secs(request_timeout_secs),
        }
    }
}
