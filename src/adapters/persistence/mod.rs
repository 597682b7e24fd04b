use sqlx::PgPool;

use crate::app_error::AppError;

pub mod memory;
pub mod waitlist_entry;

#[derive(Clone)]
pub struct PostgresPersistence {
    pool: PgPool,
}

impl PostgresPersistence {
    pub fn new(pool: PgPool) -> Self {
        PostgresPersistence { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::DuplicateEntry
            }
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => {
                // Log the actual error for debugging, but don't expose details
                tracing::error!(error = %err, "Database unreachable");
                AppError::StorageUnavailable("Database connection unavailable".into())
            }
            _ => {
                tracing::error!(error = ?err, "Database error");
                AppError::Internal("Database operation failed".into())
            }
        }
    }
}
