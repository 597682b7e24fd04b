//! Client-side mirror of the last accepted email.
//!
//! Display hint only. Nothing here is consulted to decide whether an email
//! is already on the waitlist; the API is the source of truth.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::{Map, Value};
use thiserror::Error;

/// Key under which the email is stored.
pub const BACKUP_KEY: &str = "waitlist_email";

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("Backup I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Backup file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Backup lock poisoned")]
    Poisoned,
}

/// Durable key/value slot for the last successfully submitted email.
pub trait EmailBackup: Send + Sync {
    fn remember(&self, email: &str) -> Result<(), BackupError>;

    fn last_email(&self) -> Result<Option<String>, BackupError>;
}

// ============================================================================
// FileEmailBackup
// ============================================================================

/// JSON object on disk; other keys in the file are preserved.
#[derive(Debug, Clone)]
pub struct FileEmailBackup {
    path: PathBuf,
}

impl FileEmailBackup {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>, BackupError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Map::new()),
            Err(err) => Err(err.into()),
        }
    }
}

impl EmailBackup for FileEmailBackup {
    fn remember(&self, email: &str) -> Result<(), BackupError> {
        // A corrupt file is replaced rather than blocking the write
        let mut values = self.read_all().unwrap_or_default();
        values.insert(BACKUP_KEY.to_string(), Value::String(email.to_string()));

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // Write-then-rename so readers never see a half-written file
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(&values)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn last_email(&self) -> Result<Option<String>, BackupError> {
        Ok(match self.read_all()?.remove(BACKUP_KEY) {
            Some(Value::String(email)) => Some(email),
            _ => None,
        })
    }
}

// ============================================================================
// MemoryEmailBackup
// ============================================================================

#[derive(Debug, Default)]
pub struct MemoryEmailBackup {
    email: Mutex<Option<String>>,
}

impl MemoryEmailBackup {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmailBackup for MemoryEmailBackup {
    fn remember(&self, email: &str) -> Result<(), BackupError> {
        let mut slot = self.email.lock().map_err(|_| BackupError::Poisoned)?;
        *slot = Some(email.to_string());
        Ok(())
    }

    fn last_email(&self) -> Result<Option<String>, BackupError> {
        let slot = self.email.lock().map_err(|_| BackupError::Poisoned)?;
        Ok(slot.clone())
    }
}
