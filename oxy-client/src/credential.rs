//! Persisted auth token - JSON file storage
//!
//! The token is the only client state that survives a restart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Token as written to disk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredToken {
    pub token: String,
    pub saved_at: DateTime<Utc>,
}

impl StoredToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            saved_at: Utc::now(),
        }
    }
}

/// Token file storage
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Create a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Make sure the parent directory exists
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Persist a token, replacing any previous one
    pub fn save(&self, token: &str) -> std::io::Result<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(&StoredToken::new(token))?;
        fs::write(&self.path, json)
    }

    /// Load the persisted token; a missing or unreadable file counts as none
    pub fn load(&self) -> Option<StoredToken> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<StoredToken>(&json) {
            Ok(stored) if !stored.token.is_empty() => Some(stored),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring corrupt token file");
                None
            }
        }
    }

    /// Check whether a token file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Remove the token file
    pub fn delete(&self) -> std::io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}
