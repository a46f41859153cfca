//! File-backed session persistence.
//!
//! The durable key-value surface behind [`SessionStore`]: one file holding
//! the session identifier, read on initialization and rewritten on
//! generation or migration.
//!
//! [`SessionStore`]: shopchat_core::session::SessionStore

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use shopchat_core::session::SessionBackend;
use shopchat_types::error::SessionError;

/// Stores the session identifier at `{data_dir}/session`.
pub struct FileSessionBackend {
    path: PathBuf,
}

impl FileSessionBackend {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("session"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the persisted identifier, if any. The next `ensure` starts a
    /// fresh conversation.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionError::Storage(err.to_string())),
        }
    }
}

impl SessionBackend for FileSessionBackend {
    fn read(&self) -> Result<Option<String>, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let id = contents.trim();
                if id.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(id.to_string()))
                }
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SessionError::Storage(err.to_string())),
        }
    }

    fn write(&self, id: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionError::Storage(e.to_string()))?;
        }
        fs::write(&self.path, id).map_err(|e| SessionError::Storage(e.to_string()))
    }
}
