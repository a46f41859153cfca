//! Session identifier persistence.
//!
//! `SessionStore` owns the conversation identifier: read once at startup,
//! generated client-side when absent, overwritten only on session migration.
//! Durable storage goes through the `SessionBackend` trait; implementations
//! live in `shopchat-infra` (file-backed) and here (in-memory, for tests and
//! ephemeral embedding).

use shopchat_types::error::SessionError;

use rand::Rng;

use std::sync::Mutex;

/// Length of a client-generated session identifier.
pub const SESSION_ID_LEN: usize = 13;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Durable key-value surface holding the session identifier.
///
/// A single key: implementations read and write one string.
pub trait SessionBackend {
    /// Read the persisted identifier, if any.
    fn read(&self) -> Result<Option<String>, SessionError>;

    /// Persist the identifier, overwriting any previous value.
    fn write(&self, id: &str) -> Result<(), SessionError>;
}

/// Owns the current session identifier and writes changes through to the
/// backend. No caching beyond the current value.
pub struct SessionStore<B: SessionBackend> {
    backend: B,
    current: Option<String>,
}

impl<B: SessionBackend> SessionStore<B> {
    /// Read the persisted identifier at startup.
    pub fn load(backend: B) -> Result<Self, SessionError> {
        let current = backend.read()?;
        Ok(Self { backend, current })
    }

    /// The identifier currently in memory, if any.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Return the existing identifier, or generate and persist a new one.
    ///
    /// The in-memory value is set before the write-through, so a storage
    /// failure still leaves a usable identifier for this process.
    pub fn ensure(&mut self) -> Result<String, SessionError> {
        if let Some(id) = &self.current {
            return Ok(id.clone());
        }
        let id = generate_id();
        self.current = Some(id.clone());
        self.backend.write(&id)?;
        Ok(id)
    }

    /// Overwrite the identifier after a session migration.
    ///
    /// Called only when the backend response carries a differing identifier.
    pub fn update(&mut self, new_id: &str) -> Result<(), SessionError> {
        self.current = Some(new_id.to_string());
        self.backend.write(new_id)
    }
}

/// Generate a random session identifier: 13 base-36 characters.
///
/// Collision probability is negligible for the widget's demo scope.
fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..SESSION_ID_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

/// In-memory `SessionBackend` for tests and ephemeral hosts.
#[derive(Debug, Default)]
pub struct MemorySessionBackend {
    value: Mutex<Option<String>>,
}

impl MemorySessionBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the backend with an existing identifier.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(id.into())),
        }
    }
}

impl SessionBackend for MemorySessionBackend {
    fn read(&self) -> Result<Option<String>, SessionError> {
        let guard = self
            .value
            .lock()
            .map_err(|e| SessionError::Storage(e.to_string()))?;
        Ok(guard.clone())
    }

    fn write(&self, id: &str) -> Result<(), SessionError> {
        let mut guard = self
            .value
            .lock()
            .map_err(|e| SessionError::Storage(e.to_string()))?;
        *guard = Some(id.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_shape() {
        let id = generate_id();
        assert_eq!(id.len(), SESSION_ID_LEN);
        assert!(id.bytes().all(|b| BASE36.contains(&b)));
    }

    #[test]
    fn test_generated_ids_differ() {
        // Not a collision proof, just a sanity check on the generator.
        assert_ne!(generate_id(), generate_id());
    }

    #[test]
    fn test_load_reads_existing() {
        let store = SessionStore::load(MemorySessionBackend::with_id("sess_existing")).unwrap();
        assert_eq!(store.current(), Some("sess_existing"));
    }

    #[test]
    fn test_ensure_generates_and_persists() {
        let mut store = SessionStore::load(MemorySessionBackend::new()).unwrap();
        assert!(store.current().is_none());

        let id = store.ensure().unwrap();
        assert_eq!(id.len(), SESSION_ID_LEN);
        assert_eq!(store.current(), Some(id.as_str()));

        // Stable across calls.
        assert_eq!(store.ensure().unwrap(), id);

        // Persisted through to the backend.
        let reloaded = SessionStore::load(MemorySessionBackend::with_id(&id)).unwrap();
        assert_eq!(reloaded.current(), Some(id.as_str()));
    }

    #[test]
    fn test_update_overwrites_memory_and_backend() {
        let backend = MemorySessionBackend::with_id("sess_OLD");
        let mut store = SessionStore::load(backend).unwrap();

        store.update("sess_NEW").unwrap();
        assert_eq!(store.current(), Some("sess_NEW"));
        assert_eq!(store.backend.read().unwrap().as_deref(), Some("sess_NEW"));
    }
}
