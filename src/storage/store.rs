//! The [`StateStore`] trait and the in-memory implementation.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::types::errors::StorageError;
use crate::types::state::NavigationState;

/// Durable local storage for navigation state, keyed by user/session identity.
///
/// `load` returns `Ok(None)` when nothing has been stored under the key;
/// `save` overwrites any previous value. Both are synchronous best-effort
/// local operations — callers decide whether a failure is fatal (the tracker
/// treats it as not).
pub trait StateStore {
    fn load(&self, key: &str) -> Result<Option<NavigationState>, StorageError>;
    fn save(&self, key: &str, state: &NavigationState) -> Result<(), StorageError>;
}

/// In-memory state store.
///
/// Values pass through the same JSON serialization as the SQLite store so the
/// round-trip behavior matches. Interior mutability keeps the trait's `&self`
/// signatures, mirroring a connection-backed store.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<NavigationState>, StorageError> {
        match self.entries.borrow().get(key) {
            Some(payload) => {
                let state = serde_json::from_str(payload)
                    .map_err(|e| StorageError::SerializationError(e.to_string()))?;
                Ok(Some(state))
            }
            None => Ok(None),
        }
    }

    fn save(&self, key: &str, state: &NavigationState) -> Result<(), StorageError> {
        let payload = serde_json::to_string(state)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        self.entries.borrow_mut().insert(key.to_string(), payload);
        Ok(())
    }
}
