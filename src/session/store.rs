//! Session storage backends

use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

/// Durable string-keyed storage holding the session entries
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    fn remove(&self, key: &str);
}

/// In-process storage, used on native hosts and in tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Errors raised while persisting the session
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Storage unavailable")]
    Unavailable,

    #[error("Failed to write '{key}': {message}")]
    Write { key: String, message: String },

    #[error("Failed to serialize user: {0}")]
    Serialize(#[from] serde_json::Error),
}
