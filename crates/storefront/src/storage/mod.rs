//! Client-side key-value persistence.
//!
//! The storefront persists exactly two entries, mirroring browser local
//! storage: the logged-in [`keys::USER`] record and the [`keys::CART`]
//! line list. Both are read once at session start; the cart is rewritten on
//! every mutation and both are removed on logout.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Well-known storage keys.
pub mod keys {
    /// Serialized `User` record.
    pub const USER: &str = "user";
    /// Serialized ordered list of cart lines.
    pub const CART: &str = "cart";
}

/// Errors that can occur during persistence.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A stored value failed to serialize or deserialize.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend itself failed.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// A string key-value store, the shape of browser local storage.
///
/// Implementations take `&self` and handle their own interior mutability so
/// a store can be shared across the session.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value for a key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Backend` if the backend fails.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write the raw value for a key, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Backend` if the backend fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Backend` if the backend fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Load and deserialize a JSON value, `None` if the key is absent.
///
/// # Errors
///
/// Returns an error if the backend fails or the stored JSON is corrupt.
pub fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize a value to JSON and store it.
///
/// # Errors
///
/// Returns an error if serialization or the backend fails.
pub fn save_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// In-memory [`KeyValueStore`], the default backend for the demo and for
/// tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Backend("store lock poisoned".to_owned()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Backend("store lock poisoned".to_owned()))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::Backend("store lock poisoned".to_owned()))?;
        entries.remove(key);
        Ok(())
    }
}
