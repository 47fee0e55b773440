//! Key-value persistence for the state containers.
//!
//! Every container synchronizes to one fixed key in a string-keyed store,
//! the same contract the browser's local storage gave the original UI. The
//! [`StoragePort`] trait is injected into each container so tests can swap
//! the file-backed implementation for an in-memory fake.
//!
//! Components:
//! - [`StoragePort`] - the uniform read/write/remove API.
//! - [`keys`] - the fixed storage keys, one per container.
//! - [`FileStorage`] - filesystem-backed implementation, one JSON document
//!   per key under a data directory.
//! - [`MemoryStorage`] - in-memory fake for tests.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::error::{Result, StoreError};

/// Storage keys for the persisted containers.
///
/// These names are the wire format: blobs written by one session are read
/// back by the next under the same key. There is no schema version field;
/// a shape change is not backward compatible.
pub mod keys {
    /// Key for the cart line items.
    pub const CART: &str = "kalartz-cart";

    /// Key for the wishlist entries.
    pub const WISHLIST: &str = "kalartz-wishlist";

    /// Key for the logged-in session user.
    pub const SESSION_USER: &str = "kalartz_user";

    /// Key for the saved address book.
    pub const ADDRESSES: &str = "kalartz-addresses";

    /// Key for the vendor's locally added products.
    pub const VENDOR_PRODUCTS: &str = "vendor-products";
}

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading a key failed.
    #[error("reading {key:?}: {source}")]
    Read {
        /// Key being read.
        key: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Writing a key failed (e.g., disk full, permissions).
    #[error("writing {key:?}: {source}")]
    Write {
        /// Key being written.
        key: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Removing a key failed.
    #[error("removing {key:?}: {source}")]
    Remove {
        /// Key being removed.
        key: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
}

/// A string-keyed, string-valued persistent store.
///
/// Writes are synchronous and unbatched: when a call returns `Ok`, the value
/// is durably handed to the backend.
pub trait StoragePort: Send + Sync {
    /// Read the value stored under `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be read.
    fn read(&self, key: &str) -> std::result::Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be written.
    fn write(&self, key: &str, value: &str) -> std::result::Result<(), StorageError>;

    /// Remove `key` if present. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be modified.
    fn remove(&self, key: &str) -> std::result::Result<(), StorageError>;
}

/// Load and decode the JSON document stored under `key`.
///
/// Returns `Ok(None)` when the key has never been written.
///
/// # Errors
///
/// Returns [`StoreError::Storage`] if the backend fails and
/// [`StoreError::Corrupt`] if the stored blob does not decode as `T`.
pub fn load<T: DeserializeOwned>(storage: &dyn StoragePort, key: &'static str) -> Result<Option<T>> {
    let Some(raw) = storage.read(key)? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt { key, source })?;
    Ok(Some(value))
}

/// Encode `value` as JSON and write it under `key`.
///
/// # Errors
///
/// Returns [`StoreError::Encode`] if the value fails to serialize and
/// [`StoreError::Storage`] if the backend fails.
pub fn save<T: Serialize>(storage: &dyn StoragePort, key: &'static str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode { key, source })?;
    storage.write(key, &raw)?;
    Ok(())
}
