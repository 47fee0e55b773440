//! Unified error handling for the state layer.
//!
//! Storage and serialization failures are propagated as typed errors rather
//! than swallowed: the UI shell owns the decision to toast, retry, or crash.
//! Nothing in this crate panics on a failed write.

use kalartz_core::AddressId;
use thiserror::Error;

use crate::storage::StorageError;

/// Errors produced by the state containers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend failed to read, write, or remove a key.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A persisted blob exists but does not decode as the expected shape.
    ///
    /// Hydration surfaces this instead of silently starting empty, so a
    /// caller can distinguish "first run" from "corrupt data".
    #[error("corrupt record under {key:?}: {source}")]
    Corrupt {
        /// Storage key the blob was read from.
        key: &'static str,
        /// Underlying decode failure.
        source: serde_json::Error,
    },

    /// In-memory state failed to encode for persistence.
    #[error("failed to encode record for {key:?}: {source}")]
    Encode {
        /// Storage key the blob was headed for.
        key: &'static str,
        /// Underlying encode failure.
        source: serde_json::Error,
    },

    /// An operation referenced an address that is not in the book.
    #[error("address not found: {0}")]
    AddressNotFound(AddressId),
}

/// Result type alias for [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;
