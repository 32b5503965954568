//! Bearer token storage abstraction.
//!
//! The dashboard keeps a single bearer token in local persistent storage.
//! The API client reads it before every request and clears it on a 401.

use thiserror::Error;

/// Token storage errors.
#[derive(Debug, Error)]
pub enum TokenStoreError {
    /// The storage location could not be determined (no home directory).
    #[error("token storage location unavailable")]
    Unavailable,
    /// Reading or writing the backing file failed.
    #[error("token storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The stored token could not be (de)serialized.
    #[error("token storage is corrupt: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Trait for bearer token persistence.
///
/// Implementations must be cheap to call: `load` runs once per request.
pub trait TokenStore: Send + Sync {
    /// Read the stored token, if any.
    fn load(&self) -> Option<String>;

    /// Persist a token, replacing any previous one.
    fn save(&self, token: &str) -> Result<(), TokenStoreError>;

    /// Remove the stored token. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), TokenStoreError>;
}
