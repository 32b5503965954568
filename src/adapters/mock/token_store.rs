//! In-memory token store, for tests and for hosts without a home directory.

use std::sync::{Arc, Mutex, PoisonError};

use crate::traits::{TokenStore, TokenStoreError};

/// Token store that keeps the token in memory.
///
/// Clones share the same slot, so a test can keep a handle while the API
/// client owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
    clear_count: Arc<Mutex<usize>>,
}

impl InMemoryTokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `token`.
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        *store.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        store
    }

    /// How many times `clear` has been called.
    pub fn clear_count(&self) -> usize {
        *self.clear_count.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TokenStore for InMemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
        *self.clear_count.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        Ok(())
    }
}
