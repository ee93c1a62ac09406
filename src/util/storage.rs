//! Durable storage for the single bearer credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session layer and the request executor both read the credential from
//! here. In the browser it lives in `localStorage`; everywhere else an
//! in-memory slot stands in so the same code paths stay testable.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::{Arc, Mutex, PoisonError};

/// Get/set/remove access to the persisted credential.
pub trait CredentialStore {
    fn load(&self) -> Option<String>;

    /// # Errors
    ///
    /// Returns a description of the failure when the credential was not
    /// written.
    fn save(&self, token: &str) -> Result<(), String>;

    fn clear(&self);
}

/// Process-local credential slot. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { slot: Arc::new(Mutex::new(Some(token.to_owned()))) }
    }
}

impl CredentialStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, token: &str) -> Result<(), String> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Credential kept under [`TOKEN_STORAGE_KEY`](crate::config::TOKEN_STORAGE_KEY)
/// in the browser's `localStorage`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "hydrate")]
impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl CredentialStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(crate::config::TOKEN_STORAGE_KEY).ok().flatten()
    }

    fn save(&self, token: &str) -> Result<(), String> {
        let storage = Self::storage().ok_or_else(|| "localStorage unavailable".to_owned())?;
        storage
            .set_item(crate::config::TOKEN_STORAGE_KEY, token)
            .map_err(|e| format!("localStorage write failed: {e:?}"))
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(crate::config::TOKEN_STORAGE_KEY);
        }
    }
}

/// Store used by the running app for the current build target.
#[cfg(feature = "hydrate")]
pub type DefaultStore = LocalStorageStore;
#[cfg(not(feature = "hydrate"))]
pub type DefaultStore = MemoryStore;
