//! Session Cache
//!
//! Remembers the one guest resolved on this device so later visits skip
//! the directory entirely. No expiry.

use std::sync::Arc;

use crate::domain::{DomainError, ResolvedGuest};
use crate::ports::KeyValueStore;

/// Storage key holding the JSON-encoded resolved guest
pub const CACHE_KEY: &str = "fumi.resolved_guest";

/// Persisted resolved guest
pub struct SessionCache<S: KeyValueStore> {
    store: Arc<S>,
}

impl<S: KeyValueStore> SessionCache<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Cached guest, if a well-formed one is stored.
    ///
    /// Unreadable or malformed entries count as a miss.
    pub fn load(&self) -> Option<ResolvedGuest> {
        let raw = match self.store.get(CACHE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Could not read session cache: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<ResolvedGuest>(&raw) {
            Ok(guest) => Some(guest),
            Err(e) => {
                tracing::warn!("Ignoring malformed session cache entry: {}", e);
                None
            }
        }
    }

    /// Store the guest, replacing any previous one
    pub fn save(&self, guest: &ResolvedGuest) -> Result<(), DomainError> {
        let value = serde_json::to_string(guest)
            .map_err(|e| DomainError::Storage(format!("Failed to serialize guest: {e}")))?;
        self.store.set(CACHE_KEY, &value)
    }

    /// Forget the cached guest
    pub fn clear(&self) -> Result<(), DomainError> {
        self.store.remove(CACHE_KEY)
    }
}
