//! Guest Directory Port
//!
//! Abstract interface for loading the guest list.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::{errors::DomainError, GuestRecord};

/// Source of guest records
#[async_trait]
pub trait GuestDirectory: Send + Sync {
    /// Fetch the whole directory, in directory order.
    ///
    /// Network, status and parse failures are reported as
    /// [`DomainError::DirectoryUnavailable`].
    async fn fetch_all(&self) -> Result<Vec<GuestRecord>, DomainError>;
}

/// Fixed in-memory directory that counts how often it was fetched
pub struct StaticDirectory {
    records: Result<Vec<GuestRecord>, String>,
    fetches: AtomicUsize,
}

impl StaticDirectory {
    pub fn new(records: Vec<GuestRecord>) -> Self {
        Self {
            records: Ok(records),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Directory whose every fetch fails
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            records: Err(reason.into()),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GuestDirectory for StaticDirectory {
    async fn fetch_all(&self) -> Result<Vec<GuestRecord>, DomainError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.records
            .clone()
            .map_err(DomainError::DirectoryUnavailable)
    }
}
