//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

use crate::domain::value_objects::{LookupFailure, RevealState};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Name is empty")]
    EmptyInput,

    #[error("Guest not found: {0}")]
    NotFound(String),

    #[error("Guest directory unavailable: {0}")]
    DirectoryUnavailable(String),

    #[error("Input is disabled while {0}")]
    InputDisabled(RevealState),

    #[error("Cannot {trigger} while {state}")]
    InvalidTransition {
        state: RevealState,
        trigger: &'static str,
    },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn invalid_transition(state: RevealState, trigger: &'static str) -> Self {
        Self::InvalidTransition { state, trigger }
    }

    /// Lookup failure shown to the visitor, if this error is one
    pub fn lookup_failure(&self) -> Option<LookupFailure> {
        match self {
            Self::NotFound(_) => Some(LookupFailure::NotFound),
            Self::DirectoryUnavailable(_) => Some(LookupFailure::DirectoryUnavailable),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_failures_are_distinct() {
        let not_found = DomainError::NotFound("山田花子".to_string());
        let unavailable = DomainError::DirectoryUnavailable("connection refused".to_string());

        assert_eq!(not_found.lookup_failure(), Some(LookupFailure::NotFound));
        assert_eq!(
            unavailable.lookup_failure(),
            Some(LookupFailure::DirectoryUnavailable)
        );
        assert_ne!(
            LookupFailure::NotFound.message(),
            LookupFailure::DirectoryUnavailable.message()
        );
    }

    #[test]
    fn test_other_errors_are_not_lookup_failures() {
        assert!(DomainError::EmptyInput.lookup_failure().is_none());
        assert!(DomainError::Storage("disk full".to_string())
            .lookup_failure()
            .is_none());
    }

    #[test]
    fn test_invalid_transition_display() {
        let err = DomainError::invalid_transition(RevealState::Reading, "submit");
        assert_eq!(err.to_string(), "Cannot submit while reading");
    }
}
