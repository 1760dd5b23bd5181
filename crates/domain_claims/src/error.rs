//! Claims domain errors

use thiserror::Error;

use core_kernel::{ClaimId, CoreError, FoundItemId};

/// Errors that can occur in the claims domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimError {
    #[error("Claim not found: {0}")]
    ClaimNotFound(ClaimId),

    #[error("Found item not found: {0}")]
    FoundItemNotFound(FoundItemId),

    #[error("Found item {0} is no longer available")]
    FoundItemUnavailable(FoundItemId),

    #[error("Ownership proof too short: {actual} characters, at least {min} required")]
    ProofTooShort { min: usize, actual: usize },

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Unknown claim status: {0}")]
    UnknownStatus(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ClaimError {
    /// Returns true if a referenced claim does not exist, or a found item
    /// does not exist or can no longer be claimed
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ClaimError::ClaimNotFound(_)
                | ClaimError::FoundItemNotFound(_)
                | ClaimError::FoundItemUnavailable(_)
        )
    }

    /// Returns true if the caller supplied malformed or insufficient input
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ClaimError::InvalidInput(_) | ClaimError::ProofTooShort { .. } | ClaimError::UnknownStatus(_)
        )
    }
}

impl From<CoreError> for ClaimError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidInput(msg) => ClaimError::InvalidInput(msg),
        }
    }
}
