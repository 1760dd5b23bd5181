//! Registry service errors

use thiserror::Error;

use core_kernel::{ClientId, CoreError, LostItemId};
use domain_claims::ClaimError;
use domain_items::ItemError;

/// Errors returned by registry operations
///
/// Every error is local to the operation that raised it; no registry state
/// is changed when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Client not found: {0}")]
    ClientNotFound(ClientId),

    #[error("Lost item not found: {0}")]
    LostItemNotFound(LostItemId),

    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Item(#[from] ItemError),

    #[error(transparent)]
    Claim(#[from] ClaimError),
}

impl RegistryError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        RegistryError::InvalidInput(message.into())
    }

    /// Returns true if a referenced record does not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            RegistryError::ClientNotFound(_) | RegistryError::LostItemNotFound(_) => true,
            RegistryError::Claim(error) => error.is_not_found(),
            _ => false,
        }
    }

    /// Returns true if the request clashes with an existing record
    pub fn is_conflict(&self) -> bool {
        matches!(self, RegistryError::DuplicateUsername(_))
    }

    /// Returns true if the caller supplied malformed or insufficient input
    pub fn is_invalid_input(&self) -> bool {
        match self {
            RegistryError::InvalidInput(_) | RegistryError::Item(_) => true,
            RegistryError::Claim(error) => error.is_invalid_input(),
            _ => false,
        }
    }
}

impl From<CoreError> for RegistryError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidInput(msg) => RegistryError::InvalidInput(msg),
        }
    }
}

impl From<config::ConfigError> for RegistryError {
    fn from(error: config::ConfigError) -> Self {
        RegistryError::Configuration(error.to_string())
    }
}
