//! Item domain errors

use thiserror::Error;

/// Errors that can occur in the item domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown item status: {0}")]
    UnknownStatus(String),

    #[error("Item name must not be empty")]
    EmptyName,
}
