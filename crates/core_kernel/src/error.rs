//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
///
/// The kernel only parses; missing records, conflicts and state rules are
/// reported by the domain crates that own them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CoreError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CoreError::InvalidInput(message.into())
    }
}
