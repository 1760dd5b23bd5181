//! Ownership proof statements

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ClaimError;

/// Shortest proof statement accepted with a claim
pub const MIN_PROOF_LENGTH: usize = 10;

/// The claimant's description of details only the owner would know
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnershipProof(String);

impl OwnershipProof {
    /// Accepts a statement of at least [`MIN_PROOF_LENGTH`] characters
    pub fn new(text: impl Into<String>) -> Result<Self, ClaimError> {
        Self::with_min_length(text, MIN_PROOF_LENGTH)
    }

    /// Accepts a statement of at least `min` characters, ignoring surrounding whitespace
    pub fn with_min_length(text: impl Into<String>, min: usize) -> Result<Self, ClaimError> {
        let text = text.into();
        let trimmed = text.trim();
        let actual = trimmed.chars().count();
        if actual < min {
            return Err(ClaimError::ProofTooShort { min, actual });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnershipProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_boundary() {
        assert_eq!(
            OwnershipProof::new("123456789"),
            Err(ClaimError::ProofTooShort { min: 10, actual: 9 })
        );
        assert!(OwnershipProof::new("1234567890").is_ok());
    }

    #[test]
    fn test_surrounding_whitespace_does_not_count() {
        assert!(OwnershipProof::new("   short    ").is_err());
        assert_eq!(OwnershipProof::new("  scratched lid  ").unwrap().as_str(), "scratched lid");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert!(OwnershipProof::new("ééééééééé").is_err());
        assert!(OwnershipProof::new("éééééééééé").is_ok());
    }
}
