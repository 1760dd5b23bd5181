//! Registry snapshots for the persistence layer

use serde::{Deserialize, Serialize};

use domain_claims::Claim;
use domain_items::{FoundItem, LostItem};
use crate::client::ClientAccount;

/// A copy of every collection the registry owns
///
/// Identifier sequences are not stored: they are derived again from the
/// records when a snapshot is restored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrySnapshot {
    pub lost_items: Vec<LostItem>,
    pub found_items: Vec<FoundItem>,
    pub claims: Vec<Claim>,
    pub clients: Vec<ClientAccount>,
}

impl RegistrySnapshot {
    pub fn is_empty(&self) -> bool {
        self.lost_items.is_empty()
            && self.found_items.is_empty()
            && self.claims.is_empty()
            && self.clients.is_empty()
    }
}
