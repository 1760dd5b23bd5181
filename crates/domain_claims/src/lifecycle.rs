//! Administrator status updates
//!
//! A status update touches at most two records: the claim itself and, when
//! the claim is collected, the found item it names. Both collections are
//! borrowed from their owner for the duration of the call.

use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, FoundItemId};
use domain_items::FoundItem;
use crate::claim::{Claim, ClaimStatus};
use crate::error::ClaimError;

/// An administrator's request to move a claim to a new status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub claim_id: ClaimId,
    pub target: ClaimStatus,
    pub note: Option<String>,
}

impl StatusUpdate {
    pub fn new(claim_id: ClaimId, target: ClaimStatus) -> Self {
        Self {
            claim_id,
            target,
            note: None,
        }
    }

    /// Builds a request from the claim id as typed by the administrator
    pub fn parse(raw_claim_id: &str, target: ClaimStatus) -> Result<Self, ClaimError> {
        let claim_id = raw_claim_id.parse::<ClaimId>()?;
        Ok(Self::new(claim_id, target))
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// What a status update did to the referenced found item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoundItemOutcome {
    /// The new status does not involve the found item
    Unaffected,
    /// The found item was available and is now claimed
    MarkedClaimed(FoundItemId),
    /// The found item had already been claimed
    AlreadyClaimed(FoundItemId),
    /// No found item with the referenced id exists; the claim was still updated
    Missing(FoundItemId),
}

/// Result of a successful status update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub claim_id: ClaimId,
    pub old_status: ClaimStatus,
    pub new_status: ClaimStatus,
    pub found_item: FoundItemOutcome,
}

impl StatusChange {
    /// True when a collected claim points at a found item that does not exist
    pub fn has_dangling_found_item(&self) -> bool {
        matches!(self.found_item, FoundItemOutcome::Missing(_))
    }
}

/// Moves a claim to the requested status
///
/// Fails with [`ClaimError::ClaimNotFound`] before touching anything if the
/// claim does not exist. Collecting a claim marks its found item as claimed
/// and leaves every other found item alone.
pub fn apply_status_update(
    claims: &mut [Claim],
    found_items: &mut [FoundItem],
    update: StatusUpdate,
) -> Result<StatusChange, ClaimError> {
    let claim = claims
        .iter_mut()
        .find(|claim| claim.id == update.claim_id)
        .ok_or(ClaimError::ClaimNotFound(update.claim_id))?;

    let old_status = claim.update_status(update.target, update.note.as_deref())?;
    let new_status = claim.status;

    let found_item = if new_status.locks_found_item() {
        hand_over(found_items, claim.found_item_id)
    } else {
        FoundItemOutcome::Unaffected
    };

    tracing::info!(
        claim_id = %claim.id,
        found_item_id = %claim.found_item_id,
        old_status = %old_status,
        new_status = %new_status,
        "Claim status updated"
    );
    if let FoundItemOutcome::Missing(found_item_id) = found_item {
        tracing::warn!(
            claim_id = %claim.id,
            %found_item_id,
            "Collected claim references a found item that does not exist"
        );
    }

    Ok(StatusChange {
        claim_id: claim.id,
        old_status,
        new_status,
        found_item,
    })
}

fn hand_over(found_items: &mut [FoundItem], found_item_id: FoundItemId) -> FoundItemOutcome {
    match found_items.iter_mut().find(|item| item.id == found_item_id) {
        Some(item) => {
            if item.mark_claimed() {
                FoundItemOutcome::MarkedClaimed(found_item_id)
            } else {
                FoundItemOutcome::AlreadyClaimed(found_item_id)
            }
        }
        None => FoundItemOutcome::Missing(found_item_id),
    }
}
