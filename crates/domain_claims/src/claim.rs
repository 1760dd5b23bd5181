//! Claim aggregate

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{ClaimId, FoundItemId};
use domain_items::{FoundItem, PartyRef};
use crate::error::ClaimError;
use crate::proof::OwnershipProof;

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    /// Submitted by the claimant, awaiting review
    Submitted,
    /// Ownership verified by an administrator
    Verified,
    /// Proof did not hold up; the item stays available
    NotVerified,
    /// Waiting at the office for the owner to pick it up
    ReadyForCollection,
    /// Handed over; the found item is now claimed
    Collected,
    /// Rejected outright; the item stays available
    Rejected,
}

impl ClaimStatus {
    /// Every status, initial state first
    pub const ALL: [ClaimStatus; 6] = [
        ClaimStatus::Submitted,
        ClaimStatus::Verified,
        ClaimStatus::NotVerified,
        ClaimStatus::ReadyForCollection,
        ClaimStatus::Collected,
        ClaimStatus::Rejected,
    ];

    /// Operator-facing wording of the status
    pub fn label(&self) -> &'static str {
        match self {
            ClaimStatus::Submitted => "Claim Request Submitted",
            ClaimStatus::Verified => "Claim Verified",
            ClaimStatus::NotVerified => "Not Verified",
            ClaimStatus::ReadyForCollection => "Collect From SWF Office",
            ClaimStatus::Collected => "Claimed",
            ClaimStatus::Rejected => "Claim Rejected",
        }
    }

    /// What the claimant is told when checking on the claim
    pub fn client_message(&self) -> &'static str {
        match self {
            ClaimStatus::Submitted => "Pending admin verification",
            ClaimStatus::Verified => "Verified! Please collect from SWF Office",
            ClaimStatus::NotVerified => "Could not verify ownership",
            ClaimStatus::ReadyForCollection => "Ready for collection at SWF Office",
            ClaimStatus::Collected => "Item successfully claimed and collected",
            ClaimStatus::Rejected => "Claim rejected by admin",
        }
    }

    /// Maps the administrator's menu choice (`1`-`5`) to a target status
    pub fn from_admin_choice(choice: &str) -> Option<ClaimStatus> {
        match choice.trim() {
            "1" => Some(ClaimStatus::Verified),
            "2" => Some(ClaimStatus::NotVerified),
            "3" => Some(ClaimStatus::ReadyForCollection),
            "4" => Some(ClaimStatus::Collected),
            "5" => Some(ClaimStatus::Rejected),
            _ => None,
        }
    }

    /// Claims in these states are finished from the claimant's point of view
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ClaimStatus::NotVerified | ClaimStatus::Collected | ClaimStatus::Rejected
        )
    }

    /// Moving to this status hands the found item over
    pub fn locks_found_item(&self) -> bool {
        matches!(self, ClaimStatus::Collected)
    }

    /// Moving to this status records the administrator's note
    pub fn records_admin_notes(&self) -> bool {
        matches!(self, ClaimStatus::NotVerified | ClaimStatus::Rejected)
    }

    /// Transition policy
    ///
    /// Administrators may move a claim from any state to any non-initial
    /// state, including the state it is already in. A claim never returns to
    /// `Submitted`.
    pub fn can_transition_to(&self, target: ClaimStatus) -> bool {
        !matches!(target, ClaimStatus::Submitted)
    }

    /// Applies the transition policy, returning the new status
    pub fn transition_to(self, target: ClaimStatus) -> Result<ClaimStatus, ClaimError> {
        if !self.can_transition_to(target) {
            return Err(ClaimError::InvalidStatusTransition {
                from: self.to_string(),
                to: target.to_string(),
            });
        }
        Ok(target)
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ClaimStatus {
    type Err = ClaimError;

    /// Accepts the variant name or the operator label, ignoring case, spaces and underscores
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        ClaimStatus::ALL
            .into_iter()
            .find(|status| normalize(&format!("{:?}", status)) == wanted || normalize(status.label()) == wanted)
            .ok_or_else(|| ClaimError::UnknownStatus(s.trim().to_string()))
    }
}

fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// A client's claim of ownership over a found item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Found item being claimed; the claim does not own it
    pub found_item_id: FoundItemId,
    /// Claiming client
    pub claimant: PartyRef,
    /// Claimant's proof of ownership
    pub proof: OwnershipProof,
    /// Status
    pub status: ClaimStatus,
    /// Administrator's reason for a rejection or failed verification
    pub admin_notes: Option<String>,
    /// Date the claim was filed
    pub claim_date: NaiveDate,
}

impl Claim {
    /// Creates a submitted claim
    pub fn submit(
        id: ClaimId,
        found_item_id: FoundItemId,
        claimant: PartyRef,
        proof: OwnershipProof,
        claim_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            found_item_id,
            claimant,
            proof,
            status: ClaimStatus::Submitted,
            admin_notes: None,
            claim_date,
        }
    }

    /// Creates a submitted claim against an item that must still be available
    pub fn file_against(
        found_item: &FoundItem,
        id: ClaimId,
        claimant: PartyRef,
        proof: OwnershipProof,
        claim_date: NaiveDate,
    ) -> Result<Self, ClaimError> {
        if !found_item.is_available() {
            return Err(ClaimError::FoundItemUnavailable(found_item.id));
        }
        Ok(Self::submit(id, found_item.id, claimant, proof, claim_date))
    }

    /// Updates the status, returning the previous one
    ///
    /// For `NotVerified` and `Rejected` the note replaces any earlier admin
    /// notes; a missing or blank note leaves them empty rather than blocking
    /// the update.
    pub fn update_status(&mut self, target: ClaimStatus, note: Option<&str>) -> Result<ClaimStatus, ClaimError> {
        let new_status = self.status.transition_to(target)?;
        let old_status = self.status;
        self.status = new_status;

        if new_status.records_admin_notes() {
            self.admin_notes = note
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string);
        }

        Ok(old_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_names_and_labels() {
        assert_eq!("ready_for_collection".parse::<ClaimStatus>().unwrap(), ClaimStatus::ReadyForCollection);
        assert_eq!("Collect From SWF Office".parse::<ClaimStatus>().unwrap(), ClaimStatus::ReadyForCollection);
        assert_eq!("NotVerified".parse::<ClaimStatus>().unwrap(), ClaimStatus::NotVerified);
        assert_eq!("claimed".parse::<ClaimStatus>().unwrap(), ClaimStatus::Collected);
        assert_eq!("CLAIM REJECTED".parse::<ClaimStatus>().unwrap(), ClaimStatus::Rejected);
        assert!("archived".parse::<ClaimStatus>().is_err());
    }

    #[test]
    fn test_admin_choices() {
        assert_eq!(ClaimStatus::from_admin_choice("4"), Some(ClaimStatus::Collected));
        assert_eq!(ClaimStatus::from_admin_choice(" 2 "), Some(ClaimStatus::NotVerified));
        assert_eq!(ClaimStatus::from_admin_choice("0"), None);
        assert_eq!(ClaimStatus::from_admin_choice("6"), None);
    }

    #[test]
    fn test_policy_is_total_and_permissive() {
        for from in ClaimStatus::ALL {
            for to in ClaimStatus::ALL {
                let allowed = from.transition_to(to);
                if to == ClaimStatus::Submitted {
                    assert!(allowed.is_err());
                } else {
                    assert_eq!(allowed, Ok(to));
                }
            }
        }
    }
}
