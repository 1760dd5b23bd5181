//! Tests for claims and the administrator lifecycle

use chrono::NaiveDate;

use core_kernel::{ClaimId, FoundItemId};
use domain_claims::{
    apply_status_update, Claim, ClaimError, ClaimStatus, FoundItemOutcome, OwnershipProof,
    StatusUpdate,
};
use domain_items::{FoundItem, FoundItemStatus, ItemCategory, ItemDetails, PartyRef};

fn claimant() -> PartyRef {
    PartyRef::new("kiran", "Kiran Shah", "555-0177")
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

fn found_item(id: u64, name: &str) -> FoundItem {
    let details = ItemDetails::new(name, ItemCategory::Accessories).with_color("Blue");
    FoundItem::report(FoundItemId::new(id), details, "Library", date(), claimant())
}

fn proof() -> OwnershipProof {
    OwnershipProof::new("Blue bag with a torn strap and my initials KS inside").unwrap()
}

fn submitted_claim(id: u64, found_id: u64) -> Claim {
    Claim::submit(ClaimId::new(id), FoundItemId::new(found_id), claimant(), proof(), date())
}

// ============================================================================
// Claim Tests
// ============================================================================

mod claim_tests {
    use super::*;

    #[test]
    fn test_claim_submit() {
        let claim = submitted_claim(1, 3);

        assert_eq!(claim.status, ClaimStatus::Submitted);
        assert_eq!(claim.found_item_id, FoundItemId::new(3));
        assert!(claim.admin_notes.is_none());
        assert_eq!(claim.claim_date, date());
    }

    #[test]
    fn test_file_against_available_item() {
        let item = found_item(2, "Blue Bag");
        let claim = Claim::file_against(&item, ClaimId::new(1), claimant(), proof(), date()).unwrap();

        assert_eq!(claim.found_item_id, item.id);
        assert_eq!(claim.status, ClaimStatus::Submitted);
    }

    #[test]
    fn test_file_against_claimed_item_fails() {
        let mut item = found_item(2, "Blue Bag");
        item.mark_claimed();

        let result = Claim::file_against(&item, ClaimId::new(1), claimant(), proof(), date());

        assert_eq!(result, Err(ClaimError::FoundItemUnavailable(FoundItemId::new(2))));
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_update_status_returns_previous_status() {
        let mut claim = submitted_claim(1, 1);

        let old = claim.update_status(ClaimStatus::Verified, None).unwrap();

        assert_eq!(old, ClaimStatus::Submitted);
        assert_eq!(claim.status, ClaimStatus::Verified);
    }

    #[test]
    fn test_cannot_return_to_submitted() {
        let mut claim = submitted_claim(1, 1);
        claim.update_status(ClaimStatus::Verified, None).unwrap();

        let result = claim.update_status(ClaimStatus::Submitted, None);

        assert!(matches!(result, Err(ClaimError::InvalidStatusTransition { .. })));
        assert_eq!(claim.status, ClaimStatus::Verified);
    }

    #[test]
    fn test_terminal_states_can_still_be_changed() {
        let mut claim = submitted_claim(1, 1);
        claim.update_status(ClaimStatus::Rejected, Some("No serial number")).unwrap();

        assert!(claim.update_status(ClaimStatus::Verified, None).is_ok());
        assert_eq!(claim.status, ClaimStatus::Verified);
        // notes only change on NotVerified/Rejected
        assert_eq!(claim.admin_notes.as_deref(), Some("No serial number"));
    }

    #[test]
    fn test_rejection_note_is_recorded() {
        let mut claim = submitted_claim(1, 1);

        claim.update_status(ClaimStatus::NotVerified, Some("  Color does not match  ")).unwrap();

        assert_eq!(claim.admin_notes.as_deref(), Some("Color does not match"));
    }

    #[test]
    fn test_status_labels_and_terminality() {
        assert_eq!(ClaimStatus::Submitted.to_string(), "Claim Request Submitted");
        assert_eq!(ClaimStatus::ReadyForCollection.label(), "Collect From SWF Office");
        assert!(ClaimStatus::Collected.is_terminal());
        assert!(ClaimStatus::Rejected.is_terminal());
        assert!(ClaimStatus::NotVerified.is_terminal());
        assert!(!ClaimStatus::Verified.is_terminal());
        assert!(!ClaimStatus::Submitted.is_terminal());
        assert!(ClaimStatus::Collected.locks_found_item());
        assert!(!ClaimStatus::Rejected.locks_found_item());
    }

    #[test]
    fn test_client_messages() {
        assert_eq!(ClaimStatus::Submitted.client_message(), "Pending admin verification");
        assert_eq!(ClaimStatus::Verified.client_message(), "Verified! Please collect from SWF Office");
        assert_eq!(ClaimStatus::ReadyForCollection.client_message(), "Ready for collection at SWF Office");
        assert_eq!(ClaimStatus::Collected.client_message(), "Item successfully claimed and collected");
        assert_eq!(ClaimStatus::Rejected.client_message(), "Claim rejected by admin");
        assert_eq!(ClaimStatus::NotVerified.client_message(), "Could not verify ownership");
    }

    #[test]
    fn test_statuses_serialize_as_snake_case() {
        let json = serde_json::to_string(&ClaimStatus::ReadyForCollection).unwrap();
        assert_eq!(json, "\"ready_for_collection\"");

        let back: ClaimStatus = serde_json::from_str("\"not_verified\"").unwrap();
        assert_eq!(back, ClaimStatus::NotVerified);
    }
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

mod lifecycle_tests {
    use super::*;

    #[test]
    fn test_collected_marks_only_the_referenced_item() {
        let mut claims = vec![submitted_claim(1, 2)];
        let mut items = vec![found_item(1, "Red Cap"), found_item(2, "Blue Bag"), found_item(3, "Black Pen")];

        let change = apply_status_update(
            &mut claims,
            &mut items,
            StatusUpdate::new(ClaimId::new(1), ClaimStatus::Collected),
        )
        .unwrap();

        assert_eq!(change.old_status, ClaimStatus::Submitted);
        assert_eq!(change.new_status, ClaimStatus::Collected);
        assert_eq!(change.found_item, FoundItemOutcome::MarkedClaimed(FoundItemId::new(2)));
        assert_eq!(items[0].status, FoundItemStatus::Available);
        assert_eq!(items[1].status, FoundItemStatus::Claimed);
        assert_eq!(items[2].status, FoundItemStatus::Available);
    }

    #[test]
    fn test_unknown_claim_is_not_found_and_mutates_nothing() {
        let mut claims = vec![submitted_claim(1, 1)];
        let mut items = vec![found_item(1, "Blue Bag")];
        let claims_before = claims.clone();
        let items_before = items.clone();

        let result = apply_status_update(
            &mut claims,
            &mut items,
            StatusUpdate::new(ClaimId::new(99), ClaimStatus::Collected),
        );

        assert_eq!(result, Err(ClaimError::ClaimNotFound(ClaimId::new(99))));
        assert!(result.unwrap_err().is_not_found());
        assert_eq!(claims, claims_before);
        assert_eq!(items, items_before);
    }

    #[test]
    fn test_rejected_without_note_leaves_notes_empty() {
        let mut claims = vec![submitted_claim(1, 1)];
        let mut items = vec![found_item(1, "Blue Bag")];

        let change = apply_status_update(
            &mut claims,
            &mut items,
            StatusUpdate::new(ClaimId::new(1), ClaimStatus::Rejected),
        )
        .unwrap();

        assert_eq!(change.new_status, ClaimStatus::Rejected);
        assert_eq!(change.found_item, FoundItemOutcome::Unaffected);
        assert!(claims[0].admin_notes.is_none());
        assert!(items[0].is_available());
    }

    #[test]
    fn test_not_verified_with_note() {
        let mut claims = vec![submitted_claim(1, 1)];
        let mut items = vec![found_item(1, "Blue Bag")];

        apply_status_update(
            &mut claims,
            &mut items,
            StatusUpdate::new(ClaimId::new(1), ClaimStatus::NotVerified).with_note("Wrong brand"),
        )
        .unwrap();

        assert_eq!(claims[0].admin_notes.as_deref(), Some("Wrong brand"));
        assert!(items[0].is_available());
    }

    #[test]
    fn test_repeating_a_transition_is_idempotent() {
        let mut claims = vec![submitted_claim(1, 1)];
        let mut items = vec![found_item(1, "Blue Bag")];
        let update = StatusUpdate::new(ClaimId::new(1), ClaimStatus::Collected);

        let first = apply_status_update(&mut claims, &mut items, update.clone()).unwrap();
        let state_after_first = (claims.clone(), items.clone());
        let second = apply_status_update(&mut claims, &mut items, update).unwrap();

        assert_eq!(first.found_item, FoundItemOutcome::MarkedClaimed(FoundItemId::new(1)));
        assert_eq!(second.old_status, ClaimStatus::Collected);
        assert_eq!(second.new_status, ClaimStatus::Collected);
        assert_eq!(second.found_item, FoundItemOutcome::AlreadyClaimed(FoundItemId::new(1)));
        assert_eq!((claims, items), state_after_first);
    }

    #[test]
    fn test_collected_with_missing_item_still_updates_claim() {
        let mut claims = vec![submitted_claim(1, 42)];
        let mut items = vec![found_item(1, "Blue Bag")];

        let change = apply_status_update(
            &mut claims,
            &mut items,
            StatusUpdate::new(ClaimId::new(1), ClaimStatus::Collected),
        )
        .unwrap();

        assert_eq!(claims[0].status, ClaimStatus::Collected);
        assert!(change.has_dangling_found_item());
        assert_eq!(change.found_item, FoundItemOutcome::Missing(FoundItemId::new(42)));
        assert!(items[0].is_available());
    }

    #[test]
    fn test_duplicate_claims_on_one_item_are_allowed() {
        let mut claims = vec![submitted_claim(1, 1), submitted_claim(2, 1)];
        let mut items = vec![found_item(1, "Blue Bag")];

        apply_status_update(&mut claims, &mut items, StatusUpdate::new(ClaimId::new(1), ClaimStatus::Collected))
            .unwrap();
        let change = apply_status_update(
            &mut claims,
            &mut items,
            StatusUpdate::new(ClaimId::new(2), ClaimStatus::Rejected).with_note("Item already collected"),
        )
        .unwrap();

        assert_eq!(change.old_status, ClaimStatus::Submitted);
        assert_eq!(claims[1].admin_notes.as_deref(), Some("Item already collected"));
    }

    #[test]
    fn test_parse_rejects_non_numeric_claim_id() {
        let result = StatusUpdate::parse("twelve", ClaimStatus::Verified);

        let error = result.unwrap_err();
        assert!(error.is_invalid_input());
        assert!(matches!(error, ClaimError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_accepts_numeric_claim_id() {
        let update = StatusUpdate::parse(" 7 ", ClaimStatus::Verified).unwrap();

        assert_eq!(update.claim_id, ClaimId::new(7));
        assert_eq!(update.target, ClaimStatus::Verified);
        assert!(update.note.is_none());
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn status_strategy() -> impl Strategy<Value = ClaimStatus> {
        proptest::sample::select(ClaimStatus::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_only_collected_touches_the_found_item(
            path in proptest::collection::vec(status_strategy(), 1..6),
        ) {
            let mut claims = vec![submitted_claim(1, 1)];
            let mut items = vec![found_item(1, "Blue Bag"), found_item(2, "Black Wallet")];

            for target in path.iter().copied() {
                let result = apply_status_update(&mut claims, &mut items, StatusUpdate::new(ClaimId::new(1), target));
                if target == ClaimStatus::Submitted {
                    prop_assert!(result.is_err());
                } else {
                    prop_assert_eq!(result.unwrap().new_status, target);
                }
            }

            let collected = path.contains(&ClaimStatus::Collected);
            prop_assert_eq!(items[0].status == FoundItemStatus::Claimed, collected);
            prop_assert_eq!(items[1].status, FoundItemStatus::Available);
        }
    }
}
