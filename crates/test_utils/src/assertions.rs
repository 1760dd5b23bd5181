//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use domain_claims::{ClaimStatus, FoundItemOutcome, StatusChange};
use domain_items::{FoundItem, FoundItemStatus};
use domain_matching::MatchCandidate;

/// Asserts that candidates are ordered by score, highest first
pub fn assert_matches_sorted(candidates: &[MatchCandidate]) {
    for pair in candidates.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "Candidates out of order: {}/{} scored {} before {}/{} scored {}",
            pair[0].lost_id,
            pair[0].found_id,
            pair[0].score,
            pair[1].lost_id,
            pair[1].found_id,
            pair[1].score
        );
    }
}

/// Asserts that every candidate reaches the given threshold
pub fn assert_all_above(candidates: &[MatchCandidate], min_score: u32) {
    for candidate in candidates {
        assert!(
            candidate.score >= min_score,
            "Candidate {}/{} scored {} below threshold {}",
            candidate.lost_id,
            candidate.found_id,
            candidate.score,
            min_score
        );
    }
}

/// Asserts that a candidate lists the given reason
pub fn assert_has_reason(candidate: &MatchCandidate, reason: &str) {
    assert!(
        candidate.reasons.iter().any(|r| r == reason),
        "Expected reason {:?} in {:?}",
        reason,
        candidate.reasons
    );
}

/// Asserts the old and new status of a status change
pub fn assert_status_change(change: &StatusChange, from: ClaimStatus, to: ClaimStatus) {
    assert_eq!(
        (change.old_status, change.new_status),
        (from, to),
        "Unexpected transition for claim {}",
        change.claim_id
    );
}

/// Asserts that only the listed found items are claimed
pub fn assert_only_claimed(found_items: &[FoundItem], claimed_ids: &[u64]) {
    for item in found_items {
        let expected = if claimed_ids.contains(&item.id.get()) {
            FoundItemStatus::Claimed
        } else {
            FoundItemStatus::Available
        };
        assert_eq!(
            item.status, expected,
            "Found item {} has status {}",
            item.id, item.status
        );
    }
}

/// Asserts that a collected claim referenced a missing found item
pub fn assert_dangling(change: &StatusChange) {
    assert!(
        matches!(change.found_item, FoundItemOutcome::Missing(_)),
        "Expected a missing found item, got {:?}",
        change.found_item
    );
}
