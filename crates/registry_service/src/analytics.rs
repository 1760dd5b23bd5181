//! Registry analytics
//!
//! Counts behind the administrator's summary report and charts. Rendering
//! them is up to the caller.

use std::collections::BTreeMap;

use serde::Serialize;

use domain_claims::{Claim, ClaimStatus};
use domain_items::{FoundItem, ItemCategory, LostItem};

/// Headline numbers and breakdowns for the whole registry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RegistrySummary {
    pub total_lost: usize,
    pub total_found: usize,
    pub total_clients: usize,
    pub open_cases: usize,
    pub closed_cases: usize,
    /// Claims still waiting for review
    pub pending_claims: usize,
    /// Claims verified but not yet collected
    pub verified_claims: usize,
    pub lost_by_category: BTreeMap<ItemCategory, usize>,
    pub found_by_category: BTreeMap<ItemCategory, usize>,
    pub claims_by_status: BTreeMap<ClaimStatus, usize>,
}

impl RegistrySummary {
    pub(crate) fn compute(
        lost_items: &[LostItem],
        found_items: &[FoundItem],
        claims: &[Claim],
        total_clients: usize,
    ) -> Self {
        let open_cases = lost_items.iter().filter(|item| item.is_open()).count();
        let claims_by_status = tally(claims.iter().map(|claim| claim.status));

        Self {
            total_lost: lost_items.len(),
            total_found: found_items.len(),
            total_clients,
            open_cases,
            closed_cases: lost_items.len() - open_cases,
            pending_claims: claims_by_status.get(&ClaimStatus::Submitted).copied().unwrap_or(0),
            verified_claims: claims_by_status.get(&ClaimStatus::Verified).copied().unwrap_or(0),
            lost_by_category: tally(lost_items.iter().map(|item| category_or_other(item.category))),
            found_by_category: tally(found_items.iter().map(|item| category_or_other(item.category))),
            claims_by_status,
        }
    }

    /// Total reports of either kind
    pub fn total_reports(&self) -> usize {
        self.total_lost + self.total_found
    }
}

fn category_or_other(category: Option<ItemCategory>) -> ItemCategory {
    category.unwrap_or(ItemCategory::Others)
}

fn tally<K: Ord>(keys: impl Iterator<Item = K>) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}
