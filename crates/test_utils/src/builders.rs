//! Test Data Builders
//!
//! Builder patterns for constructing reports and claims with sensible
//! defaults, so tests only spell out the fields they care about.

use chrono::NaiveDate;
use core_kernel::{ClaimId, FoundItemId, LostItemId};
use domain_claims::{Claim, ClaimStatus, OwnershipProof};
use domain_items::{FoundItem, ItemCategory, ItemDetails, LostItem, PartyRef};

use crate::fixtures::{DateFixtures, PartyFixtures, ProofFixtures};

/// Builder for lost reports; defaults describe the reference blue backpack
pub struct LostItemBuilder {
    id: LostItemId,
    details: ItemDetails,
    location: String,
    date_lost: Option<NaiveDate>,
    closed: bool,
    reporter: PartyRef,
}

impl Default for LostItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LostItemBuilder {
    pub fn new() -> Self {
        Self {
            id: LostItemId::new(1),
            details: ItemDetails::new("Blue Backpack", ItemCategory::Accessories)
                .with_color("Blue")
                .with_material("Nylon"),
            location: "Library".to_string(),
            date_lost: Some(DateFixtures::lost_on()),
            closed: false,
            reporter: PartyFixtures::owner(),
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = LostItemId::new(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.details.item_name = name.into();
        self
    }

    pub fn with_category(mut self, category: Option<ItemCategory>) -> Self {
        self.details.category = category;
        self
    }

    pub fn with_color(mut self, color: Option<&str>) -> Self {
        self.details.color = color.map(str::to_string);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_date(mut self, date: Option<NaiveDate>) -> Self {
        self.date_lost = date;
        self
    }

    pub fn closed(mut self) -> Self {
        self.closed = true;
        self
    }

    pub fn with_reporter(mut self, reporter: PartyRef) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn build(self) -> LostItem {
        let mut item = LostItem::report(
            self.id,
            self.details,
            self.location,
            DateFixtures::lost_on(),
            self.reporter,
        );
        item.date_lost = self.date_lost;
        if self.closed {
            item.close();
        }
        item
    }
}

/// Builder for found reports; defaults describe a blue bag that matches the
/// reference backpack
pub struct FoundItemBuilder {
    id: FoundItemId,
    details: ItemDetails,
    location: String,
    date_found: Option<NaiveDate>,
    claimed: bool,
    finder: PartyRef,
}

impl Default for FoundItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FoundItemBuilder {
    pub fn new() -> Self {
        Self {
            id: FoundItemId::new(1),
            details: ItemDetails::new("Blue Bag", ItemCategory::Accessories)
                .with_color("Blue")
                .with_material("Nylon"),
            location: "Library".to_string(),
            date_found: Some(DateFixtures::found_on()),
            claimed: false,
            finder: PartyFixtures::finder(),
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = FoundItemId::new(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.details.item_name = name.into();
        self
    }

    pub fn with_category(mut self, category: Option<ItemCategory>) -> Self {
        self.details.category = category;
        self
    }

    pub fn with_color(mut self, color: Option<&str>) -> Self {
        self.details.color = color.map(str::to_string);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_date(mut self, date: Option<NaiveDate>) -> Self {
        self.date_found = date;
        self
    }

    pub fn claimed(mut self) -> Self {
        self.claimed = true;
        self
    }

    pub fn build(self) -> FoundItem {
        let mut item = FoundItem::report(
            self.id,
            self.details,
            self.location,
            DateFixtures::found_on(),
            self.finder,
        );
        item.date_found = self.date_found;
        if self.claimed {
            item.mark_claimed();
        }
        item
    }
}

/// Builder for claims
pub struct ClaimBuilder {
    id: ClaimId,
    found_item_id: FoundItemId,
    claimant: PartyRef,
    proof: OwnershipProof,
    status: ClaimStatus,
    claim_date: NaiveDate,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    pub fn new() -> Self {
        Self {
            id: ClaimId::new(1),
            found_item_id: FoundItemId::new(1),
            claimant: PartyFixtures::owner(),
            proof: ProofFixtures::detailed(),
            status: ClaimStatus::Submitted,
            claim_date: DateFixtures::found_on(),
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = ClaimId::new(id);
        self
    }

    pub fn for_found_item(mut self, id: u64) -> Self {
        self.found_item_id = FoundItemId::new(id);
        self
    }

    pub fn with_claimant(mut self, claimant: PartyRef) -> Self {
        self.claimant = claimant;
        self
    }

    /// Stored status, as if loaded from a previous session
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    pub fn build(self) -> Claim {
        let mut claim = Claim::submit(
            self.id,
            self.found_item_id,
            self.claimant,
            self.proof,
            self.claim_date,
        );
        claim.status = self.status;
        claim
    }
}
