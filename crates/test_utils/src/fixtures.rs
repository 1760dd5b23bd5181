//! Pre-built Test Fixtures
//!
//! Ready-to-use, predictable test data shared across the test suite.

use chrono::NaiveDate;
use domain_claims::OwnershipProof;
use domain_items::PartyRef;

/// Fixture for report dates
pub struct DateFixtures;

impl DateFixtures {
    /// Date the reference backpack was lost (Jan 10, 2025)
    pub fn lost_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 10).expect("valid fixture date")
    }

    /// Two days later, inside the matching window
    pub fn found_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 12).expect("valid fixture date")
    }

    /// A month later, outside the matching window
    pub fn much_later() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 15).expect("valid fixture date")
    }

    /// Formats a date the way it is typed on a report
    pub fn text(date: NaiveDate) -> String {
        date.format(core_kernel::REPORT_DATE_FORMAT).to_string()
    }
}

/// Fixture for client identities
pub struct PartyFixtures;

impl PartyFixtures {
    /// Client who lost the reference backpack
    pub fn owner() -> PartyRef {
        PartyRef::new("asha", "Asha Rao", "555-0101")
    }

    /// Client who handed the backpack in
    pub fn finder() -> PartyRef {
        PartyRef::new("ben", "Ben Thomas", "555-0102")
    }
}

/// Fixture for ownership proof statements
pub struct ProofFixtures;

impl ProofFixtures {
    /// Exactly nine characters, one short of the minimum
    pub const TOO_SHORT: &'static str = "blue bag!";

    /// Exactly ten characters, the shortest accepted proof
    pub const SHORTEST_VALID: &'static str = "blue bag!!";

    /// A convincing statement
    pub fn detailed() -> OwnershipProof {
        OwnershipProof::new("Blue nylon backpack, torn left strap, initials AR on the inner tag")
            .expect("fixture proof is long enough")
    }
}
