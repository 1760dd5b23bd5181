//! Lost and found report records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{FoundItemId, LostItemId};
use crate::category::ItemCategory;
use crate::details::ItemDetails;
use crate::error::ItemError;

/// Status of a lost report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LostItemStatus {
    /// Still being looked for
    Open,
    /// Case closed by an administrator
    Closed,
}

/// Status of a found report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoundItemStatus {
    /// Waiting for its owner
    Available,
    /// Collected by a verified claimant
    Claimed,
}

impl LostItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LostItemStatus::Open => "open",
            LostItemStatus::Closed => "closed",
        }
    }
}

impl FoundItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoundItemStatus::Available => "available",
            FoundItemStatus::Claimed => "claimed",
        }
    }
}

impl fmt::Display for LostItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FoundItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LostItemStatus {
    type Err = ItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(LostItemStatus::Open),
            "closed" => Ok(LostItemStatus::Closed),
            other => Err(ItemError::UnknownStatus(other.to_string())),
        }
    }
}

impl FromStr for FoundItemStatus {
    type Err = ItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(FoundItemStatus::Available),
            "claimed" => Ok(FoundItemStatus::Claimed),
            other => Err(ItemError::UnknownStatus(other.to_string())),
        }
    }
}

/// Identity of the client who filed a report or claim
///
/// Copied onto the record at filing time so listings do not need to join
/// against the client collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyRef {
    pub username: String,
    pub name: String,
    pub contact: String,
}

impl PartyRef {
    pub fn new(
        username: impl Into<String>,
        name: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            name: name.into(),
            contact: contact.into(),
        }
    }

    /// Returns true if this is the given user (usernames compare case-insensitively)
    pub fn is_user(&self, username: &str) -> bool {
        self.username.to_lowercase() == username.trim().to_lowercase()
    }
}

/// An item a client has lost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LostItem {
    /// Unique identifier
    pub id: LostItemId,
    /// Item name
    pub item_name: String,
    /// Category
    pub category: Option<ItemCategory>,
    /// Color
    pub color: Option<String>,
    /// Material
    pub material: String,
    /// Batch/serial number
    pub batch_id: Option<String>,
    /// Free-form notes
    pub additional_notes: Option<String>,
    /// One-line listing description
    pub description: String,
    /// Where the item was lost
    pub location: String,
    /// When the item was lost; `None` if the stored date could not be read
    pub date_lost: Option<NaiveDate>,
    /// Status
    pub status: LostItemStatus,
    /// Reporting client
    pub reporter: PartyRef,
}

impl LostItem {
    /// Files a new open lost report
    pub fn report(
        id: LostItemId,
        details: ItemDetails,
        location: impl Into<String>,
        date_lost: NaiveDate,
        reporter: PartyRef,
    ) -> Self {
        let description = details.description();
        Self {
            id,
            item_name: details.item_name,
            category: details.category,
            color: details.color,
            material: details.material,
            batch_id: details.batch_id,
            additional_notes: details.additional_notes,
            description,
            location: location.into().trim().to_string(),
            date_lost: Some(date_lost),
            status: LostItemStatus::Open,
            reporter,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == LostItemStatus::Open
    }

    /// Closes the case. Returns false if it was already closed.
    pub fn close(&mut self) -> bool {
        if self.status == LostItemStatus::Closed {
            return false;
        }
        self.status = LostItemStatus::Closed;
        true
    }
}

/// An item a client has found and handed in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundItem {
    /// Unique identifier
    pub id: FoundItemId,
    /// Item name
    pub item_name: String,
    /// Category
    pub category: Option<ItemCategory>,
    /// Color
    pub color: Option<String>,
    /// Material
    pub material: String,
    /// Batch/serial number
    pub batch_id: Option<String>,
    /// Free-form notes
    pub additional_notes: Option<String>,
    /// One-line listing description
    pub description: String,
    /// Where the item was found
    pub location: String,
    /// When the item was found; `None` if the stored date could not be read
    pub date_found: Option<NaiveDate>,
    /// Status
    pub status: FoundItemStatus,
    /// Client who handed the item in
    pub finder: PartyRef,
}

impl FoundItem {
    /// Files a new available found report
    pub fn report(
        id: FoundItemId,
        details: ItemDetails,
        location: impl Into<String>,
        date_found: NaiveDate,
        finder: PartyRef,
    ) -> Self {
        let description = details.description();
        Self {
            id,
            item_name: details.item_name,
            category: details.category,
            color: details.color,
            material: details.material,
            batch_id: details.batch_id,
            additional_notes: details.additional_notes,
            description,
            location: location.into().trim().to_string(),
            date_found: Some(date_found),
            status: FoundItemStatus::Available,
            finder,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == FoundItemStatus::Available
    }

    /// Marks the item as handed over. Returns false if it already was.
    pub fn mark_claimed(&mut self) -> bool {
        if self.status == FoundItemStatus::Claimed {
            return false;
        }
        self.status = FoundItemStatus::Claimed;
        true
    }
}
