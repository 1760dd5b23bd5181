//! Client-facing registry search
//!
//! Searches only ever surface reports that are still actionable: open lost
//! reports and available found reports.

use crate::category::ItemCategory;
use crate::item::{FoundItem, LostItem};

/// A search a client can run against the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemQuery {
    /// Case-insensitive substring of the item name
    Keyword(String),
    /// Exact category
    Category(ItemCategory),
    /// Case-insensitive color; only found reports are searched
    Color(String),
    /// Every available found report
    Available,
}

/// Reports matching a query, in store order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResults<'a> {
    pub lost: Vec<&'a LostItem>,
    pub found: Vec<&'a FoundItem>,
}

impl SearchResults<'_> {
    pub fn is_empty(&self) -> bool {
        self.lost.is_empty() && self.found.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lost.len() + self.found.len()
    }
}

impl ItemQuery {
    /// Runs the query over both collections
    pub fn run<'a>(&self, lost: &'a [LostItem], found: &'a [FoundItem]) -> SearchResults<'a> {
        let open_lost = lost.iter().filter(|item| item.is_open());
        let available_found = found.iter().filter(|item| item.is_available());

        match self {
            ItemQuery::Keyword(keyword) => {
                let needle = keyword.trim().to_lowercase();
                SearchResults {
                    lost: open_lost
                        .filter(|item| item.item_name.to_lowercase().contains(&needle))
                        .collect(),
                    found: available_found
                        .filter(|item| item.item_name.to_lowercase().contains(&needle))
                        .collect(),
                }
            }
            ItemQuery::Category(category) => SearchResults {
                lost: open_lost.filter(|item| item.category == Some(*category)).collect(),
                found: available_found
                    .filter(|item| item.category == Some(*category))
                    .collect(),
            },
            ItemQuery::Color(color) => {
                let wanted = color.trim().to_lowercase();
                SearchResults {
                    lost: Vec::new(),
                    found: available_found
                        .filter(|item| {
                            item.color
                                .as_deref()
                                .is_some_and(|c| c.to_lowercase() == wanted)
                        })
                        .collect(),
                }
            }
            ItemQuery::Available => SearchResults {
                lost: Vec::new(),
                found: available_found.collect(),
            },
        }
    }
}
