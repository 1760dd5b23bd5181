//! Item categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ItemError;

/// The fixed set of categories an item can be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemCategory {
    Electronics,
    Clothing,
    Documents,
    Books,
    Accessories,
    Others,
}

impl ItemCategory {
    /// All categories in questionnaire order
    pub const ALL: [ItemCategory; 6] = [
        ItemCategory::Electronics,
        ItemCategory::Clothing,
        ItemCategory::Documents,
        ItemCategory::Books,
        ItemCategory::Accessories,
        ItemCategory::Others,
    ];

    /// Maps a questionnaire choice (`a`-`f`) to a category
    ///
    /// Anything that is not one of the listed choices files the item under
    /// [`ItemCategory::Others`].
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim().to_ascii_lowercase().as_str() {
            "a" => ItemCategory::Electronics,
            "b" => ItemCategory::Clothing,
            "c" => ItemCategory::Documents,
            "d" => ItemCategory::Books,
            "e" => ItemCategory::Accessories,
            _ => ItemCategory::Others,
        }
    }

    /// Returns the display name
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Electronics => "Electronics",
            ItemCategory::Clothing => "Clothing",
            ItemCategory::Documents => "Documents",
            ItemCategory::Books => "Books",
            ItemCategory::Accessories => "Accessories",
            ItemCategory::Others => "Others",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemCategory {
    type Err = ItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ItemCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ItemError::UnknownCategory(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_mapping() {
        assert_eq!(ItemCategory::from_choice("a"), ItemCategory::Electronics);
        assert_eq!(ItemCategory::from_choice("E"), ItemCategory::Accessories);
        assert_eq!(ItemCategory::from_choice("f"), ItemCategory::Others);
        assert_eq!(ItemCategory::from_choice("z"), ItemCategory::Others);
        assert_eq!(ItemCategory::from_choice(""), ItemCategory::Others);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("electronics".parse::<ItemCategory>().unwrap(), ItemCategory::Electronics);
        assert_eq!(" BOOKS ".parse::<ItemCategory>().unwrap(), ItemCategory::Books);
        assert!("furniture".parse::<ItemCategory>().is_err());
    }
}
