//! Standard item questionnaire
//!
//! Both lost and found reports are filed through the same set of questions.
//! The answers are kept individually and also folded into a one-line
//! description that is shown wherever the item is listed.

use serde::{Deserialize, Serialize};

use crate::category::ItemCategory;
use crate::error::ItemError;

/// Placeholder stored for optional answers that were skipped
pub const NOT_PROVIDED: &str = "N/A";

/// Answers to the item questionnaire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetails {
    /// Item name, e.g. "Blue Backpack"
    pub item_name: String,
    /// Category, if one was chosen
    pub category: Option<ItemCategory>,
    /// Color, if one was given
    pub color: Option<String>,
    /// Material
    pub material: String,
    /// Batch, ID or serial number
    pub batch_id: Option<String>,
    /// Free-form notes
    pub additional_notes: Option<String>,
}

impl ItemDetails {
    /// Starts a questionnaire with the item name and category
    pub fn new(item_name: impl Into<String>, category: ItemCategory) -> Self {
        Self {
            item_name: item_name.into().trim().to_string(),
            category: Some(category),
            color: None,
            material: String::new(),
            batch_id: None,
            additional_notes: None,
        }
    }

    /// Sets the color; blank answers are recorded as absent
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = non_blank(color.into());
        self
    }

    /// Sets the material
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = material.into().trim().to_string();
        self
    }

    /// Sets the batch/serial number; blank answers are recorded as absent
    pub fn with_batch_id(mut self, batch_id: impl Into<String>) -> Self {
        self.batch_id = non_blank(batch_id.into());
        self
    }

    /// Sets the additional notes; blank answers are recorded as absent
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.additional_notes = non_blank(notes.into());
        self
    }

    /// Checks the answers that every report needs
    pub fn validate(&self) -> Result<(), ItemError> {
        if self.item_name.trim().is_empty() {
            return Err(ItemError::EmptyName);
        }
        Ok(())
    }

    /// Batch/serial number, or `N/A` when skipped
    pub fn batch_id_or_default(&self) -> &str {
        self.batch_id.as_deref().unwrap_or(NOT_PROVIDED)
    }

    /// Notes, or `N/A` when skipped
    pub fn notes_or_default(&self) -> &str {
        self.additional_notes.as_deref().unwrap_or(NOT_PROVIDED)
    }

    /// Folds the answers into the one-line listing description
    pub fn description(&self) -> String {
        let category = self.category.unwrap_or(ItemCategory::Others);
        let mut description = format!(
            "Category: {}, Color: {}, Material: {}, Batch/ID: {}",
            category,
            self.color.as_deref().unwrap_or(""),
            self.material,
            self.batch_id_or_default(),
        );
        if let Some(notes) = &self.additional_notes {
            description.push_str(", Notes: ");
            description.push_str(notes);
        }
        description
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
