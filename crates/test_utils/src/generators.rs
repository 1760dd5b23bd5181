//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random reports that keep
//! the record invariants (unique ids per namespace, valid dates).

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use domain_claims::ClaimStatus;
use domain_items::{FoundItem, ItemCategory, LostItem};

use crate::builders::{FoundItemBuilder, LostItemBuilder};

/// A small vocabulary so that generated names actually overlap
const WORDS: &[&str] = &["blue", "black", "bag", "phone", "wallet", "keys", "book", "laptop"];
const COLORS: &[&str] = &["Blue", "blue", "Black", "Red"];
const LOCATIONS: &[&str] = &["Library", "library", "Cafeteria", "Gym"];

/// Strategy for generating category values, including absent ones
pub fn category_strategy() -> impl Strategy<Value = Option<ItemCategory>> {
    prop_oneof![
        Just(None),
        proptest::sample::select(ItemCategory::ALL.to_vec()).prop_map(Some),
    ]
}

/// Strategy for generating item names of one to three words
pub fn item_name_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(WORDS.to_vec()), 1..=3)
        .prop_map(|words| words.join(" "))
}

/// Strategy for generating colors, including absent ones
pub fn color_strategy() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![Just(None), proptest::sample::select(COLORS.to_vec()).prop_map(Some)]
}

/// Strategy for generating locations
pub fn location_strategy() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(LOCATIONS.to_vec())
}

/// Strategy for generating report dates within a few weeks, including absent ones
pub fn report_date_strategy() -> impl Strategy<Value = Option<NaiveDate>> {
    let base = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid base date");
    prop_oneof![
        1 => Just(None),
        4 => (0i64..30).prop_map(move |offset| Some(base + Duration::days(offset))),
    ]
}

/// Strategy for generating claim statuses
pub fn claim_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    proptest::sample::select(ClaimStatus::ALL.to_vec())
}

/// Strategy for generating lost reports with sequential ids
pub fn lost_items_strategy(max: usize) -> impl Strategy<Value = Vec<LostItem>> {
    proptest::collection::vec(
        (
            item_name_strategy(),
            category_strategy(),
            color_strategy(),
            location_strategy(),
            report_date_strategy(),
            any::<bool>(),
        ),
        0..=max,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (name, category, color, location, date, closed))| {
                let builder = LostItemBuilder::new()
                    .with_id(index as u64 + 1)
                    .with_name(name)
                    .with_category(category)
                    .with_color(color)
                    .with_location(location)
                    .with_date(date);
                let builder = if closed { builder.closed() } else { builder };
                builder.build()
            })
            .collect()
    })
}

/// Strategy for generating found reports with sequential ids
pub fn found_items_strategy(max: usize) -> impl Strategy<Value = Vec<FoundItem>> {
    proptest::collection::vec(
        (
            item_name_strategy(),
            category_strategy(),
            color_strategy(),
            location_strategy(),
            report_date_strategy(),
            any::<bool>(),
        ),
        0..=max,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (name, category, color, location, date, claimed))| {
                let builder = FoundItemBuilder::new()
                    .with_id(index as u64 + 1)
                    .with_name(name)
                    .with_category(category)
                    .with_color(color)
                    .with_location(location)
                    .with_date(date);
                let builder = if claimed { builder.claimed() } else { builder };
                builder.build()
            })
            .collect()
    })
}
