//! Tests for item reports and registry search

use chrono::NaiveDate;

use core_kernel::{FoundItemId, LostItemId};
use domain_items::{
    FoundItem, FoundItemStatus, ItemCategory, ItemDetails, ItemQuery, LostItem, LostItemStatus,
    PartyRef,
};

fn reporter() -> PartyRef {
    PartyRef::new("ravi", "Ravi Kumar", "555-0199")
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
}

fn lost(id: u64, name: &str, category: ItemCategory, color: &str) -> LostItem {
    let details = ItemDetails::new(name, category).with_color(color);
    LostItem::report(LostItemId::new(id), details, "Library", date(), reporter())
}

fn found(id: u64, name: &str, category: ItemCategory, color: &str) -> FoundItem {
    let details = ItemDetails::new(name, category).with_color(color);
    FoundItem::report(FoundItemId::new(id), details, "Library", date(), reporter())
}

fn sample_registry() -> (Vec<LostItem>, Vec<FoundItem>) {
    let mut lost_items = vec![
        lost(1, "Blue Backpack", ItemCategory::Accessories, "Blue"),
        lost(2, "Black Wallet", ItemCategory::Accessories, "Black"),
        lost(3, "Physics Textbook", ItemCategory::Books, "Red"),
    ];
    lost_items[1].close();

    let mut found_items = vec![
        found(1, "Blue Bag", ItemCategory::Accessories, "Blue"),
        found(2, "Wallet", ItemCategory::Accessories, "black"),
        found(3, "Laptop Charger", ItemCategory::Electronics, "White"),
    ];
    found_items[2].mark_claimed();

    (lost_items, found_items)
}

mod search_tests {
    use super::*;

    #[test]
    fn test_keyword_search_skips_closed_and_claimed() {
        let (lost_items, found_items) = sample_registry();

        let results = ItemQuery::Keyword("WALLET".to_string()).run(&lost_items, &found_items);

        assert!(results.lost.is_empty());
        assert_eq!(results.found.len(), 1);
        assert_eq!(results.found[0].id, FoundItemId::new(2));
    }

    #[test]
    fn test_keyword_search_matches_substrings() {
        let (lost_items, found_items) = sample_registry();

        let results = ItemQuery::Keyword("ba".to_string()).run(&lost_items, &found_items);

        assert_eq!(results.lost.len(), 1);
        assert_eq!(results.found.len(), 1);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_category_search_covers_both_collections() {
        let (lost_items, found_items) = sample_registry();

        let results = ItemQuery::Category(ItemCategory::Accessories).run(&lost_items, &found_items);

        assert_eq!(results.lost.iter().map(|i| i.id).collect::<Vec<_>>(), vec![LostItemId::new(1)]);
        assert_eq!(
            results.found.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![FoundItemId::new(1), FoundItemId::new(2)]
        );
    }

    #[test]
    fn test_color_search_only_returns_found_items() {
        let (lost_items, found_items) = sample_registry();

        let results = ItemQuery::Color("Black".to_string()).run(&lost_items, &found_items);

        assert!(results.lost.is_empty());
        assert_eq!(results.found.len(), 1);
    }

    #[test]
    fn test_available_listing() {
        let (lost_items, found_items) = sample_registry();

        let results = ItemQuery::Available.run(&lost_items, &found_items);

        assert_eq!(results.found.len(), 2);
        assert!(results.found.iter().all(|i| i.status == FoundItemStatus::Available));
    }

    #[test]
    fn test_empty_registry_yields_nothing() {
        let results = ItemQuery::Keyword("anything".to_string()).run(&[], &[]);
        assert!(results.is_empty());
    }
}

mod record_tests {
    use super::*;

    #[test]
    fn test_statuses_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&LostItemStatus::Open).unwrap(), "\"open\"");
        assert_eq!(serde_json::to_string(&FoundItemStatus::Claimed).unwrap(), "\"claimed\"");
    }

    #[test]
    fn test_report_keeps_questionnaire_answers() {
        let details = ItemDetails::new("Casio Watch", ItemCategory::Accessories)
            .with_color("Silver")
            .with_material("Metal")
            .with_batch_id("A-77");
        let item = FoundItem::report(FoundItemId::new(4), details, "Canteen", date(), reporter());

        assert_eq!(item.item_name, "Casio Watch");
        assert_eq!(item.color.as_deref(), Some("Silver"));
        assert_eq!(item.batch_id.as_deref(), Some("A-77"));
        assert_eq!(item.finder.username, "ravi");
        assert!(item.description.contains("Batch/ID: A-77"));
    }

    #[test]
    fn test_usernames_compare_with_unicode_case_folding() {
        let party = PartyRef::new("Émile", "Émile Roy", "555-0120");

        assert!(party.is_user("émile"));
        assert!(party.is_user("ÉMILE"));
        assert!(!party.is_user("emile"));
    }

    #[test]
    fn test_color_search_folds_non_ascii_case() {
        let found_items = vec![found(1, "Scarf", ItemCategory::Clothing, "Écru")];

        let results = ItemQuery::Color("ÉCRU".to_string()).run(&[], &found_items);

        assert_eq!(results.found.len(), 1);
    }
}
