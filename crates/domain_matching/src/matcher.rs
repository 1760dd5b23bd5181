//! Lost/found pair scoring and ranking

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use core_kernel::{days_between, FoundItemId, LostItemId};
use domain_items::{FoundItem, LostItem};
use crate::config::MatchingConfig;
use crate::signal::MatchSignal;

/// A scored pairing offered to an administrator for review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub lost_id: LostItemId,
    pub found_id: FoundItemId,
    pub lost_item_name: String,
    pub found_item_name: String,
    pub score: u32,
    /// One explanation per signal that scored, in rule order
    pub reasons: Vec<String>,
}

/// Score of a single pair together with the signals that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairScore {
    pub score: u32,
    pub signals: Vec<MatchSignal>,
}

/// Ranks lost/found pairings using a fixed set of weights
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatchingConfig,
}

impl Matcher {
    /// Creates a matcher with the given weights
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    /// Returns the weights in use
    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Produces the ranked list of plausible pairings
    ///
    /// Closed lost reports and claimed found reports never take part. Pairs
    /// are generated lost-major in store order, filtered by the minimum
    /// score, then stably sorted by score so equal scores keep generation
    /// order.
    pub fn find_matches(&self, lost_items: &[LostItem], found_items: &[FoundItem]) -> Vec<MatchCandidate> {
        let open_lost: Vec<&LostItem> = lost_items.iter().filter(|item| item.is_open()).collect();
        let available_found: Vec<&FoundItem> =
            found_items.iter().filter(|item| item.is_available()).collect();

        let mut matches = Vec::new();
        for lost in &open_lost {
            for found in &available_found {
                let pair = score_pair(lost, found, &self.config);
                if pair.score < self.config.min_score {
                    continue;
                }
                matches.push(MatchCandidate {
                    lost_id: lost.id,
                    found_id: found.id,
                    lost_item_name: lost.item_name.clone(),
                    found_item_name: found.item_name.clone(),
                    score: pair.score,
                    reasons: pair.signals.iter().map(ToString::to_string).collect(),
                });
            }
        }

        // Vec::sort_by is stable
        matches.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::debug!(
            lost_candidates = open_lost.len(),
            found_candidates = available_found.len(),
            matches = matches.len(),
            "Matched lost and found reports"
        );

        matches
    }
}

/// Ranks pairings with the default weights
pub fn find_matches(lost_items: &[LostItem], found_items: &[FoundItem]) -> Vec<MatchCandidate> {
    Matcher::default().find_matches(lost_items, found_items)
}

/// Scores one lost/found pair, ignoring statuses and the minimum score
///
/// Color and location compare case-insensitively after trimming; a blank or
/// absent value on either side never scores. The total saturates at
/// `u32::MAX` rather than overflowing under oversized weights.
pub fn score_pair(lost: &LostItem, found: &FoundItem, config: &MatchingConfig) -> PairScore {
    let mut signals = Vec::new();

    let common = common_keywords(&lost.item_name, &found.item_name);
    if !common.is_empty() {
        signals.push(MatchSignal::CommonKeywords(common));
    }

    if lost.category.is_some() && lost.category == found.category {
        signals.push(MatchSignal::SameCategory);
    }

    if same_text(lost.color.as_deref(), found.color.as_deref()) {
        signals.push(MatchSignal::SameColor);
    }

    if same_text(Some(&lost.location), Some(&found.location)) {
        signals.push(MatchSignal::SameLocation);
    }

    if let (Some(lost_on), Some(found_on)) = (lost.date_lost, found.date_found) {
        let gap = days_between(lost_on, found_on);
        if gap <= config.date_window_days {
            signals.push(MatchSignal::FoundWithinDays(gap));
        }
    }

    let score = signals
        .iter()
        .map(|s| s.points(config))
        .fold(0u32, u32::saturating_add);
    PairScore { score, signals }
}

/// Lower-cased tokens of `lost_name` that also occur in `found_name`, in
/// order of first appearance and without repeats
fn common_keywords(lost_name: &str, found_name: &str) -> Vec<String> {
    let found_tokens: HashSet<String> = found_name.split_whitespace().map(str::to_lowercase).collect();

    let mut seen = HashSet::new();
    lost_name
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|token| found_tokens.contains(token) && seen.insert(token.clone()))
        .collect()
}

/// Case-insensitive equality where an absent or blank value never matches
fn same_text(a: Option<&str>, b: Option<&str>) -> bool {
    match (a.map(str::trim), b.map(str::trim)) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => a.to_lowercase() == b.to_lowercase(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_keywords_dedupes_and_keeps_order() {
        assert_eq!(
            common_keywords("Blue blue Water Bottle", "bottle BLUE"),
            vec!["blue".to_string(), "bottle".to_string()]
        );
        assert!(common_keywords("Umbrella", "Raincoat").is_empty());
        assert!(common_keywords("", "Raincoat").is_empty());
    }

    #[test]
    fn test_same_text_treats_absent_and_blank_as_non_matching() {
        assert!(same_text(Some("Blue"), Some("blue")));
        assert!(!same_text(None, None));
        assert!(!same_text(Some(""), Some("")));
        assert!(!same_text(Some("Blue"), None));
        assert!(!same_text(Some("Blue"), Some("Navy")));
    }
}
