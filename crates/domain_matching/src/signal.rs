//! Individual match signals

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::MatchingConfig;

/// One piece of evidence that a lost and a found report describe the same item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchSignal {
    /// Lower-cased name tokens present in both names
    CommonKeywords(Vec<String>),
    SameCategory,
    SameColor,
    SameLocation,
    /// Found this many days from the date it was lost
    FoundWithinDays(i64),
}

impl MatchSignal {
    /// Points this signal contributes under the given weights
    pub fn points(&self, config: &MatchingConfig) -> u32 {
        match self {
            MatchSignal::CommonKeywords(tokens) => {
                config.keyword_points.saturating_mul(tokens.len() as u32)
            }
            MatchSignal::SameCategory => config.category_points,
            MatchSignal::SameColor => config.color_points,
            MatchSignal::SameLocation => config.location_points,
            MatchSignal::FoundWithinDays(_) => config.date_points,
        }
    }
}

impl fmt::Display for MatchSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchSignal::CommonKeywords(tokens) => {
                write!(f, "Common keywords: {}", tokens.join(", "))
            }
            MatchSignal::SameCategory => f.write_str("Same category"),
            MatchSignal::SameColor => f.write_str("Same color"),
            MatchSignal::SameLocation => f.write_str("Same location"),
            MatchSignal::FoundWithinDays(days) => write!(f, "Found within {} days", days),
        }
    }
}
