//! Matching weights and thresholds

use serde::{Deserialize, Serialize};

/// Points awarded per signal and the cut-off for keeping a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Points per keyword shared by both item names
    pub keyword_points: u32,
    /// Points for the same category
    pub category_points: u32,
    /// Points for the same color
    pub color_points: u32,
    /// Points for the same location
    pub location_points: u32,
    /// Points for dates no more than `date_window_days` apart
    pub date_points: u32,
    /// Widest gap between lost and found dates that still scores
    pub date_window_days: i64,
    /// Lowest score a pair needs to be reported
    pub min_score: u32,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            keyword_points: 30,
            category_points: 25,
            color_points: 20,
            location_points: 15,
            date_points: 15,
            date_window_days: 7,
            min_score: 40,
        }
    }
}
