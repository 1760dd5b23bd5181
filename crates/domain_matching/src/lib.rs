//! Matching Domain
//!
//! Pairs open lost reports with available found reports and ranks the pairs
//! for an administrator to review. Matching never changes either collection
//! and never resolves a pair on its own.
//!
//! # Scoring
//!
//! ```text
//! shared name keywords  30 each
//! same category         25
//! same color            20
//! same location         15
//! dates within 7 days   15
//! ---------------------------
//! pairs below 40 are dropped
//! ```

pub mod config;
pub mod signal;
pub mod matcher;

pub use config::MatchingConfig;
pub use signal::MatchSignal;
pub use matcher::{find_matches, score_pair, MatchCandidate, Matcher, PairScore};
