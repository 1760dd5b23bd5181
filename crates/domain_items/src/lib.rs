//! Item Domain
//!
//! This crate models the two report collections of the lost & found
//! registry: items clients have lost and items clients have found and handed
//! in. It also carries the standard item questionnaire and the client-facing
//! search over both collections.
//!
//! # Report Lifecycle
//!
//! ```text
//! Lost:  Open -> Closed
//! Found: Available -> Claimed
//! ```
//!
//! Reports are never deleted; statuses only move forward.

pub mod category;
pub mod details;
pub mod item;
pub mod search;
pub mod error;

pub use category::ItemCategory;
pub use details::ItemDetails;
pub use item::{FoundItem, FoundItemStatus, LostItem, LostItemStatus, PartyRef};
pub use search::{ItemQuery, SearchResults};
pub use error::ItemError;
