//! Claims Domain
//!
//! This crate implements ownership claims against found items, from the
//! client's submission through administrator adjudication to collection.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Submitted -> Verified -> ReadyForCollection -> Collected
//!           \-> NotVerified
//!           \-> Rejected
//! ```
//!
//! The administrator may move a claim to any non-initial state at any time.
//! Only `Collected` touches the found item, which becomes claimed.

pub mod claim;
pub mod proof;
pub mod lifecycle;
pub mod error;

pub use claim::{Claim, ClaimStatus};
pub use proof::{OwnershipProof, MIN_PROOF_LENGTH};
pub use lifecycle::{apply_status_update, FoundItemOutcome, StatusChange, StatusUpdate};
pub use error::ClaimError;
