//! Core Kernel - Foundational types shared by the lost & found domains
//!
//! This crate provides the building blocks used across all domain modules:
//! - Integer identifiers for the lost, found, claim and client namespaces
//! - Monotonic id sequences that resume after a reload
//! - Report-date parsing and day arithmetic
//! - The common error type

pub mod identifiers;
pub mod temporal;
pub mod error;

pub use identifiers::{LostItemId, FoundItemId, ClaimId, ClientId, IdSequence, SequentialId};
pub use temporal::{parse_report_date, resolve_report_date, days_between, REPORT_DATE_FORMAT};
pub use error::CoreError;
