//! Registry Service
//!
//! The [`Registry`] is the single owner of the lost & found state: the four
//! record collections (lost reports, found reports, claims, clients) and the
//! four identifier sequences that number them. Client and administrator
//! operations go through it; matching and claim adjudication borrow its
//! collections.
//!
//! Persistence is left to the caller: take a [`RegistrySnapshot`] to save,
//! and [`Registry::restore`] one to continue a previous session.
//!
//! # Example
//!
//! ```rust
//! use registry_service::{NewClient, Registry};
//! use domain_items::{ItemCategory, ItemDetails};
//!
//! let mut registry = Registry::default();
//! let client = registry
//!     .register_client(NewClient::new("asha", "Asha Rao", "555-0101", "asha@campus.edu"))
//!     .unwrap();
//!
//! let details = ItemDetails::new("Blue Backpack", ItemCategory::Accessories).with_color("Blue");
//! registry.report_lost(client, details, "Library", Some("2025-01-10")).unwrap();
//!
//! assert_eq!(registry.summary().open_cases, 1);
//! ```

pub mod analytics;
pub mod client;
pub mod config;
pub mod error;
pub mod registry;
pub mod snapshot;

pub use analytics::RegistrySummary;
pub use client::{ClientAccount, NewClient};
pub use config::RegistryConfig;
pub use error::RegistryError;
pub use registry::{ClientReports, Registry};
pub use snapshot::RegistrySnapshot;
