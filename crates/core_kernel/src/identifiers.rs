//! Strongly-typed identifiers for registry entities
//!
//! Every namespace (lost reports, found reports, claims, clients) hands out
//! its own integers starting at 1. Newtype wrappers keep the namespaces from
//! being mixed up, and [`IdSequence`] replaces a process-wide counter with a
//! value owned by whoever owns the collection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::error::CoreError;

/// An identifier drawn from a monotonic integer sequence
pub trait SequentialId: Copy + Ord {
    /// Wraps a raw sequence value
    fn from_value(value: u64) -> Self;

    /// Returns the raw sequence value
    fn value(self) -> u64;
}

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates an identifier from its raw value
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the raw value
            pub const fn get(&self) -> u64 {
                self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl SequentialId for $name {
            fn from_value(value: u64) -> Self {
                Self(value)
            }

            fn value(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            /// Accepts either the bare number or the prefixed display form
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                let digits = match trimmed.split_once('-') {
                    Some((prefix, rest)) if prefix.eq_ignore_ascii_case($prefix) => rest,
                    _ => trimmed,
                };
                digits.parse::<u64>().map(Self).map_err(|_| {
                    CoreError::invalid_input(format!(
                        "'{}' is not a valid {} identifier",
                        trimmed,
                        stringify!($name)
                    ))
                })
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.0
            }
        }
    };
}

define_id!(LostItemId, "LOST");
define_id!(FoundItemId, "FOUND");
define_id!(ClaimId, "CLAIM");
define_id!(ClientId, "CLIENT");

/// Monotonic allocator for one identifier namespace
///
/// A fresh sequence starts at 1. After a reload the sequence resumes at
/// `max(existing) + 1`, so identifiers stay unique across sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence<T> {
    next: u64,
    _marker: PhantomData<T>,
}

impl<T: SequentialId> IdSequence<T> {
    /// Creates a sequence whose first identifier is 1
    pub fn new() -> Self {
        Self {
            next: 1,
            _marker: PhantomData,
        }
    }

    /// Creates a sequence that continues after the largest existing identifier
    pub fn resume_after<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let next = existing
            .into_iter()
            .map(SequentialId::value)
            .max()
            .map_or(1, |max| max + 1);
        Self {
            next,
            _marker: PhantomData,
        }
    }

    /// Returns the identifier the next call to [`IdSequence::allocate`] yields
    pub fn peek(&self) -> T {
        T::from_value(self.next)
    }

    /// Hands out the next identifier and advances the sequence
    pub fn allocate(&mut self) -> T {
        let id = T::from_value(self.next);
        self.next += 1;
        id
    }
}

impl<T: SequentialId> Default for IdSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}
