//! # Resources
//!
//! A [`Resource`] is an addressable record: a store-assigned [`ResourceId`], a set of
//! mutable attributes, and a status drawn from a closed [`Lifecycle`].
//!
//! The attribute type doubles as the "kind" of the resource. Implementing
//! [`ResourceKind`] for a plain struct (e.g. `Order`) tells the framework how to
//! name it, where its collection lives, which lifecycle governs it and how to
//! validate incoming attributes. Everything else (storage, links, transitions)
//! is written once, generically over `K: ResourceKind`.

use crate::state_machine::Lifecycle;
use std::fmt::{self, Debug, Display};

/// Store-assigned identifier.
///
/// Ids come from a single monotonic counter and are never reused, even after
/// the resource they named has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(pub u64);

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A malformed attribute on create or update.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }

    /// The field is present but empty or whitespace.
    pub fn blank(field: &'static str) -> Self {
        Self::new(field, "must not be blank")
    }

    /// The field is absent.
    pub fn missing(field: &'static str) -> Self {
        Self::new(field, "is required")
    }
}

/// Contract every attribute type implements to be managed by the framework.
///
/// # Associated Items
/// - `Status`: the closed set of statuses and its transition table.
/// - `NAME`: singular name used in errors and logs (`"order"`).
/// - `COLLECTION`: path segment and relation name of the aggregate root (`"orders"`).
///
/// `validate` runs before every create and update; a resource whose attributes
/// fail validation never reaches the store.
pub trait ResourceKind: Clone + Debug + PartialEq + Send + Sync + 'static {
    type Status: Lifecycle;

    const NAME: &'static str;

    const COLLECTION: &'static str;

    fn validate(&self) -> Result<(), ValidationError>;
}

/// Checks that a string attribute carries at least one non-whitespace character.
pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::blank(field));
    }
    Ok(())
}

/// A stored record.
///
/// `version` starts at 1 and is bumped by the store on every committed
/// mutation. It never influences which transitions are legal.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<K: ResourceKind> {
    pub id: ResourceId,
    pub attributes: K,
    pub status: K::Status,
    pub version: u64,
}

impl<K: ResourceKind> Resource<K> {
    pub fn new(id: ResourceId, attributes: K, status: K::Status) -> Self {
        Self {
            id,
            attributes,
            status,
            version: 1,
        }
    }
}
