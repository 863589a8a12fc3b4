//! # Resource Store
//!
//! [`ResourceStore`] is the persistence contract the service is written against.
//! Any durable key-value or relational store can satisfy it; the framework ships
//! [`ActorStore`], an in-memory store built from sharded actors.
//!
//! ## Atomic updates
//!
//! Updates are expressed as a [`Mutation`]: a closure the store runs against a
//! copy of the stored record. The copy is committed (and its `version` bumped)
//! only if the closure returns `Ok`; on `Err` the stored record is untouched and
//! the error comes back as [`StoreError::Rejected`]. Implementations must run the
//! closure and the commit as one step per id, so a check made inside the closure
//! (e.g. "is this transition legal from the current status?") cannot be
//! invalidated by a concurrent writer.

pub mod actor;
pub mod client;
pub mod message;

pub use actor::StoreShard;
pub use client::ActorStore;
pub use message::{Response, StoreRequest};

use crate::error::ResourceError;
use crate::resource::{Resource, ResourceId, ResourceKind};
use async_trait::async_trait;

/// Mutation applied atomically to a single stored record.
pub type Mutation<K> = Box<dyn FnOnce(&mut Resource<K>) -> Result<(), ResourceError> + Send>;

/// Errors raised by a store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store shard closed")]
    ActorClosed,
    #[error("Store shard dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(ResourceId),
    #[error("Mutation rejected: {0}")]
    Rejected(#[source] ResourceError),
}

#[async_trait]
pub trait ResourceStore<K: ResourceKind>: Send + Sync + 'static {
    /// Assigns a fresh id and stores the record with the given status.
    async fn create(&self, attributes: K, status: K::Status) -> Result<Resource<K>, StoreError>;

    async fn get(&self, id: ResourceId) -> Result<Resource<K>, StoreError>;

    /// Applies `mutation` atomically and returns the committed record.
    async fn update(&self, id: ResourceId, mutation: Mutation<K>)
        -> Result<Resource<K>, StoreError>;

    /// Hard delete. The id is not reused.
    async fn delete(&self, id: ResourceId) -> Result<(), StoreError>;

    /// Every record, ordered by id. Each record is internally consistent, but
    /// the list is not a snapshot of the whole collection.
    async fn list_all(&self) -> Result<Vec<Resource<K>>, StoreError>;
}
