//! # Store Messages
//!
//! The requests an [`ActorStore`](super::ActorStore) handle sends to a
//! [`StoreShard`](super::StoreShard). Each carries a oneshot sender the shard
//! answers on.

use super::{Mutation, StoreError};
use crate::resource::{Resource, ResourceId, ResourceKind};
use std::fmt;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by shards.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// The CRUD vocabulary of a shard.
///
/// - **Create**: insert a record under an id allocated by the handle.
/// - **Get**: clone out one record.
/// - **Update**: run a [`Mutation`] against one record and commit it on success.
/// - **Delete**: remove one record.
/// - **List**: clone out every record the shard owns.
pub enum StoreRequest<K: ResourceKind> {
    Create {
        id: ResourceId,
        attributes: K,
        status: K::Status,
        respond_to: Response<Resource<K>>,
    },
    Get {
        id: ResourceId,
        respond_to: Response<Resource<K>>,
    },
    Update {
        id: ResourceId,
        mutation: Mutation<K>,
        respond_to: Response<Resource<K>>,
    },
    Delete {
        id: ResourceId,
        respond_to: Response<()>,
    },
    List {
        respond_to: Response<Vec<Resource<K>>>,
    },
}

impl<K: ResourceKind> fmt::Debug for StoreRequest<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreRequest::Create {
                id,
                attributes,
                status,
                ..
            } => f
                .debug_struct("Create")
                .field("id", id)
                .field("attributes", attributes)
                .field("status", status)
                .finish_non_exhaustive(),
            StoreRequest::Get { id, .. } => {
                f.debug_struct("Get").field("id", id).finish_non_exhaustive()
            }
            StoreRequest::Update { id, .. } => {
                f.debug_struct("Update").field("id", id).finish_non_exhaustive()
            }
            StoreRequest::Delete { id, .. } => {
                f.debug_struct("Delete").field("id", id).finish_non_exhaustive()
            }
            StoreRequest::List { .. } => f.debug_struct("List").finish_non_exhaustive(),
        }
    }
}
