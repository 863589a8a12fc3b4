//! # Actor Store Handle
//!
//! `ActorStore<K>` is the client half of the sharded store. It allocates ids,
//! routes each request to the shard that owns the id (`id % shard_count`) and waits
//! for the answer on a oneshot channel. The handle is cheap to clone: it holds only
//! the shard senders and the shared id counter.
//!
//! ```rust,ignore
//! let (store, handles) = ActorStore::<Order>::spawn(4, 32);
//! let order = store.create(Order::new("iPhone"), OrderStatus::InProgress).await?;
//! drop(store); // closing every handle stops the shards
//! for handle in handles { handle.await?; }
//! ```

use super::actor::StoreShard;
use super::message::{Response, StoreRequest};
use super::{Mutation, ResourceStore, StoreError};
use crate::resource::{Resource, ResourceId, ResourceKind};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

pub struct ActorStore<K: ResourceKind> {
    shards: Arc<[mpsc::Sender<StoreRequest<K>>]>,
    next_id: Arc<AtomicU64>,
}

impl<K: ResourceKind> Clone for ActorStore<K> {
    fn clone(&self) -> Self {
        Self {
            shards: Arc::clone(&self.shards),
            next_id: Arc::clone(&self.next_id),
        }
    }
}

impl<K: ResourceKind> ActorStore<K> {
    /// Creates `shard_count` shards (at least one) and a handle routing to them.
    ///
    /// The shards do nothing until their `run()` futures are spawned.
    pub fn new(shard_count: usize, buffer_size: usize) -> (Self, Vec<StoreShard<K>>) {
        let (shards, senders): (Vec<_>, Vec<_>) = (0..shard_count.max(1))
            .map(|index| StoreShard::new(index, buffer_size))
            .unzip();
        (Self::from_senders(senders), shards)
    }

    /// Creates the shards and spawns each one on the current Tokio runtime.
    pub fn spawn(shard_count: usize, buffer_size: usize) -> (Self, Vec<JoinHandle<()>>) {
        let (store, shards) = Self::new(shard_count, buffer_size);
        let handles = shards
            .into_iter()
            .map(|shard| tokio::spawn(shard.run()))
            .collect();
        (store, handles)
    }

    /// Builds a handle over existing senders. Ids start at 1.
    ///
    /// # Panics
    /// Panics if `senders` is empty.
    pub fn from_senders(senders: Vec<mpsc::Sender<StoreRequest<K>>>) -> Self {
        assert!(!senders.is_empty(), "an ActorStore needs at least one shard");
        Self {
            shards: senders.into(),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    fn shard_for(&self, id: ResourceId) -> &mpsc::Sender<StoreRequest<K>> {
        &self.shards[(id.0 % self.shards.len() as u64) as usize]
    }

    async fn request<T>(
        shard: &mpsc::Sender<StoreRequest<K>>,
        build: impl FnOnce(Response<T>) -> StoreRequest<K>,
    ) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        shard
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }
}

#[async_trait]
impl<K: ResourceKind> ResourceStore<K> for ActorStore<K> {
    async fn create(&self, attributes: K, status: K::Status) -> Result<Resource<K>, StoreError> {
        let id = ResourceId(self.next_id.fetch_add(1, Ordering::SeqCst));
        Self::request(self.shard_for(id), |respond_to| StoreRequest::Create {
            id,
            attributes,
            status,
            respond_to,
        })
        .await
    }

    async fn get(&self, id: ResourceId) -> Result<Resource<K>, StoreError> {
        Self::request(self.shard_for(id), |respond_to| StoreRequest::Get {
            id,
            respond_to,
        })
        .await
    }

    async fn update(
        &self,
        id: ResourceId,
        mutation: Mutation<K>,
    ) -> Result<Resource<K>, StoreError> {
        Self::request(self.shard_for(id), |respond_to| StoreRequest::Update {
            id,
            mutation,
            respond_to,
        })
        .await
    }

    async fn delete(&self, id: ResourceId) -> Result<(), StoreError> {
        Self::request(self.shard_for(id), |respond_to| StoreRequest::Delete {
            id,
            respond_to,
        })
        .await
    }

    async fn list_all(&self) -> Result<Vec<Resource<K>>, StoreError> {
        let mut records = Vec::new();
        for shard in self.shards.iter() {
            let part = Self::request(shard, |respond_to| StoreRequest::List { respond_to }).await?;
            records.extend(part);
        }
        records.sort_by_key(|record| record.id);
        Ok(records)
    }
}
