//! # Store Shard
//!
//! A `StoreShard` is the server half of the [`ActorStore`](super::ActorStore). It owns
//! a disjoint slice of the records and processes its requests one at a time in its
//! own Tokio task.
//!
//! **Concurrency model**: sequential processing inside a shard is what makes
//! [`StoreRequest::Update`] atomic per id. The mutation runs against a copy and the
//! copy replaces the stored record before the next request is even looked at, so
//! two writers racing on one id are simply ordered. Ids on different shards are
//! handled by different tasks and never wait on each other.

use super::message::StoreRequest;
use super::StoreError;
use crate::resource::{Resource, ResourceId, ResourceKind};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct StoreShard<K: ResourceKind> {
    index: usize,
    receiver: mpsc::Receiver<StoreRequest<K>>,
    records: HashMap<ResourceId, Resource<K>>,
}

impl<K: ResourceKind> StoreShard<K> {
    /// Creates a shard and the sender that feeds it.
    ///
    /// # Arguments
    ///
    /// * `index` - Position of the shard, used in logs only.
    /// * `buffer_size` - Capacity of the request channel. When it is full,
    ///   callers wait for space.
    pub fn new(index: usize, buffer_size: usize) -> (Self, mpsc::Sender<StoreRequest<K>>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let shard = Self {
            index,
            receiver,
            records: HashMap::new(),
        };
        (shard, sender)
    }

    /// Runs the shard's event loop until every sender has been dropped.
    pub async fn run(mut self) {
        let kind = K::NAME;
        let shard = self.index;
        info!(kind, shard, "Shard started");

        while let Some(request) = self.receiver.recv().await {
            match request {
                StoreRequest::Create {
                    id,
                    attributes,
                    status,
                    respond_to,
                } => {
                    debug!(kind, shard, %id, ?attributes, %status, "Create");
                    let record = Resource::new(id, attributes, status);
                    self.records.insert(id, record.clone());
                    info!(kind, shard, %id, size = self.records.len(), "Created");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::Get { id, respond_to } => {
                    let record = self.records.get(&id).cloned();
                    debug!(kind, shard, %id, found = record.is_some(), "Get");
                    let _ = respond_to.send(record.ok_or(StoreError::NotFound(id)));
                }
                StoreRequest::Update {
                    id,
                    mutation,
                    respond_to,
                } => {
                    debug!(kind, shard, %id, "Update");
                    let Some(stored) = self.records.get_mut(&id) else {
                        warn!(kind, shard, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id)));
                        continue;
                    };
                    let mut draft = stored.clone();
                    match mutation(&mut draft) {
                        Ok(()) => {
                            draft.id = id;
                            draft.version = stored.version + 1;
                            *stored = draft.clone();
                            info!(kind, shard, %id, version = draft.version, status = %draft.status, "Updated");
                            let _ = respond_to.send(Ok(draft));
                        }
                        Err(e) => {
                            warn!(kind, shard, %id, error = %e, "Update rejected");
                            let _ = respond_to.send(Err(StoreError::Rejected(e)));
                        }
                    }
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(kind, shard, %id, "Delete");
                    if self.records.remove(&id).is_some() {
                        info!(kind, shard, %id, size = self.records.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(kind, shard, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id)));
                    }
                }
                StoreRequest::List { respond_to } => {
                    let records: Vec<_> = self.records.values().cloned().collect();
                    debug!(kind, shard, count = records.len(), "List");
                    let _ = respond_to.send(Ok(records));
                }
            }
        }

        info!(kind, shard, size = self.records.len(), "Shutdown");
    }
}
