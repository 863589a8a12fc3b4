//! # Mock Store
//!
//! Utilities for testing services and clients without running shards.
//!
//! [`create_mock_store`] returns a real [`ActorStore`] handle whose single shard
//! channel ends in a receiver you control. Use the `expect_*` helpers to pull the
//! next request off that receiver, assert on it, and answer it however the test
//! needs: success, `NotFound`, a dropped responder, or a closed channel.
//!
//! ```rust,ignore
//! let (store, mut requests) = create_mock_store::<Order>(8);
//! let service = ResourceService::new(store, LinkBuilder::new("", StateMachine::new()));
//!
//! let call = tokio::spawn(async move { service.get(ResourceId(1)).await });
//! let (id, responder) = expect_get(&mut requests).await.expect("Expected Get request");
//! responder.send(Err(StoreError::NotFound(id))).unwrap();
//! assert!(matches!(call.await.unwrap(), Err(ResourceError::NotFound { .. })));
//! ```

use crate::resource::{Resource, ResourceId, ResourceKind};
use crate::store::{ActorStore, Mutation, Response, StoreRequest};
use tokio::sync::mpsc;

/// A store handle backed by one channel, plus the receiving end of that channel.
pub fn create_mock_store<K: ResourceKind>(
    buffer_size: usize,
) -> (ActorStore<K>, mpsc::Receiver<StoreRequest<K>>) {
    let (sender, receiver) = mpsc::channel(buffer_size.max(1));
    (ActorStore::from_senders(vec![sender]), receiver)
}

/// Next request, if it is a Create.
pub async fn expect_create<K: ResourceKind>(
    receiver: &mut mpsc::Receiver<StoreRequest<K>>,
) -> Option<(ResourceId, K, K::Status, Response<Resource<K>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Create {
            id,
            attributes,
            status,
            respond_to,
        }) => Some((id, attributes, status, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a Get.
pub async fn expect_get<K: ResourceKind>(
    receiver: &mut mpsc::Receiver<StoreRequest<K>>,
) -> Option<(ResourceId, Response<Resource<K>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an Update. The caller runs the mutation itself.
pub async fn expect_update<K: ResourceKind>(
    receiver: &mut mpsc::Receiver<StoreRequest<K>>,
) -> Option<(ResourceId, Mutation<K>, Response<Resource<K>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Update {
            id,
            mutation,
            respond_to,
        }) => Some((id, mutation, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a Delete.
pub async fn expect_delete<K: ResourceKind>(
    receiver: &mut mpsc::Receiver<StoreRequest<K>>,
) -> Option<(ResourceId, Response<()>)> {
    match receiver.recv().await {
        Some(StoreRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
