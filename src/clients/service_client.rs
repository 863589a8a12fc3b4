use async_trait::async_trait;
use resource_framework::{
    ActorStore, Linked, LinkedCollection, ResourceError, ResourceId, ResourceKind,
    ResourceService,
};

/// The service type every client wraps.
pub type Service<K> = ResourceService<K, ActorStore<K>>;

/// Trait for resource-specific clients to inherit the standard operations.
///
/// Implementors only expose their [`ResourceService`]; reads, writes and named
/// transitions come for free. Kind-specific verbs (`cancel`, `complete`) live
/// on the concrete client.
#[async_trait]
pub trait ServiceClient<K: ResourceKind>: Clone + Send + Sync + 'static {
    fn service(&self) -> &Service<K>;

    #[tracing::instrument(skip(self), fields(kind = K::NAME))]
    async fn create(&self, attributes: K) -> Result<Linked<K>, ResourceError> {
        tracing::debug!("Sending request");
        self.service().create(attributes).await
    }

    #[tracing::instrument(skip(self), fields(kind = K::NAME))]
    async fn get(&self, id: ResourceId) -> Result<Linked<K>, ResourceError> {
        tracing::debug!("Sending request");
        self.service().get(id).await
    }

    #[tracing::instrument(skip(self), fields(kind = K::NAME))]
    async fn list_all(&self) -> Result<LinkedCollection<K>, ResourceError> {
        tracing::debug!("Sending request");
        self.service().list_all().await
    }

    /// Replaces attributes. With `expected_version`, the write only happens if
    /// the stored version still matches.
    #[tracing::instrument(skip(self), fields(kind = K::NAME))]
    async fn update(
        &self,
        id: ResourceId,
        attributes: K,
        expected_version: Option<u64>,
    ) -> Result<Linked<K>, ResourceError> {
        tracing::debug!("Sending request");
        match expected_version {
            Some(version) => {
                self.service()
                    .update_if_match(id, attributes, version)
                    .await
            }
            None => self.service().update(id, attributes).await,
        }
    }

    #[tracing::instrument(skip(self), fields(kind = K::NAME))]
    async fn transition(&self, id: ResourceId, action: &str) -> Result<Linked<K>, ResourceError> {
        tracing::debug!("Sending request");
        self.service().transition_named(id, action).await
    }

    #[tracing::instrument(skip(self), fields(kind = K::NAME))]
    async fn delete(&self, id: ResourceId) -> Result<(), ResourceError> {
        tracing::debug!("Sending request");
        self.service().delete(id).await
    }
}
