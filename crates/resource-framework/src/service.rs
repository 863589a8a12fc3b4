//! # Resource Service
//!
//! `ResourceService` orchestrates the three collaborators of a resource kind:
//!
//! 1. the [`ResourceStore`] that owns the durable records,
//! 2. the [`StateMachine`] that decides which status moves are legal,
//! 3. the [`LinkBuilder`] that turns a record's status into hypermedia links.
//!
//! Every operation validates its input, performs at most one store call touching at
//! most one record, and returns the record together with its links
//! ([`Linked`]). Store failures are translated into [`ResourceError`]s here, so
//! callers never see store-specific errors.
//!
//! ## Transitions are checked inside the store
//!
//! [`ResourceService::transition`] does not read the status and then write it back.
//! It ships the state machine check to the store as part of the atomic
//! [`Mutation`](crate::store::Mutation), so the status it validates against is the
//! status it replaces. Two concurrent `complete`/`cancel` calls on one order are
//! ordered by the store; the second sees a terminal status and is rejected.

use crate::error::ResourceError;
use crate::links::{LinkBuilder, Links};
use crate::resource::{Resource, ResourceId, ResourceKind};
use crate::state_machine::{Lifecycle, StateMachine};
use crate::store::{ResourceStore, StoreError};
use std::marker::PhantomData;
use tracing::{debug, info, instrument, warn};

type ActionOf<K> = <<K as ResourceKind>::Status as Lifecycle>::Action;

/// A record plus the links computed from its current status.
#[derive(Debug, Clone, PartialEq)]
pub struct Linked<K: ResourceKind> {
    pub resource: Resource<K>,
    pub links: Links,
}

/// Every record of a kind, each with its own links, plus links for the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkedCollection<K: ResourceKind> {
    pub items: Vec<Linked<K>>,
    pub links: Links,
}

pub struct ResourceService<K: ResourceKind, S: ResourceStore<K>> {
    store: S,
    links: LinkBuilder<K>,
    machine: StateMachine<K::Status>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: ResourceKind, S: ResourceStore<K>> ResourceService<K, S> {
    /// The service validates transitions with the link builder's own state
    /// machine, so advertised links and accepted actions cannot diverge.
    pub fn new(store: S, links: LinkBuilder<K>) -> Self {
        let machine = links.machine();
        Self {
            store,
            links,
            machine,
            _kind: PhantomData,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn links(&self) -> &LinkBuilder<K> {
        &self.links
    }

    pub fn machine(&self) -> StateMachine<K::Status> {
        self.machine
    }

    fn link(&self, resource: Resource<K>) -> Linked<K> {
        let links = self.links.links_for(&resource);
        Linked { resource, links }
    }

    fn map_store(e: StoreError) -> ResourceError {
        match e {
            StoreError::NotFound(id) => ResourceError::NotFound { kind: K::NAME, id },
            StoreError::Rejected(inner) => inner,
            e @ (StoreError::ActorClosed | StoreError::ActorDropped) => {
                ResourceError::Unavailable(e.to_string())
            }
        }
    }

    /// Stores a new resource in the lifecycle's initial status.
    #[instrument(skip(self), fields(kind = K::NAME))]
    pub async fn create(&self, attributes: K) -> Result<Linked<K>, ResourceError> {
        attributes.validate()?;
        let resource = self
            .store
            .create(attributes, self.machine.initial())
            .await
            .map_err(Self::map_store)?;
        info!(id = %resource.id, status = %resource.status, "Created");
        Ok(self.link(resource))
    }

    /// Stores a resource with an explicit status, bypassing the state machine.
    ///
    /// Intended for bootstrap data only; request handlers go through
    /// [`create`](Self::create).
    #[instrument(skip(self), fields(kind = K::NAME))]
    pub async fn seed(&self, attributes: K, status: K::Status) -> Result<Linked<K>, ResourceError> {
        attributes.validate()?;
        let resource = self
            .store
            .create(attributes, status)
            .await
            .map_err(Self::map_store)?;
        info!(id = %resource.id, status = %resource.status, "Preloaded");
        Ok(self.link(resource))
    }

    #[instrument(skip(self), fields(kind = K::NAME))]
    pub async fn get(&self, id: ResourceId) -> Result<Linked<K>, ResourceError> {
        let resource = self.store.get(id).await.map_err(Self::map_store)?;
        Ok(self.link(resource))
    }

    /// The whole collection; no pagination.
    #[instrument(skip(self), fields(kind = K::NAME))]
    pub async fn list_all(&self) -> Result<LinkedCollection<K>, ResourceError> {
        let records = self.store.list_all().await.map_err(Self::map_store)?;
        debug!(count = records.len(), "Listed");
        Ok(LinkedCollection {
            items: records.into_iter().map(|record| self.link(record)).collect(),
            links: self.links.collection_links(),
        })
    }

    /// Replaces the attributes of an existing resource. Status is untouched.
    ///
    /// Unknown ids fail with `NotFound`; use [`create`](Self::create) to add records.
    #[instrument(skip(self), fields(kind = K::NAME))]
    pub async fn update(&self, id: ResourceId, attributes: K) -> Result<Linked<K>, ResourceError> {
        self.replace_attributes(id, attributes, None).await
    }

    /// As [`update`](Self::update), but fails with `Conflict` unless the stored
    /// version equals `expected_version`.
    #[instrument(skip(self), fields(kind = K::NAME))]
    pub async fn update_if_match(
        &self,
        id: ResourceId,
        attributes: K,
        expected_version: u64,
    ) -> Result<Linked<K>, ResourceError> {
        self.replace_attributes(id, attributes, Some(expected_version))
            .await
    }

    async fn replace_attributes(
        &self,
        id: ResourceId,
        attributes: K,
        expected_version: Option<u64>,
    ) -> Result<Linked<K>, ResourceError> {
        attributes.validate()?;
        let resource = self
            .store
            .update(
                id,
                Box::new(move |resource: &mut Resource<K>| {
                    if let Some(expected) = expected_version {
                        if resource.version != expected {
                            return Err(ResourceError::Conflict {
                                kind: K::NAME,
                                id: resource.id,
                                expected,
                                found: resource.version,
                            });
                        }
                    }
                    resource.attributes = attributes;
                    Ok(())
                }),
            )
            .await
            .map_err(Self::map_store)?;
        info!(%id, version = resource.version, "Updated");
        Ok(self.link(resource))
    }

    /// Moves the resource to the status the state machine prescribes for `action`.
    ///
    /// On rejection the resource is left exactly as it was.
    #[instrument(skip(self), fields(kind = K::NAME))]
    pub async fn transition(
        &self,
        id: ResourceId,
        action: ActionOf<K>,
    ) -> Result<Linked<K>, ResourceError> {
        let machine = self.machine;
        let result = self
            .store
            .update(
                id,
                Box::new(move |resource: &mut Resource<K>| {
                    let next = machine
                        .attempt_transition(resource.status, action)
                        .map_err(|rejected| ResourceError::IllegalTransition {
                            kind: K::NAME,
                            id: resource.id,
                            status: rejected.status.to_string(),
                            action: rejected.action.to_string(),
                        })?;
                    resource.status = next;
                    Ok(())
                }),
            )
            .await
            .map_err(Self::map_store);

        match result {
            Ok(resource) => {
                info!(%id, %action, status = %resource.status, "Transitioned");
                Ok(self.link(resource))
            }
            Err(e) => {
                warn!(%id, %action, error = %e, "Transition failed");
                Err(e)
            }
        }
    }

    /// [`transition`](Self::transition) by action name, as it appears in links.
    pub async fn transition_named(
        &self,
        id: ResourceId,
        action: &str,
    ) -> Result<Linked<K>, ResourceError> {
        let parsed = self
            .machine
            .parse_action(action)
            .ok_or_else(|| ResourceError::UnknownAction {
                kind: K::NAME,
                action: action.to_string(),
            })?;
        self.transition(id, parsed).await
    }

    #[instrument(skip(self), fields(kind = K::NAME))]
    pub async fn delete(&self, id: ResourceId) -> Result<(), ResourceError> {
        self.store.delete(id).await.map_err(Self::map_store)?;
        info!(%id, "Deleted");
        Ok(())
    }
}
