//! # Order Client
//!
//! High-level API for orders. Adds the two order verbs on top of the
//! [`ServiceClient`] operations.
use crate::clients::service_client::{Service, ServiceClient};
use crate::model::{Order, OrderAction};
use resource_framework::{Linked, ResourceError, ResourceId};
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Clone)]
pub struct OrderClient {
    inner: Arc<Service<Order>>,
}

impl OrderClient {
    pub fn new(inner: Service<Order>) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    #[instrument(skip(self))]
    pub async fn place(&self, description: &str) -> Result<Linked<Order>, ResourceError> {
        let order = self.inner.create(Order::new(description)).await?;
        info!(id = %order.resource.id, "Order placed");
        Ok(order)
    }

    /// Fails with `IllegalTransition` unless the order is `IN_PROGRESS`.
    #[instrument(skip(self))]
    pub async fn cancel(&self, id: ResourceId) -> Result<Linked<Order>, ResourceError> {
        self.inner.transition(id, OrderAction::Cancel).await
    }

    /// Fails with `IllegalTransition` unless the order is `IN_PROGRESS`.
    #[instrument(skip(self))]
    pub async fn complete(&self, id: ResourceId) -> Result<Linked<Order>, ResourceError> {
        self.inner.transition(id, OrderAction::Complete).await
    }
}

impl ServiceClient<Order> for OrderClient {
    fn service(&self) -> &Service<Order> {
        &self.inner
    }
}
