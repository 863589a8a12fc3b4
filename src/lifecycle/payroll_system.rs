use crate::clients::{EmployeeClient, OrderClient, Service, ServiceClient};
use crate::config::Config;
use crate::http;
use crate::model::{Employee, Order, OrderStatus};
use axum::Router;
use resource_framework::{
    ActorStore, Authorizer, LinkBuilder, ResourceError, ResourceKind, StateMachine,
};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The runtime orchestrator of the payroll service.
///
/// `PayrollSystem` is responsible for:
/// - **Lifecycle Management**: spawning every store shard and stopping them again
/// - **Dependency Wiring**: one store, link builder and service per resource kind
/// - **Bootstrap Data**: the two sample orders and employees
///
/// # Example
///
/// ```ignore
/// let system = PayrollSystem::new(&Config::default());
/// system.preload().await?;
///
/// let order = system.order_client.place("Surface Pro").await?;
/// system.order_client.complete(order.resource.id).await?;
///
/// system.shutdown().await?;
/// ```
pub struct PayrollSystem {
    pub order_client: OrderClient,

    pub employee_client: EmployeeClient,

    authorizer: Arc<dyn Authorizer>,

    base_url: String,

    /// Shard tasks of both stores (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl PayrollSystem {
    /// Spawns the stores and wires a service over each.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &Config) -> Self {
        let base_url = config.base_url();

        let (orders, mut handles) = spawn_service::<Order>(config, &base_url);
        let (employees, employee_handles) = spawn_service::<Employee>(config, &base_url);
        handles.extend(employee_handles);

        info!(
            %base_url,
            shards = config.shards,
            buffer = config.buffer,
            organization = config.organization.as_deref().unwrap_or("-"),
            "Payroll system started"
        );

        Self {
            order_client: OrderClient::new(orders),
            employee_client: EmployeeClient::new(employees),
            authorizer: config.authorizer(),
            base_url,
            handles,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Loads the sample data set: two employees, one completed and one open order.
    pub async fn preload(&self) -> Result<(), ResourceError> {
        self.employee_client
            .hire("Bilbo Baggins", "burglar")
            .await?;
        self.employee_client
            .hire("Frodo Baggins", "thief")
            .await?;

        let orders = self.order_client.service();
        orders
            .seed(Order::new("Macbook Pro"), OrderStatus::Completed)
            .await?;
        orders
            .seed(Order::new("iPhone"), OrderStatus::InProgress)
            .await?;

        info!("Preloaded sample data");
        Ok(())
    }

    /// The HTTP application over this system's clients.
    ///
    /// The router holds clones of the clients; it must be dropped before
    /// [`shutdown`](Self::shutdown) can complete.
    pub fn router(&self) -> Router {
        http::router(http::AppState {
            orders: self.order_client.clone(),
            employees: self.employee_client.clone(),
            authorizer: Arc::clone(&self.authorizer),
            base_url: Arc::from(self.base_url.as_str()),
        })
    }

    /// Gracefully shuts down every store shard.
    ///
    /// Dropping the clients closes the shard channels; each shard drains its
    /// queue and exits. Any other clone of a client (a running router, a test)
    /// keeps its shards alive, so drop those first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.employee_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Shard task failed: {:?}", e);
                return Err(format!("Shard task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

fn spawn_service<K: ResourceKind>(
    config: &Config,
    base_url: &str,
) -> (Service<K>, Vec<JoinHandle<()>>) {
    let (store, handles) = ActorStore::<K>::spawn(config.shards, config.buffer);
    let links = LinkBuilder::new(base_url, StateMachine::new());
    (Service::new(store, links), handles)
}
