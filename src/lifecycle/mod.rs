//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the payroll service.
//!
//! **Key Responsibilities:**
//! 1. **Store Creation** - one sharded [`ActorStore`](resource_framework::ActorStore) per resource kind
//! 2. **Wiring** - a [`LinkBuilder`](resource_framework::LinkBuilder) and a service over each store, wrapped in a client
//! 3. **Bootstrap** - the sample orders and employees
//! 4. **Graceful Shutdown** - dropping the clients and awaiting every shard
//!
//! ```rust,ignore
//! let system = PayrollSystem::new(&config);
//! system.preload().await?;
//!
//! let app = system.router();
//! http::serve(listener, app, shutdown_signal()).await?;
//!
//! system.shutdown().await?;
//! ```
//!
//! Shards stop when the last sender to them is dropped. The router built by
//! [`PayrollSystem::router`] holds client clones, so the server has to finish
//! before [`PayrollSystem::shutdown`] returns.

pub mod payroll_system;

pub use payroll_system::PayrollSystem;
