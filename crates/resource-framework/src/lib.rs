//! # Resource Framework
//!
//! Building blocks for hypermedia resources whose status moves through a fixed
//! lifecycle. A resource kind (an `Order`, an `Employee`) is described once with
//! two traits and the framework supplies the rest:
//!
//! - [`ResourceKind`] names the kind, its collection and its validation rules.
//! - [`Lifecycle`] declares the closed status set, the initial status and the
//!   `(from, action, to)` transition table.
//!
//! ## Architecture Overview
//!
//! 1. **Store** ([`ResourceStore`], [`ActorStore`]) - durable records. The built-in
//!    store is a set of actor shards, each owning a disjoint slice of ids and
//!    processing its messages sequentially.
//! 2. **State machine** ([`StateMachine`]) - pure evaluation of the transition table.
//! 3. **Links** ([`LinkBuilder`]) - `self`, collection and one link per legal action.
//! 4. **Service** ([`ResourceService`]) - validation, store calls, transition
//!    checks and link computation behind one API.
//!
//! ```rust,ignore
//! let (store, handles) = ActorStore::<Order>::spawn(4, 32);
//! let orders = ResourceService::new(store, LinkBuilder::new("http://localhost:8080", StateMachine::new()));
//!
//! let order = orders.create(Order::new("iPhone")).await?;
//! assert!(order.links.contains("cancel"));
//!
//! let done = orders.transition(order.resource.id, OrderAction::Complete).await?;
//! assert!(!done.links.contains("cancel"));
//! ```
//!
//! ## Concurrency Model
//!
//! - Each shard runs in its own Tokio task; messages are processed one at a time.
//! - An update (attribute replacement or transition) is a closure executed by the
//!   owning shard, so the check and the write cannot interleave with another writer.
//! - Different ids live on different shards and proceed in parallel.
//!
//! ## Testing
//!
//! The [`mock`] module hands out a real [`ActorStore`] whose requests land in a
//! channel the test reads, for exercising service and client code without shards.

pub mod auth;
pub mod error;
pub mod links;
pub mod mock;
pub mod resource;
pub mod service;
pub mod state_machine;
pub mod store;
pub mod tracing;

pub use auth::{AllowAuthenticated, Authorizer, OrganizationPolicy, Principal};
pub use error::ResourceError;
pub use links::{Link, LinkBuilder, Links, SELF_REL};
pub use resource::{require_text, Resource, ResourceId, ResourceKind, ValidationError};
pub use service::{Linked, LinkedCollection, ResourceService};
pub use state_machine::{Lifecycle, Rejected, StateMachine, UnknownVariant};
pub use store::{ActorStore, Mutation, ResourceStore, StoreError, StoreRequest, StoreShard};
