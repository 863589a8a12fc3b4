//! # Order Links
//!
//! A hypermedia payroll service: orders and employees exposed as HAL-style JSON,
//! where every order advertises exactly the transitions it currently accepts.
//!
//! ## Core Components
//!
//! - **[model]**: the resource kinds ([`Order`](model::Order), [`Employee`](model::Employee)) and their lifecycles.
//! - **[clients]**: typed wrappers over each kind's [`ResourceService`](resource_framework::ResourceService).
//! - **[lifecycle]**: [`PayrollSystem`](lifecycle::PayrollSystem) starts the stores, wires the services and shuts them down.
//! - **[http]**: the axum transport, representations and problem documents.
//! - **[config]**: flags and environment.
//!
//! ## Testing
//!
//! See [`resource_framework::mock`] for testing clients without spawning shards.

pub mod clients;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
