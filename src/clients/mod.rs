//! Typed wrappers around [`ResourceService`](resource_framework::ResourceService).

pub mod employee_client;
pub mod order_client;
pub mod service_client;

pub use employee_client::EmployeeClient;
pub use order_client::OrderClient;
pub use service_client::{Service, ServiceClient};
