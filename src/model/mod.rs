//! Resource kinds managed by the payroll service. Each implements
//! [`ResourceKind`](resource_framework::ResourceKind) and brings its own
//! [`Lifecycle`](resource_framework::Lifecycle).

pub mod employee;
pub mod order;

pub use employee::*;
pub use order::*;
