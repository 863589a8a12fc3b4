//! # Employee Client
use crate::clients::service_client::{Service, ServiceClient};
use crate::model::Employee;
use resource_framework::{Linked, ResourceError};
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Clone)]
pub struct EmployeeClient {
    inner: Arc<Service<Employee>>,
}

impl EmployeeClient {
    pub fn new(inner: Service<Employee>) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Creates an employee from a full name such as `"Bilbo Baggins"`.
    #[instrument(skip(self))]
    pub async fn hire(&self, name: &str, role: &str) -> Result<Linked<Employee>, ResourceError> {
        let employee = self
            .inner
            .create(Employee::from_full_name(name, role))
            .await?;
        info!(id = %employee.resource.id, "Employee hired");
        Ok(employee)
    }
}

impl ServiceClient<Employee> for EmployeeClient {
    fn service(&self) -> &Service<Employee> {
        &self.inner
    }
}
