//! # Representations
//!
//! HAL-style JSON for records and collections, written and read by hand per
//! resource kind:
//!
//! ```json
//! {
//!   "id": 2,
//!   "description": "iPhone",
//!   "status": "IN_PROGRESS",
//!   "_links": {
//!     "self":     { "href": "http://localhost:8080/orders/2" },
//!     "orders":   { "href": "http://localhost:8080/orders" },
//!     "cancel":   { "href": "http://localhost:8080/orders/2/cancel" },
//!     "complete": { "href": "http://localhost:8080/orders/2/complete" }
//!   }
//! }
//! ```
//!
//! Collections wrap their items in `_embedded.<kind>List`. Incoming bodies only
//! carry attributes; `id`, `status` and `_links` in a request are ignored.

use crate::model::{Employee, Order};
use resource_framework::{Linked, LinkedCollection, Links, ResourceKind, ValidationError};
use serde_json::{json, Map, Value};

/// Hand-written JSON mapping of a resource kind's attributes.
pub trait Representation: ResourceKind {
    /// Key of the item array under `_embedded` in collection documents.
    const EMBEDDED: &'static str;

    fn write_attributes(&self, body: &mut Map<String, Value>);

    fn read(body: &Map<String, Value>) -> Result<Self, ValidationError>;
}

impl Representation for Order {
    const EMBEDDED: &'static str = "orderList";

    fn write_attributes(&self, body: &mut Map<String, Value>) {
        body.insert("description".into(), json!(self.description));
    }

    fn read(body: &Map<String, Value>) -> Result<Self, ValidationError> {
        Ok(Order::new(text(body, "description")?))
    }
}

impl Representation for Employee {
    const EMBEDDED: &'static str = "employeeList";

    fn write_attributes(&self, body: &mut Map<String, Value>) {
        body.insert("firstName".into(), json!(self.first_name));
        body.insert("lastName".into(), json!(self.last_name));
        body.insert("name".into(), json!(self.name()));
        body.insert("role".into(), json!(self.role));
    }

    /// Accepts either a full `name` or separate `firstName`/`lastName`.
    fn read(body: &Map<String, Value>) -> Result<Self, ValidationError> {
        let role = text(body, "role")?;
        if body.contains_key("name") {
            return Ok(Employee::from_full_name(&text(body, "name")?, role));
        }
        Ok(Employee::new(
            text(body, "firstName")?,
            text(body, "lastName")?,
            role,
        ))
    }
}

fn text(body: &Map<String, Value>, field: &'static str) -> Result<String, ValidationError> {
    match body.get(field) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(Value::Null) | None => Err(ValidationError::missing(field)),
        Some(_) => Err(ValidationError::new(field, "must be a string")),
    }
}

/// Reads a request body into attributes.
pub fn decode<K: Representation>(body: &Value) -> Result<K, ValidationError> {
    match body {
        Value::Object(map) => K::read(map),
        _ => Err(ValidationError::new("body", "must be a JSON object")),
    }
}

pub fn encode<K: Representation>(linked: &Linked<K>) -> Value {
    let resource = &linked.resource;
    let mut body = Map::new();
    body.insert("id".into(), json!(resource.id.0));
    resource.attributes.write_attributes(&mut body);
    body.insert("status".into(), json!(resource.status.to_string()));
    body.insert("_links".into(), encode_links(&linked.links));
    Value::Object(body)
}

pub fn encode_collection<K: Representation>(collection: &LinkedCollection<K>) -> Value {
    let items: Vec<Value> = collection.items.iter().map(encode).collect();
    let mut embedded = Map::new();
    embedded.insert(K::EMBEDDED.into(), Value::Array(items));
    json!({
        "_embedded": embedded,
        "_links": encode_links(&collection.links),
    })
}

pub fn encode_links(links: &Links) -> Value {
    let map: Map<String, Value> = links
        .iter()
        .map(|link| (link.rel.clone(), json!({ "href": link.href })))
        .collect();
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EmployeeStatus, OrderStatus};
    use resource_framework::{LinkBuilder, Resource, ResourceId, StateMachine};

    #[test]
    fn order_document_carries_attributes_status_and_links() {
        let builder = LinkBuilder::<Order>::new("http://localhost:8080", StateMachine::new());
        let resource = Resource::new(ResourceId(2), Order::new("iPhone"), OrderStatus::InProgress);
        let links = builder.links_for(&resource);

        let body = encode(&Linked { resource, links });

        assert_eq!(body["id"], 2);
        assert_eq!(body["description"], "iPhone");
        assert_eq!(body["status"], "IN_PROGRESS");
        assert_eq!(
            body["_links"]["cancel"]["href"],
            "http://localhost:8080/orders/2/cancel"
        );
        assert_eq!(body["_links"]["orders"]["href"], "http://localhost:8080/orders");
    }

    #[test]
    fn employee_collection_embeds_items() {
        let builder = LinkBuilder::<Employee>::new("", StateMachine::new());
        let resource = Resource::new(
            ResourceId(1),
            Employee::new("Bilbo", "Baggins", "burglar"),
            EmployeeStatus::Active,
        );
        let links = builder.links_for(&resource);
        let collection = LinkedCollection {
            items: vec![Linked { resource, links }],
            links: builder.collection_links(),
        };

        let body = encode_collection(&collection);

        let item = &body["_embedded"]["employeeList"][0];
        assert_eq!(item["name"], "Bilbo Baggins");
        assert_eq!(item["firstName"], "Bilbo");
        assert_eq!(item["_links"]["self"]["href"], "/employees/1");
        assert_eq!(body["_links"]["self"]["href"], "/employees");
    }

    #[test]
    fn employee_reads_full_name_or_parts() {
        let by_name: Employee =
            decode(&json!({ "name": "Samwise Gamgee", "role": "gardener" })).unwrap();
        let by_parts: Employee = decode(&json!({
            "firstName": "Samwise",
            "lastName": "Gamgee",
            "role": "gardener"
        }))
        .unwrap();
        assert_eq!(by_name, by_parts);
    }

    #[test]
    fn malformed_bodies_name_the_field() {
        assert_eq!(
            decode::<Order>(&json!({ "status": "COMPLETED" })).unwrap_err(),
            ValidationError::missing("description")
        );
        assert_eq!(
            decode::<Order>(&json!({ "description": 42 })).unwrap_err(),
            ValidationError::new("description", "must be a string")
        );
        assert_eq!(
            decode::<Order>(&json!(["iPhone"])).unwrap_err().field,
            "body"
        );
    }
}
