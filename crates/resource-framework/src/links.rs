//! # Hypermedia Links
//!
//! [`LinkBuilder`] computes the links a client may follow from a resource:
//!
//! - `self` → `{base}/{collection}/{id}`
//! - `{collection}` → `{base}/{collection}` (the aggregate root)
//! - one `{action}` → `{base}/{collection}/{id}/{action}` per action legal in the
//!   resource's current status
//!
//! Action links come from the builder's own [`StateMachine`], the same one the
//! service uses to validate transitions, so a link is advertised if and only if
//! following it would succeed.

use crate::resource::{Resource, ResourceId, ResourceKind};
use crate::state_machine::{Lifecycle, StateMachine};
use std::marker::PhantomData;

/// Relation name of the link that points at the resource itself.
pub const SELF_REL: &str = "self";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

/// Ordered set of links with unique relation names.
///
/// Inserting a relation that is already present replaces its href in place,
/// keeping the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links(Vec<Link>);

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, rel: impl Into<String>, href: impl Into<String>) {
        let rel = rel.into();
        let href = href.into();
        match self.0.iter_mut().find(|link| link.rel == rel) {
            Some(existing) => existing.href = href,
            None => self.0.push(Link { rel, href }),
        }
    }

    pub fn with(mut self, rel: impl Into<String>, href: impl Into<String>) -> Self {
        self.insert(rel, href);
        self
    }

    pub fn get(&self, rel: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|link| link.rel == rel)
            .map(|link| link.href.as_str())
    }

    pub fn contains(&self, rel: &str) -> bool {
        self.get(rel).is_some()
    }

    pub fn rels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|link| link.rel.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Link> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Links {
    type Item = &'a Link;
    type IntoIter = std::slice::Iter<'a, Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Builds links for one resource kind under a base URL.
#[derive(Debug, Clone)]
pub struct LinkBuilder<K: ResourceKind> {
    base_url: String,
    machine: StateMachine<K::Status>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: ResourceKind> LinkBuilder<K> {
    /// `base_url` may be absolute (`http://localhost:8080`) or empty for
    /// root-relative hrefs. A trailing slash is ignored.
    pub fn new(base_url: impl Into<String>, machine: StateMachine<K::Status>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            machine,
            _kind: PhantomData,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn machine(&self) -> StateMachine<K::Status> {
        self.machine
    }

    pub fn collection_href(&self) -> String {
        format!("{}/{}", self.base_url, K::COLLECTION)
    }

    pub fn self_href(&self, id: ResourceId) -> String {
        format!("{}/{}/{}", self.base_url, K::COLLECTION, id)
    }

    pub fn action_href(&self, id: ResourceId, action: <K::Status as Lifecycle>::Action) -> String {
        format!("{}/{}/{}/{}", self.base_url, K::COLLECTION, id, action)
    }

    pub fn links_for(&self, resource: &Resource<K>) -> Links {
        let mut links = Links::new()
            .with(SELF_REL, self.self_href(resource.id))
            .with(K::COLLECTION, self.collection_href());
        for action in self.machine.legal_actions(resource.status) {
            links.insert(action.to_string(), self.action_href(resource.id, action));
        }
        links
    }

    pub fn collection_links(&self) -> Links {
        Links::new().with(SELF_REL, self.collection_href())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_existing_relation_in_place() {
        let mut links = Links::new().with("self", "/a").with("orders", "/orders");
        links.insert("self", "/b");
        assert_eq!(links.len(), 2);
        assert_eq!(links.rels().collect::<Vec<_>>(), vec!["self", "orders"]);
        assert_eq!(links.get("self"), Some("/b"));
    }

    #[test]
    fn missing_relation_is_none() {
        let links = Links::new().with("self", "/a");
        assert!(!links.contains("cancel"));
        assert_eq!(links.get("cancel"), None);
        assert!(!links.is_empty());
    }
}
