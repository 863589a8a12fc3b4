//! # Authorization
//!
//! The framework does not authenticate anyone. Identity is established upstream
//! (an OAuth2 login, a proxy, a test) and arrives as a [`Principal`]. An
//! [`Authorizer`] then answers allow/deny before any service operation is
//! dispatched.

use crate::error::ResourceError;

/// An authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub name: String,
    pub organizations: Vec<String>,
}

impl Principal {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            organizations: Vec::new(),
        }
    }

    pub fn with_organizations<I, T>(mut self, organizations: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.organizations
            .extend(organizations.into_iter().map(Into::into));
        self
    }

    pub fn belongs_to(&self, organization: &str) -> bool {
        self.organizations.iter().any(|org| org == organization)
    }
}

/// Allow/deny decision for a (possibly anonymous) caller.
pub trait Authorizer: Send + Sync + 'static {
    fn authorize(&self, principal: Option<&Principal>) -> Result<(), ResourceError>;
}

/// Admits any authenticated caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAuthenticated;

impl Authorizer for AllowAuthenticated {
    fn authorize(&self, principal: Option<&Principal>) -> Result<(), ResourceError> {
        principal.map(|_| ()).ok_or(ResourceError::Unauthenticated)
    }
}

/// Admits authenticated callers that belong to one organization.
#[derive(Debug, Clone)]
pub struct OrganizationPolicy {
    organization: String,
}

impl OrganizationPolicy {
    pub fn new(organization: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
        }
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }
}

impl Authorizer for OrganizationPolicy {
    fn authorize(&self, principal: Option<&Principal>) -> Result<(), ResourceError> {
        let principal = principal.ok_or(ResourceError::Unauthenticated)?;
        if principal.belongs_to(&self.organization) {
            Ok(())
        } else {
            Err(ResourceError::Forbidden(format!(
                "Not in {}",
                self.organization
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_callers_are_unauthenticated() {
        assert_eq!(
            AllowAuthenticated.authorize(None),
            Err(ResourceError::Unauthenticated)
        );
        assert_eq!(
            OrganizationPolicy::new("spring-projects").authorize(None),
            Err(ResourceError::Unauthenticated)
        );
    }

    #[test]
    fn organization_policy_checks_membership() {
        let policy = OrganizationPolicy::new("spring-projects");
        let member = Principal::new("octocat").with_organizations(["github", "spring-projects"]);
        let outsider = Principal::new("mallory").with_organizations(["acme"]);

        assert!(policy.authorize(Some(&member)).is_ok());
        assert_eq!(
            policy.authorize(Some(&outsider)),
            Err(ResourceError::Forbidden("Not in spring-projects".into()))
        );
    }
}
