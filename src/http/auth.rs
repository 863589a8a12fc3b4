//! Caller identity from the authenticating proxy in front of the service.
//!
//! The proxy completes the OAuth2 login and forwards the user name and the
//! comma-separated organizations as headers. Requests without a user name are
//! anonymous.

use super::error::ApiError;
use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use resource_framework::{Authorizer, Principal};
use std::sync::Arc;
use tracing::debug;

pub const USER_HEADER: &str = "x-forwarded-user";
pub const GROUPS_HEADER: &str = "x-forwarded-groups";

pub fn principal_from_headers(headers: &HeaderMap) -> Option<Principal> {
    let name = headers.get(USER_HEADER)?.to_str().ok()?.trim();
    if name.is_empty() {
        return None;
    }
    let organizations = headers
        .get(GROUPS_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|groups| {
            groups
                .split(',')
                .map(str::trim)
                .filter(|group| !group.is_empty())
                .map(String::from)
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    Some(Principal::new(name).with_organizations(organizations))
}

/// Rejects the request unless the authorizer admits its principal. Admitted
/// principals are available to handlers as `Extension<Principal>`.
pub async fn require_principal(
    State(authorizer): State<Arc<dyn Authorizer>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let principal = principal_from_headers(request.headers());
    authorizer.authorize(principal.as_ref())?;

    if let Some(principal) = principal {
        debug!(user = %principal.name, "Authorized");
        request.extensions_mut().insert(principal);
    }
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn reads_user_and_groups() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_HEADER, HeaderValue::from_static("octocat"));
        headers.insert(
            GROUPS_HEADER,
            HeaderValue::from_static("github, spring-projects,,"),
        );

        let principal = principal_from_headers(&headers).unwrap();
        assert_eq!(principal.name, "octocat");
        assert_eq!(principal.organizations, vec!["github", "spring-projects"]);
    }

    #[test]
    fn blank_user_is_anonymous() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_HEADER, HeaderValue::from_static("  "));
        assert_eq!(principal_from_headers(&headers), None);
        assert_eq!(principal_from_headers(&HeaderMap::new()), None);
    }
}
