//! Problem documents (`application/problem+json`) for every failure.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use resource_framework::{ResourceError, ValidationError};
use serde::Serialize;
use tracing::{debug, error, warn};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// The request could not be read at all (bad JSON, bad id, bad header).
    #[error("{0}")]
    BadRequest(String),
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Resource(ResourceError::Validation(e))
    }
}

#[derive(Debug, Serialize)]
struct Problem {
    title: String,
    status: u16,
    detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Resource(e) => match e {
                ResourceError::NotFound { .. } | ResourceError::UnknownAction { .. } => {
                    StatusCode::NOT_FOUND
                }
                ResourceError::Validation(_) => StatusCode::BAD_REQUEST,
                ResourceError::IllegalTransition { .. } => StatusCode::CONFLICT,
                ResourceError::Conflict { .. } => StatusCode::PRECONDITION_FAILED,
                ResourceError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                ResourceError::Unauthenticated => StatusCode::UNAUTHORIZED,
                ResourceError::Forbidden(_) => StatusCode::FORBIDDEN,
            },
        }
    }

    fn title(&self) -> &'static str {
        match self {
            ApiError::Resource(ResourceError::IllegalTransition { .. }) => "Method not allowed",
            other => other.status().canonical_reason().unwrap_or("Error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let problem = Problem {
            title: self.title().to_string(),
            status: status.as_u16(),
            detail: self.to_string(),
        };

        if status.is_server_error() {
            error!(status = problem.status, detail = %problem.detail, "Request failed");
        } else if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            warn!(status = problem.status, detail = %problem.detail, "Request denied");
        } else {
            debug!(status = problem.status, detail = %problem.detail, "Request rejected");
        }

        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            Json(problem),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_framework::ResourceId;

    #[test]
    fn illegal_transition_is_a_409_method_not_allowed() {
        let err = ApiError::from(ResourceError::IllegalTransition {
            kind: "order",
            id: ResourceId(1),
            status: "COMPLETED".into(),
            action: "cancel".into(),
        });
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.title(), "Method not allowed");
        assert_eq!(
            err.to_string(),
            "You can't cancel order 1 while it is in the COMPLETED status"
        );
    }

    #[test]
    fn status_codes_follow_the_error_kind() {
        let cases = [
            (
                ApiError::from(ResourceError::NotFound {
                    kind: "order",
                    id: ResourceId(9),
                }),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(ValidationError::missing("description")),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(ResourceError::Conflict {
                    kind: "order",
                    id: ResourceId(1),
                    expected: 1,
                    found: 2,
                }),
                StatusCode::PRECONDITION_FAILED,
            ),
            (
                ApiError::from(ResourceError::Unauthenticated),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError::from(ResourceError::Unavailable("closed".into())),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.status(), status, "{err}");
        }
    }

    #[test]
    fn response_is_problem_json() {
        let response = ApiError::BadRequest("Invalid id 'abc'".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/problem+json"
        );
    }
}
