//! # Resource Errors
//!
//! Every failure a [`ResourceService`](crate::service::ResourceService) operation
//! can report. Errors are scoped to the single operation that produced them; none
//! is retried inside the framework and none is fatal to the process.
//!
//! Transport adapters map each variant to their own status vocabulary
//! (e.g. `NotFound` → 404, `Validation` → 400, `IllegalTransition` → 409).

use crate::resource::{ResourceId, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResourceError {
    /// No resource with this id exists (never created, or deleted).
    #[error("Could not find {kind} {id}")]
    NotFound { kind: &'static str, id: ResourceId },

    /// Malformed create/update input.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// The state machine has no transition for this action from the current status.
    #[error("You can't {action} {kind} {id} while it is in the {status} status")]
    IllegalTransition {
        kind: &'static str,
        id: ResourceId,
        status: String,
        action: String,
    },

    /// The action name is not declared by this kind's lifecycle at all.
    #[error("{kind} has no action named '{action}'")]
    UnknownAction { kind: &'static str, action: String },

    /// Optimistic concurrency check failed.
    #[error("{kind} {id} was modified concurrently (expected version {expected}, found {found})")]
    Conflict {
        kind: &'static str,
        id: ResourceId,
        expected: u64,
        found: u64,
    },

    /// The store could not be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Forbidden: {0}")]
    Forbidden(String),
}
