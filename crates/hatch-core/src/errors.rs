//! Cross-cutting error types.
//!
//! Storage and workflow errors live in their own crates (`DatabaseError`,
//! `WorkflowError`). `CoreError` covers failures raised by pure core logic
//! such as identifier parsing or sample-set addressing.

use thiserror::Error;

/// Errors that can be raised by any hatch crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
