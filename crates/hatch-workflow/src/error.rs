use hatch_core::enums::{AuditStatus, AuditStep};
use hatch_core::errors::CoreError;
use hatch_db::DatabaseError;
use thiserror::Error;

use crate::validation::ValidationIssue;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("no audit in progress")]
    NoDraft,

    #[error("step {step} is incomplete ({count} issue(s))", count = .issues.len())]
    Validation {
        step: AuditStep,
        issues: Vec<ValidationIssue>,
    },

    #[error("sample plan already holds entered data; confirm the reset to discard it")]
    ResetNotConfirmed,

    #[error("cannot move audit {id} from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: AuditStatus,
        to: AuditStatus,
    },

    #[error(transparent)]
    Persistence(#[from] DatabaseError),

    #[error(transparent)]
    Core(#[from] CoreError),
}
