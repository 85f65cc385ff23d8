//! # hatch-workflow
//!
//! The audit wizard as an owned session object.
//!
//! An [`AuditSession`] holds the single in-progress draft and a handle to
//! the [`AuditStore`](hatch_db::AuditStore). Every mutation autosaves the
//! draft slot; [`AuditSession::complete`] scores the draft and appends it
//! to the audit history.

pub mod error;
pub mod section;
pub mod session;
pub mod validation;

pub use error::WorkflowError;
pub use section::SectionUpdate;
pub use session::{AuditSession, WorkflowOptions};
pub use validation::{ValidationIssue, validate_all, validate_step};
