//! # hatch-scoring
//!
//! Pure scoring and classification for hatchery vaccination audits.
//!
//! - [`plate`]: 1-5 plate score from Aspergillus and other-mold counts
//! - [`environmental`]: weighted environmental score and GOOD/FAIR/POOR verdict
//! - [`compliance`]: checklist percentages for storage, equipment, and techniques
//! - [`summary`]: the completion summary and overall status
//! - [`issues`]: rule-detected critical issues
//!
//! Nothing here performs I/O; every function is deterministic.

pub mod compliance;
pub mod environmental;
pub mod issues;
pub mod plate;
pub mod summary;

pub use compliance::{
    compliance_classification, compliance_percentage, equipment_score, techniques_score,
    vaccine_storage_score,
};
pub use environmental::{classify_environmental_score, environmental_breakdown, environmental_score};
pub use issues::critical_issues;
pub use plate::plate_score;
pub use summary::{audit_summary, overall_status};
